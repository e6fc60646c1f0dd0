//! URL normalization and dispatch orchestration
//!
//! [`Resolver::resolve`] is the single entry point both link sources feed:
//! the one-shot initial-URL query at cold start and the runtime URL event
//! subscription. It parses the raw string, flattens custom-scheme URLs into
//! an ordinary path, walks the route table in specific-before-catch-all
//! order, and hands the first match to the navigation bridge. Every failure
//! branch degrades to a logged no-op or the generic web viewer; nothing
//! escapes to the caller.

use crate::bridge::NavigationBridge;
use crate::error::{DeepLinkError, Resolution};
use crate::params::RouteParams;
use crate::table::RouteTable;
use crate::{debug_log, trace_log, warn_log};
use url::Url;

/// Canonical web origin used when synthesizing fallback URLs.
pub const WEB_ORIGIN: &str = "https://biblophile.com";

/// Default route name for the bare-launch dispatch.
pub const HOME_ROUTE: &str = "Home";

/// Default route name of the generic web-content viewer.
pub const WEB_VIEWER_ROUTE: &str = "WebViewer";

/// Parameter key carrying the fallback URL to the web viewer.
pub const WEB_VIEWER_PARAM: &str = "url";

/// Structural components of an incoming URL
///
/// For custom app schemes the authority holds what would be the first path
/// segment (`biblophile://streaks/weekly` puts `streaks` in the host), so
/// the host is kept separate and re-flattened by [`ParsedUrl::effective_path`].
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    scheme: String,
    host: Option<String>,
    /// Path with the leading `/` already stripped; `None` when empty
    path: Option<String>,
    /// Decoded query pairs, first occurrence per key
    query: RouteParams,
    /// The raw query string, verbatim, without the leading `?`
    query_raw: Option<String>,
}

impl ParsedUrl {
    /// Parse a raw URL string
    pub fn parse(raw_url: &str) -> Result<Self, DeepLinkError> {
        let url = Url::parse(raw_url).map_err(|source| DeepLinkError::UrlParse {
            input: raw_url.to_string(),
            source,
        })?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .map(str::to_string);
        // Strip exactly one leading slash; repeated slashes stay and fail
        // matching deterministically instead of being forgiven.
        let raw_path = url.path();
        let path = Some(raw_path.strip_prefix('/').unwrap_or(raw_path))
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            path,
            query: RouteParams::from_query_pairs(url.query_pairs()),
            query_raw: url.query().map(str::to_string),
        })
    }

    /// URL scheme, lowercased by the parser
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Whether this is a standard web URL rather than a custom scheme
    pub fn is_web(&self) -> bool {
        self.scheme == "http" || self.scheme == "https"
    }

    /// Decoded query parameters
    pub fn query(&self) -> &RouteParams {
        &self.query
    }

    /// The single path the matcher runs against
    ///
    /// Web URLs use their path as-is. Custom-scheme URLs re-attach the host
    /// in front of the path, since the authority there is really the first
    /// path segment. Returns `None` when nothing remains (bare launch).
    pub fn effective_path(&self) -> Option<String> {
        if self.is_web() {
            return self.path.clone();
        }
        match (&self.host, &self.path) {
            (Some(host), Some(path)) => Some(format!("{}/{}", host, path)),
            (Some(host), None) => Some(host.clone()),
            (None, path) => path.clone(),
        }
    }
}

/// The deep-link resolution engine
///
/// Holds the immutable route table and the injected navigation bridge.
/// All configuration is fixed at construction; concurrent [`resolve`]
/// calls share only read-only state.
///
/// [`resolve`]: Resolver::resolve
#[derive(Debug, Clone)]
pub struct Resolver {
    table: RouteTable,
    bridge: NavigationBridge,
    web_origin: String,
    home_route: String,
    viewer_route: String,
}

impl Resolver {
    /// Create a resolver with the Biblophile defaults
    pub fn new(table: RouteTable, bridge: NavigationBridge) -> Self {
        Self {
            table,
            bridge,
            web_origin: WEB_ORIGIN.to_string(),
            home_route: HOME_ROUTE.to_string(),
            viewer_route: WEB_VIEWER_ROUTE.to_string(),
        }
    }

    /// Override the canonical web origin used for fallback URLs
    pub fn web_origin(mut self, origin: impl Into<String>) -> Self {
        self.web_origin = origin.into();
        self
    }

    /// Override the route dispatched on a bare launch
    pub fn home_route(mut self, route: impl Into<String>) -> Self {
        self.home_route = route.into();
        self
    }

    /// Override the generic web-content viewer route
    pub fn viewer_route(mut self, route: impl Into<String>) -> Self {
        self.viewer_route = route.into();
        self
    }

    /// Resolve the cold-start initial URL, if the platform reported one
    pub fn resolve_initial(&self, initial: Option<&str>) -> Option<Resolution> {
        match initial {
            Some(raw_url) => {
                debug_log!("Resolving initial URL: '{}'", raw_url);
                Some(self.resolve(raw_url))
            }
            None => {
                trace_log!("No initial URL at launch");
                None
            }
        }
    }

    /// Resolve a raw URL into at most one navigation dispatch
    ///
    /// Never errors and never panics: unparsable input is logged and
    /// dropped, an unmatched path goes to the generic viewer, and a
    /// not-ready controller loses the dispatch (see the bridge policy).
    pub fn resolve(&self, raw_url: &str) -> Resolution {
        let raw_url = raw_url.trim();

        // The url crate rejects relative input, but an empty link is the
        // documented bare-launch case, so check before parsing.
        if raw_url.is_empty() {
            return self.dispatch_home();
        }

        let parsed = match ParsedUrl::parse(raw_url) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn_log!("Ignoring deep link: {}", err);
                return Resolution::Invalid;
            }
        };

        let Some(path) = parsed.effective_path() else {
            return self.dispatch_home();
        };

        for route in self.table.ordered() {
            trace_log!("Trying template '{}' against '{}'", route.template(), path);
            let Some(mut params) = route.pattern().matches(&path) else {
                continue;
            };

            // Query fills in names the path did not bind; path captures win.
            params.merge_missing(parsed.query());
            debug_log!(
                "Deep link '{}' matched route '{}' with params {:?}",
                raw_url,
                route.name(),
                params
            );

            if !self.bridge.dispatch(route.name(), &params) {
                return Resolution::DroppedNotReady {
                    route: route.name().to_string(),
                };
            }
            return Resolution::Matched {
                route: route.name().to_string(),
                params,
            };
        }

        self.dispatch_fallback(raw_url, &path, &parsed)
    }

    fn dispatch_home(&self) -> Resolution {
        debug_log!("Deep link carries no path, dispatching '{}'", self.home_route);
        if !self.bridge.dispatch(&self.home_route, &RouteParams::new()) {
            return Resolution::DroppedNotReady {
                route: self.home_route.clone(),
            };
        }
        Resolution::Home
    }

    /// No template matched: hand the link to the generic viewer so it still
    /// lands somewhere navigable.
    fn dispatch_fallback(&self, raw_url: &str, path: &str, parsed: &ParsedUrl) -> Resolution {
        let url = if raw_url.starts_with("http") {
            raw_url.to_string()
        } else {
            match &parsed.query_raw {
                Some(query) => format!("{}/{}?{}", self.web_origin, path, query),
                None => format!("{}/{}", self.web_origin, path),
            }
        };

        debug_log!("No route matched, opening viewer for '{}'", url);
        let mut params = RouteParams::new();
        params.insert(WEB_VIEWER_PARAM.to_string(), url.clone());

        if !self.bridge.dispatch(&self.viewer_route, &params) {
            return Resolution::DroppedNotReady {
                route: self.viewer_route.clone(),
            };
        }
        Resolution::Fallback { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_web_url() {
        let parsed = ParsedUrl::parse("https://biblophile.com/books/Book/42?sort=rating").unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert!(parsed.is_web());
        assert_eq!(parsed.effective_path(), Some("books/Book/42".to_string()));
        assert_eq!(parsed.query().get("sort"), Some(&"rating".to_string()));
        assert_eq!(parsed.query_raw.as_deref(), Some("sort=rating"));
    }

    #[test]
    fn test_parse_custom_scheme_flattens_host() {
        let parsed = ParsedUrl::parse("biblophile://streaks/weekly").unwrap();
        assert_eq!(parsed.scheme(), "biblophile");
        assert!(!parsed.is_web());
        assert_eq!(parsed.effective_path(), Some("streaks/weekly".to_string()));
    }

    #[test]
    fn test_parse_custom_scheme_host_only() {
        let parsed = ParsedUrl::parse("biblophile://cart").unwrap();
        assert_eq!(parsed.effective_path(), Some("cart".to_string()));
    }

    #[test]
    fn test_parse_bare_custom_scheme_has_no_path() {
        let parsed = ParsedUrl::parse("biblophile://").unwrap();
        assert_eq!(parsed.effective_path(), None);
    }

    #[test]
    fn test_parse_web_url_root_path_is_empty() {
        let parsed = ParsedUrl::parse("https://biblophile.com/").unwrap();
        assert_eq!(parsed.effective_path(), None);

        let parsed = ParsedUrl::parse("https://biblophile.com").unwrap();
        assert_eq!(parsed.effective_path(), None);
    }

    #[test]
    fn test_parse_decodes_query_pairs() {
        let parsed =
            ParsedUrl::parse("biblophile://search?q=the%20hobbit&lang=en").unwrap();
        assert_eq!(parsed.query().get("q"), Some(&"the hobbit".to_string()));
        assert_eq!(parsed.query().get("lang"), Some(&"en".to_string()));
        // Raw query survives verbatim for fallback synthesis.
        assert_eq!(parsed.query_raw.as_deref(), Some("q=the%20hobbit&lang=en"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ParsedUrl::parse("not a url").is_err());
        assert!(ParsedUrl::parse("relative/path").is_err());
    }
}
