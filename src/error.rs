//! Error and outcome types
//!
//! Nothing in this engine propagates an error to the caller of `resolve`:
//! an unparsable URL, an unmatched path, or a not-yet-ready controller all
//! degrade to a logged no-op or a generic-viewer dispatch. [`DeepLinkError`]
//! exists for the one fallible surface (route table construction) and for
//! diagnostics; [`Resolution`] reports what a resolve call actually did.

use crate::params::RouteParams;
use std::fmt;

/// Errors produced while building or running the engine
#[derive(Debug)]
pub enum DeepLinkError {
    /// The incoming URL could not be parsed
    UrlParse {
        input: String,
        source: url::ParseError,
    },

    /// A route template failed validation
    InvalidTemplate { template: String, reason: String },
}

impl DeepLinkError {
    pub(crate) fn invalid_template(
        template: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeepLinkError::InvalidTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DeepLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepLinkError::UrlParse { input, source } => {
                write!(f, "cannot parse URL '{}': {}", input, source)
            }
            DeepLinkError::InvalidTemplate { template, reason } => {
                write!(f, "invalid route template '{}': {}", template, reason)
            }
        }
    }
}

impl std::error::Error for DeepLinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeepLinkError::UrlParse { source, .. } => Some(source),
            DeepLinkError::InvalidTemplate { .. } => None,
        }
    }
}

/// Outcome of a single resolve call
///
/// `resolve` itself never fails; this enum makes the chosen branch
/// observable for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A specific template matched and navigation was dispatched
    Matched { route: String, params: RouteParams },
    /// The URL carried no effective path; the home route was dispatched
    Home,
    /// Nothing matched; the generic viewer was dispatched with this URL
    Fallback { url: String },
    /// A route won but the controller was not ready; the dispatch was lost
    DroppedNotReady { route: String },
    /// The URL was unparsable; nothing was dispatched
    Invalid,
}

impl Resolution {
    /// Whether a specific template matched
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    /// Whether the bare-launch home dispatch was taken
    pub fn is_home(&self) -> bool {
        matches!(self, Resolution::Home)
    }

    /// Whether the generic-viewer fallback was taken
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }

    /// Whether the navigation was dropped by the readiness probe
    pub fn is_dropped(&self) -> bool {
        matches!(self, Resolution::DroppedNotReady { .. })
    }

    /// The fallback URL, when the fallback branch was taken
    pub fn fallback_url(&self) -> Option<&str> {
        match self {
            Resolution::Fallback { url } => Some(url),
            _ => None,
        }
    }
}
