//! Route table definition and validation
//!
//! The table is the only long-lived value in the engine: an ordered list of
//! (route name, path template) pairs supplied once at startup and immutable
//! afterwards. Iteration order for matching is the declaration order with
//! one adjustment: catch-all entries are moved after all specific entries,
//! as a stable partition (relative order among specific entries is kept).

use crate::error::DeepLinkError;
use crate::pattern::{PathPattern, CATCH_ALL};
use std::collections::HashSet;

/// One navigation target: a route name the controller understands plus the
/// path template that selects it.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    name: String,
    template: String,
    pattern: PathPattern,
}

impl RouteDefinition {
    /// Create a definition, validating the template
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<Self, DeepLinkError> {
        let name = name.into();
        let template = template.into();
        validate_template(&template)?;
        let pattern = PathPattern::compile(&template);
        Ok(Self {
            name,
            template,
            pattern,
        })
    }

    /// Route name known to the navigation controller
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw template string
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The compiled pattern
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Whether this entry is the catch-all sentinel
    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_catch_all()
    }
}

/// Validate a path template
///
/// Rules (the catch-all sentinel `:*` is exempt, it bypasses segment
/// parsing entirely):
///
/// - no consecutive slashes
/// - parameter names must be non-empty, alphanumeric or underscore
/// - no duplicate parameter names within one template
pub fn validate_template(template: &str) -> Result<(), DeepLinkError> {
    if template == CATCH_ALL {
        return Ok(());
    }

    if template.contains("//") {
        return Err(DeepLinkError::invalid_template(
            template,
            "template cannot contain consecutive slashes",
        ));
    }

    let mut seen = HashSet::new();
    for segment in template.split('/') {
        let Some(param) = segment.strip_prefix(':') else {
            continue;
        };
        let name = param.strip_suffix('?').unwrap_or(param);

        if name.is_empty() {
            return Err(DeepLinkError::invalid_template(
                template,
                "parameter name cannot be empty",
            ));
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(DeepLinkError::invalid_template(
                template,
                format!(
                    "parameter '{}' must contain only alphanumeric characters and underscores",
                    name
                ),
            ));
        }
        if !seen.insert(name.to_string()) {
            return Err(DeepLinkError::invalid_template(
                template,
                format!("duplicate parameter: '{}'", name),
            ));
        }
    }

    Ok(())
}

/// Static ordered collection of route definitions
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, keeping declaration order
    ///
    /// Fails on an invalid template or on a second catch-all entry.
    pub fn route(
        mut self,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<Self, DeepLinkError> {
        let definition = RouteDefinition::new(name, template)?;
        if definition.is_catch_all() && self.routes.iter().any(RouteDefinition::is_catch_all) {
            return Err(DeepLinkError::invalid_template(
                definition.template(),
                "a route table can hold at most one catch-all template",
            ));
        }
        self.routes.push(definition);
        Ok(self)
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Routes in matching order: specific entries first in declaration
    /// order, catch-all entries after them. Stable partition, not a sort.
    pub fn ordered(&self) -> impl Iterator<Item = &RouteDefinition> + '_ {
        self.routes
            .iter()
            .filter(|r| !r.is_catch_all())
            .chain(self.routes.iter().filter(|r| r.is_catch_all()))
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new()
            .route("BookDetail", "books/:type/:id/:title?")
            .unwrap()
            .route("Streaks", "streaks/:action?")
            .unwrap()
            .route("WebViewer", ":*")
            .unwrap()
            .route("Cart", "cart")
            .unwrap()
    }

    #[test]
    fn test_declaration_order_kept() {
        let table = table();
        let names: Vec<&str> = table.routes().iter().map(RouteDefinition::name).collect();
        assert_eq!(names, ["BookDetail", "Streaks", "WebViewer", "Cart"]);
    }

    #[test]
    fn test_ordered_moves_catch_all_last() {
        let table = table();
        let names: Vec<&str> = table.ordered().map(RouteDefinition::name).collect();
        // Stable partition: specific entries keep their relative order.
        assert_eq!(names, ["BookDetail", "Streaks", "Cart", "WebViewer"]);
    }

    #[test]
    fn test_single_catch_all_invariant() {
        let result = RouteTable::new()
            .route("A", ":*")
            .unwrap()
            .route("B", ":*");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_param() {
        assert!(validate_template("books/:").is_err());
        assert!(validate_template("books/:?").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_param_chars() {
        assert!(validate_template("books/:book-id").is_err());
        assert!(validate_template("books/:book_id").is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        assert!(validate_template("books/:id/reviews/:id").is_err());
        // An optional and required form of the same name still collide.
        assert!(validate_template("books/:id/:id?").is_err());
    }

    #[test]
    fn test_validate_rejects_consecutive_slashes() {
        assert!(validate_template("books//reviews").is_err());
    }

    #[test]
    fn test_validate_accepts_catch_all_sentinel() {
        assert!(validate_template(":*").is_ok());
        // But `*` is only special as a whole segment or whole template.
        assert!(validate_template("files/*").is_ok());
    }
}
