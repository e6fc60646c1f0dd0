//! Route parameter maps
//!
//! Parameters come from two places: captures bound while matching a path
//! template (like `:id`) and the query string of the incoming URL (like
//! `?sort=rating`). Both end up in a [`RouteParams`] map; when the same key
//! appears in both, the path capture wins.

use std::collections::HashMap;

/// Parameters attached to a resolved navigation target
///
/// # Example
///
/// ```
/// use biblophile_deeplink::RouteParams;
///
/// // Template: books/:type/:id
/// // Matched path: books/Book/42
/// let mut params = RouteParams::new();
/// params.insert("type".to_string(), "Book".to_string());
/// params.insert("id".to_string(), "42".to_string());
///
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
/// assert_eq!(params.get_as::<u32>("id"), Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create new empty route params
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a hashmap
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Build from decoded query pairs, keeping the first value per key
    ///
    /// Query keys are unique in this engine; a repeated key in the raw URL
    /// keeps its first occurrence and the rest are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = HashMap::new();
        for (key, value) in pairs {
            params.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { params }
    }

    /// Get a parameter value as a string
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert a parameter
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Check if a parameter exists
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Add every entry of `other` whose key is not already present
    ///
    /// This is the "most specific wins" merge: path captures are inserted
    /// first, then query parameters fill in the remaining names without
    /// overwriting anything.
    pub fn merge_missing(&mut self, other: &RouteParams) {
        for (key, value) in other.iter() {
            if !self.params.contains_key(key) {
                self.params.insert(key.clone(), value.clone());
            }
        }
    }

    /// Get all parameters as a reference to the underlying map
    pub fn all(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Iterate over all parameters
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get the number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

impl FromIterator<(String, String)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_basic() {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "42".to_string());

        assert_eq!(params.get("id"), Some(&"42".to_string()));
        assert!(params.contains("id"));
        assert!(!params.contains("missing"));
    }

    #[test]
    fn test_params_get_as() {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "42".to_string());
        params.insert("renewable".to_string(), "true".to_string());

        assert_eq!(params.get_as::<i32>("id"), Some(42));
        assert_eq!(params.get_as::<bool>("renewable"), Some(true));
        assert_eq!(params.get_as::<i32>("renewable"), None);
        assert_eq!(params.get_as::<i32>("missing"), None);
    }

    #[test]
    fn test_from_query_pairs_first_occurrence_wins() {
        let params = RouteParams::from_query_pairs(vec![
            ("sort", "rating"),
            ("page", "1"),
            ("sort", "title"),
        ]);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("sort"), Some(&"rating".to_string()));
        assert_eq!(params.get("page"), Some(&"1".to_string()));
    }

    #[test]
    fn test_merge_missing_never_overwrites() {
        let mut path_params = RouteParams::new();
        path_params.insert("id".to_string(), "42".to_string());

        let query = RouteParams::from_query_pairs(vec![("id", "999"), ("sort", "rating")]);
        path_params.merge_missing(&query);

        // Path capture keeps precedence on collision
        assert_eq!(path_params.get("id"), Some(&"42".to_string()));
        assert_eq!(path_params.get("sort"), Some(&"rating".to_string()));
    }

    #[test]
    fn test_params_empty() {
        let params = RouteParams::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);

        let mut params = RouteParams::new();
        params.insert("key".to_string(), "value".to_string());
        assert!(!params.is_empty());
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_params_from_map() {
        let mut map = HashMap::new();
        map.insert("title".to_string(), "The-Hobbit".to_string());

        let params = RouteParams::from_map(map);
        assert_eq!(params.get("title"), Some(&"The-Hobbit".to_string()));
    }
}
