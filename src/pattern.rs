//! Path template compilation and matching
//!
//! Templates are `/`-delimited strings where each segment is one of:
//!
//! - literal text - must match exactly
//! - `:name` - captures one run of non-`/` characters
//! - `:name?` - like `:name` but the capture group itself is optional
//! - `*` - captures the remainder of the path greedily (may contain `/`)
//!
//! The whole-template sentinel `:*` is the catch-all: it bypasses segment
//! splitting and captures the entire normalized path under the key `*`.
//!
//! Matching is anchored at both ends and implemented as a hand-written
//! backtracking matcher rather than a compiled regex, so literal segments
//! containing regex metacharacters are compared as plain strings.
//!
//! The separator `/` between segments is itself a mandatory literal, never
//! part of an optional group. As a consequence `a/:x?/b` matches `a//b` but
//! NOT `a/b`, and a trailing `:title?` still requires its leading slash.
//! This mirrors the behavior links in the wild already depend on; do not
//! "fix" it here.

use crate::params::RouteParams;

/// The whole-template catch-all sentinel.
pub const CATCH_ALL: &str = ":*";

/// Parameter key used for wildcard and catch-all captures.
pub const WILDCARD_KEY: &str = "*";

/// A single segment of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Static text that must match exactly
    Literal(String),
    /// Named capture over non-`/` characters
    Param {
        name: String,
        /// Whether the whole capture group may be skipped (`:name?`)
        optional: bool,
    },
    /// Greedy capture of the remainder, bound to the key `*`
    Wildcard,
}

impl Segment {
    /// Parse one template segment
    ///
    /// - `"books"` -> `Literal("books")`
    /// - `":id"` -> `Param { name: "id", optional: false }`
    /// - `":title?"` -> `Param { name: "title", optional: true }`
    /// - `"*"` -> `Wildcard`
    pub fn parse(s: &str) -> Self {
        if s == "*" {
            return Segment::Wildcard;
        }

        if let Some(rest) = s.strip_prefix(':') {
            if let Some(name) = rest.strip_suffix('?') {
                Segment::Param {
                    name: name.to_string(),
                    optional: true,
                }
            } else {
                Segment::Param {
                    name: rest.to_string(),
                    optional: false,
                }
            }
        } else {
            Segment::Literal(s.to_string())
        }
    }

    /// The parameter name this segment binds, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param { name, .. } => Some(name),
            Segment::Wildcard => Some(WILDCARD_KEY),
        }
    }
}

/// A compiled path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
    /// Capture-group names in left-to-right order
    names: Vec<String>,
    catch_all: bool,
}

impl PathPattern {
    /// Compile a template string
    ///
    /// The catch-all sentinel `:*` produces a pattern that matches any
    /// normalized path verbatim, including the empty one.
    pub fn compile(template: &str) -> Self {
        if template == CATCH_ALL {
            return Self {
                segments: Vec::new(),
                names: vec![WILDCARD_KEY.to_string()],
                catch_all: true,
            };
        }

        let segments: Vec<Segment> = template.split('/').map(Segment::parse).collect();
        let names = segments
            .iter()
            .filter_map(|s| s.param_name().map(str::to_string))
            .collect();

        Self {
            segments,
            names,
            catch_all: false,
        }
    }

    /// Whether this pattern is the catch-all sentinel
    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Match a path against this pattern
    ///
    /// The path is normalized by stripping exactly one leading `/` if
    /// present; trailing slashes and internal repeats are matched literally.
    /// Returns the captured parameters on success, `None` on mismatch.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let normalized = path.strip_prefix('/').unwrap_or(path);

        if self.catch_all {
            let mut params = RouteParams::new();
            params.insert(WILDCARD_KEY.to_string(), normalized.to_string());
            return Some(params);
        }

        let mut captures: Vec<Option<String>> = vec![None; self.names.len()];
        if !self.match_from(0, 0, normalized, 0, &mut captures) {
            return None;
        }

        // Zip names against captures by position; absent optionals bind nothing.
        let mut params = RouteParams::new();
        for (name, capture) in self.names.iter().zip(captures) {
            if let Some(value) = capture {
                params.insert(name.clone(), value);
            }
        }
        Some(params)
    }

    /// Anchored backtracking match of `self.segments[seg..]` against
    /// `path[pos..]`. `group` is the index of the next capture slot.
    fn match_from(
        &self,
        seg: usize,
        group: usize,
        path: &str,
        pos: usize,
        captures: &mut Vec<Option<String>>,
    ) -> bool {
        let Some(segment) = self.segments.get(seg) else {
            // Pattern exhausted; anchored at the end.
            return pos == path.len();
        };

        // Every inter-segment boundary is a mandatory literal slash.
        let pos = if seg > 0 {
            if path[pos..].starts_with('/') {
                pos + 1
            } else {
                return false;
            }
        } else {
            pos
        };

        match segment {
            Segment::Literal(text) => {
                path[pos..].starts_with(text.as_str())
                    && self.match_from(seg + 1, group, path, pos + text.len(), captures)
            }
            Segment::Param { optional, .. } => {
                let rest = &path[pos..];
                let run = rest.find('/').unwrap_or(rest.len());

                // Greedy over the non-slash run, backtracking one char at a
                // time like the reference `([^/]+)` group.
                for take in char_boundaries(&rest[..run]).into_iter().rev() {
                    if take == 0 {
                        continue;
                    }
                    captures[group] = Some(rest[..take].to_string());
                    if self.match_from(seg + 1, group + 1, path, pos + take, captures) {
                        return true;
                    }
                }

                if *optional {
                    captures[group] = None;
                    return self.match_from(seg + 1, group + 1, path, pos, captures);
                }
                false
            }
            Segment::Wildcard => {
                // Greedy `.*`: may consume slashes, may be empty.
                let rest = &path[pos..];
                for take in char_boundaries(rest).into_iter().rev() {
                    captures[group] = Some(rest[..take].to_string());
                    if self.match_from(seg + 1, group + 1, path, pos + take, captures) {
                        return true;
                    }
                }
                false
            }
        }
    }
}

/// All byte offsets in `s` that end a whole char, including 0 and `s.len()`.
fn char_boundaries(s: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    boundaries.push(s.len());
    boundaries
}
