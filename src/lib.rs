//! # Biblophile Deep-Link Resolution
//!
//! Resolves incoming URLs (push notifications, QR codes, universal links,
//! custom `biblophile://` links) to in-app navigation targets with typed
//! string parameters, falling back to a generic web-content viewer when no
//! structured route matches. Features:
//!
//! - **Path templates** - literal, `:required`, `:optional?`, and `*`
//!   wildcard segments, plus the `:*` catch-all sentinel
//! - **Two URL shapes** - standard `https://` URLs and custom app-scheme
//!   URLs whose authority encodes the first path segment
//! - **Specific-before-catch-all ordering** - a stable partition of the
//!   declared route table, not a full sort
//! - **Parameter merging** - query parameters fill in names the path did
//!   not bind; path captures win on collision
//! - **Fail-soft dispatch** - unparsable URLs are logged and dropped,
//!   unmatched paths open the web viewer, and navigations arriving before
//!   the UI mounts are dropped rather than queued
//!
//! # Quick Start
//!
//! ```
//! use biblophile_deeplink::{
//!     NavigationBridge, NavigationController, Resolver, RouteParams, RouteTable,
//! };
//! use std::sync::Arc;
//!
//! struct Controller;
//!
//! impl NavigationController for Controller {
//!     fn is_ready(&self) -> bool {
//!         true
//!     }
//!     fn navigate(&self, route: &str, params: &RouteParams) {
//!         println!("-> {} {:?}", route, params);
//!     }
//! }
//!
//! let table = RouteTable::new()
//!     .route("BookDetail", "books/:type/:id/:title?")
//!     .unwrap()
//!     .route("Streaks", "streaks/:action?")
//!     .unwrap()
//!     .route("WebViewer", ":*")
//!     .unwrap();
//!
//! let resolver = Resolver::new(table, NavigationBridge::new(Arc::new(Controller)));
//!
//! let outcome = resolver.resolve("biblophile://streaks/weekly");
//! assert!(outcome.is_matched());
//! ```
//!
//! Both platform entry points feed the same function: call
//! [`Resolver::resolve_initial`] once with the cold-start URL, and
//! [`Resolver::resolve`] from the runtime URL event subscription.
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually
//!   exclusive with `log`)

#![doc(html_root_url = "https://docs.rs/biblophile-deeplink/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Core resolution modules
pub mod bridge;
pub mod error;
pub mod params;
pub mod pattern;
pub mod resolver;
pub mod table;

// Re-export main types for convenient access
pub use bridge::{ControllerRef, NavigationBridge, NavigationController};
pub use error::{DeepLinkError, Resolution};
pub use params::RouteParams;
pub use pattern::{PathPattern, Segment, CATCH_ALL, WILDCARD_KEY};
pub use resolver::{
    ParsedUrl, Resolver, HOME_ROUTE, WEB_ORIGIN, WEB_VIEWER_PARAM, WEB_VIEWER_ROUTE,
};
pub use table::{validate_template, RouteDefinition, RouteTable};
