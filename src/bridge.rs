//! Navigation bridge
//!
//! The bridge is the seam between the resolution engine and the app's
//! navigation container. The container is injected as a trait object, not
//! reached through a global: the app constructs its controller during UI
//! mount, hands an `Arc` to the engine, and tears it down on unmount.
//!
//! Dispatch policy: if the controller is not ready when a deep link
//! arrives, the navigation is dropped with a warning, never queued. A link
//! that lands before the UI has mounted is stale by the time mounting
//! completes (for example a notification tapped during a cold start), so
//! replaying it later would navigate the user somewhere they no longer
//! asked for.

use crate::params::RouteParams;
use crate::{trace_log, warn_log};
use std::sync::Arc;

/// The app-side navigation container
///
/// Both operations must be cheap and non-blocking; `navigate` is forwarded
/// synchronously from `resolve`.
pub trait NavigationController: Send + Sync {
    /// Whether the container has mounted and can accept navigations
    fn is_ready(&self) -> bool;

    /// Perform the screen transition for `route` with `params`
    fn navigate(&self, route: &str, params: &RouteParams);
}

/// Shared controller handle
pub type ControllerRef = Arc<dyn NavigationController>;

/// Forwards resolved routes to the injected controller
#[derive(Clone)]
pub struct NavigationBridge {
    controller: ControllerRef,
}

impl NavigationBridge {
    /// Create a bridge around an injected controller
    pub fn new(controller: ControllerRef) -> Self {
        Self { controller }
    }

    /// Dispatch a navigation, returning whether it was forwarded
    ///
    /// Returns `false` when the controller reported itself not ready; the
    /// dropped route and parameters are logged and the request is lost.
    pub fn dispatch(&self, route: &str, params: &RouteParams) -> bool {
        if !self.controller.is_ready() {
            warn_log!(
                "Navigation dropped, controller not ready: route='{}' params={:?}",
                route,
                params
            );
            return false;
        }

        trace_log!("Dispatching navigation: route='{}' params={:?}", route, params);
        self.controller.navigate(route, params);
        true
    }
}

impl std::fmt::Debug for NavigationBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationBridge")
            .field("ready", &self.controller.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    struct FakeController {
        ready: AtomicBool,
        dispatched: Mutex<Vec<(String, RouteParams)>>,
    }

    impl FakeController {
        fn new(ready: bool) -> Self {
            Self {
                ready: AtomicBool::new(ready),
                dispatched: Mutex::new(Vec::new()),
            }
        }
    }

    impl NavigationController for FakeController {
        fn is_ready(&self) -> bool {
            self.ready.load(Ordering::SeqCst)
        }

        fn navigate(&self, route: &str, params: &RouteParams) {
            self.dispatched
                .lock()
                .unwrap()
                .push((route.to_string(), params.clone()));
        }
    }

    #[test]
    fn test_dispatch_forwards_when_ready() {
        let controller = Arc::new(FakeController::new(true));
        let bridge = NavigationBridge::new(controller.clone());

        let mut params = RouteParams::new();
        params.insert("id".to_string(), "42".to_string());

        assert!(bridge.dispatch("BookDetail", &params));

        let dispatched = controller.dispatched.lock().unwrap();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].0, "BookDetail");
        assert_eq!(dispatched[0].1.get("id"), Some(&"42".to_string()));
    }

    #[test]
    fn test_dispatch_drops_when_not_ready() {
        let controller = Arc::new(FakeController::new(false));
        let bridge = NavigationBridge::new(controller.clone());

        assert!(!bridge.dispatch("Cart", &RouteParams::new()));
        assert!(controller.dispatched.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dropped_dispatch_is_not_replayed() {
        let controller = Arc::new(FakeController::new(false));
        let bridge = NavigationBridge::new(controller.clone());

        bridge.dispatch("Cart", &RouteParams::new());
        controller.ready.store(true, Ordering::SeqCst);

        // Readiness flipping later must not resurrect the lost request.
        assert!(controller.dispatched.lock().unwrap().is_empty());
    }
}
