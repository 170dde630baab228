//! Action dispatcher
//!
//! Executes a chosen suggestion: resolves its portal route, performs the
//! navigation through the host-supplied [`Navigate`] seam, then emits a
//! toast and reports the taken action to the host's analytics callback.
//!
//! Failure policy: a navigation error becomes a user-visible error toast
//! and a typed [`DispatchError`]; the host view never crashes and the
//! analytics callback is not invoked for failed dispatches.

use crate::errors::DispatchError;
use crate::intent_resolver::SuggestedAction;
use crate::notifications::{Notify, Toast};
use crate::routes::PortalRoute;
use anyhow::Result;
use tracing::{debug, warn};

/// Client-side navigation seam supplied by the host view
pub trait Navigate {
    fn navigate(&mut self, route: &PortalRoute) -> Result<()>;
}

/// Dispatches suggested actions for one host view.
///
/// `on_action_taken` is the host's analytics callback, invoked with a
/// human-readable action name after a successful dispatch.
pub struct Dispatcher<N, T, F>
where
    N: Navigate,
    T: Notify,
    F: FnMut(&str),
{
    navigator: N,
    notifier: T,
    on_action_taken: F,
}

impl<N, T, F> Dispatcher<N, T, F>
where
    N: Navigate,
    T: Notify,
    F: FnMut(&str),
{
    pub fn new(navigator: N, notifier: T, on_action_taken: F) -> Self {
        Self {
            navigator,
            notifier,
            on_action_taken,
        }
    }

    /// Execute one suggested action.
    pub fn dispatch(&mut self, action: &SuggestedAction) -> Result<(), DispatchError> {
        let route = PortalRoute::for_action(action.action);
        debug!(action = %action.id, route = %route, "dispatching suggested action");

        if let Err(source) = self.navigator.navigate(&route) {
            warn!(action = %action.id, error = %source, "action dispatch failed");
            self.notifier.notify(Toast::error(
                "Something went wrong",
                format!("Could not start \"{}\". Please try again.", action.title),
            ));
            return Err(DispatchError::Navigation {
                route: route.path(),
                reason: source.to_string(),
            });
        }

        self.notifier
            .notify(Toast::success(action.title.clone(), action.description.clone()));
        (self.on_action_taken)(&action.title);
        Ok(())
    }

    /// Hand the wrapped navigator back, consuming the dispatcher.
    pub fn into_navigator(self) -> N {
        self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent_resolver::resolve;
    use crate::notifications::ToastVariant;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records navigations; optionally fails every call.
    struct FakeNavigator {
        visited: Vec<String>,
        fail: bool,
    }

    impl FakeNavigator {
        fn new(fail: bool) -> Self {
            Self {
                visited: Vec::new(),
                fail,
            }
        }
    }

    impl Navigate for FakeNavigator {
        fn navigate(&mut self, route: &PortalRoute) -> Result<()> {
            if self.fail {
                return Err(anyhow!("window handle lost"));
            }
            self.visited.push(route.path());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotify {
        toasts: Rc<RefCell<Vec<Toast>>>,
    }

    impl Notify for RecordingNotify {
        fn notify(&mut self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    fn action_by_id(message: &str, id: &str) -> SuggestedAction {
        resolve(message)
            .into_iter()
            .find(|a| a.id == id)
            .unwrap_or_else(|| panic!("expected {id} for message '{message}'"))
    }

    #[test]
    fn test_successful_dispatch_navigates_toasts_and_reports() {
        let toasts = Rc::new(RefCell::new(Vec::new()));
        let taken = Rc::new(RefCell::new(Vec::new()));
        let taken_sink = Rc::clone(&taken);

        let mut dispatcher = Dispatcher::new(
            FakeNavigator::new(false),
            RecordingNotify {
                toasts: Rc::clone(&toasts),
            },
            move |name: &str| taken_sink.borrow_mut().push(name.to_string()),
        );

        let action = action_by_id("I need vacation", "create-leave-request");
        dispatcher.dispatch(&action).unwrap();

        let navigator = dispatcher.into_navigator();
        assert_eq!(
            navigator.visited,
            vec!["/portal/requests/new?type=leave_request&auto=true"]
        );

        let toasts = toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Success);
        assert_eq!(toasts[0].title, "Request Time Off");

        assert_eq!(*taken.borrow(), vec!["Request Time Off".to_string()]);
    }

    #[test]
    fn test_document_action_always_targets_document_library() {
        let mut dispatcher =
            Dispatcher::new(FakeNavigator::new(false), crate::notifications::TracingNotify, |_| {});
        let action = action_by_id("where is the handbook", "search-documents");
        dispatcher.dispatch(&action).unwrap();
        assert_eq!(dispatcher.into_navigator().visited, vec!["/portal/documents"]);
    }

    #[test]
    fn test_failed_navigation_emits_error_toast_and_skips_analytics() {
        let toasts = Rc::new(RefCell::new(Vec::new()));
        let taken = Rc::new(RefCell::new(Vec::new()));
        let taken_sink = Rc::clone(&taken);

        let mut dispatcher = Dispatcher::new(
            FakeNavigator::new(true),
            RecordingNotify {
                toasts: Rc::clone(&toasts),
            },
            move |name: &str| taken_sink.borrow_mut().push(name.to_string()),
        );

        let action = action_by_id("my password expired", "create-it-ticket");
        let err = dispatcher.dispatch(&action).unwrap_err();

        match err {
            DispatchError::Navigation { route, reason } => {
                assert_eq!(route, "/portal/support/new?dept=it&auto=true");
                assert!(reason.contains("window handle lost"));
            }
        }

        let toasts = toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Error);
        assert!(toasts[0].description.contains("Open an IT Ticket"));

        assert!(taken.borrow().is_empty());
    }
}
