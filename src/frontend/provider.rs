//! Scoped access to the one `MessageHandling` instance of a UI tree.

use std::fmt;
use std::sync::Arc;

use crate::ports::MessageHandling;

use super::TodosViewModel;

/// Makes a `MessageHandling` available to everything built from it.
///
/// Cloning shares the same instance. A default provider is an unprovided
/// scope: asking it for the handler is a programming error and panics.
#[derive(Clone, Default)]
pub struct MessageHandlingProvider {
    message_handling: Option<Arc<dyn MessageHandling>>,
}

impl MessageHandlingProvider {
    pub fn new(message_handling: Arc<dyn MessageHandling>) -> Self {
        Self {
            message_handling: Some(message_handling),
        }
    }

    /// Returns the provided instance.
    ///
    /// # Panics
    ///
    /// Panics if no `MessageHandling` was provided.
    pub fn message_handling(&self) -> Arc<dyn MessageHandling> {
        match self.try_message_handling() {
            Some(message_handling) => message_handling,
            None => panic!(
                "No MessageHandling provided; build the provider with MessageHandlingProvider::new"
            ),
        }
    }

    /// Returns the provided instance, or `None` for an unprovided scope.
    pub fn try_message_handling(&self) -> Option<Arc<dyn MessageHandling>> {
        self.message_handling.clone()
    }

    pub fn is_provided(&self) -> bool {
        self.message_handling.is_some()
    }

    /// Builds a view-model for `route` backed by the provided instance.
    ///
    /// # Panics
    ///
    /// Panics if no `MessageHandling` was provided.
    pub fn todos_view_model(&self, route: &str) -> TodosViewModel {
        TodosViewModel::new(self.message_handling(), route)
    }
}

impl fmt::Debug for MessageHandlingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHandlingProvider")
            .field("provided", &self.is_provided())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::TodoFilter;
    use crate::frontend::testing::{Call, RecordingMessageHandling};

    #[test]
    fn provided_scope_returns_the_same_instance() {
        let handling: Arc<dyn MessageHandling> = Arc::new(RecordingMessageHandling::new());
        let provider = MessageHandlingProvider::new(handling.clone());

        assert!(provider.is_provided());
        assert!(Arc::ptr_eq(&provider.message_handling(), &handling));
        assert!(Arc::ptr_eq(&provider.clone().message_handling(), &handling));
    }

    #[test]
    #[should_panic(expected = "No MessageHandling provided")]
    fn unprovided_scope_panics() {
        let provider = MessageHandlingProvider::default();
        let _ = provider.message_handling();
    }

    #[test]
    #[should_panic(expected = "No MessageHandling provided")]
    fn unprovided_scope_cannot_build_view_model() {
        let provider = MessageHandlingProvider::default();
        let _ = provider.todos_view_model("/");
    }

    #[test]
    fn try_message_handling_on_unprovided_scope_is_none() {
        let provider = MessageHandlingProvider::default();
        assert!(!provider.is_provided());
        assert!(provider.try_message_handling().is_none());
        assert_eq!(
            format!("{:?}", provider),
            "MessageHandlingProvider { provided: false }"
        );
    }

    #[tokio::test]
    async fn view_models_share_the_provided_instance() {
        let handling = Arc::new(RecordingMessageHandling::new());
        let provider = MessageHandlingProvider::new(handling.clone());

        let first = provider.todos_view_model("/");
        let second = provider.todos_view_model("/completed");
        first.mount().await.unwrap();
        second.mount().await.unwrap();

        assert_eq!(second.filter(), TodoFilter::Completed);
        assert_eq!(handling.calls(), vec![Call::Query, Call::Query]);
    }
}
