use crate::observability::AppMetrics;
use crate::services::conversation::ConversationService;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Conversation service for the chat endpoint
    pub conversation_service: Arc<dyn ConversationService>,
    /// Shared application metrics
    pub metrics: Arc<AppMetrics>,
    /// Directory holding the informational pages
    pub static_dir: PathBuf,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("conversation_service", &"Arc<dyn ConversationService>")
            .field("metrics", &"Arc<AppMetrics>")
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        conversation_service: Box<dyn ConversationService>,
        metrics: Arc<AppMetrics>,
        static_dir: PathBuf,
    ) -> Self {
        Self {
            conversation_service: Arc::from(conversation_service),
            metrics,
            static_dir,
        }
    }
}
