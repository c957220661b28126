//! 服务模块

pub mod conversation;

pub use conversation::{ConversationService, create_conversation_service};
