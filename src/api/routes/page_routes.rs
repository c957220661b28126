//! Page Routes
//!
//! 定义静态信息页面的路由。

use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::api::handlers::page_handler::*;

/// 创建页面路由器
pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/terms", get(terms))
        .route("/privacy", get(privacy))
        .route("/ai-notice", get(ai_notice))
        .route("/compass", get(compass))
}
