//! Page Handlers
//!
//! 原样返回静态目录下的信息页面，不承载任何业务逻辑。
//! 路由名固定，文件名不来自请求。

use axum::{extract::State, response::Html};

use crate::api::app_state::AppState;
use crate::error::{AppError, Result};

/// 首页
///
/// GET /
pub async fn index(state: State<AppState>) -> Result<Html<String>> {
    serve_page(&state, "index.html").await
}

/// 이용약관 (terms of service)
///
/// GET /terms
pub async fn terms(state: State<AppState>) -> Result<Html<String>> {
    serve_page(&state, "terms.html").await
}

/// 개인정보처리방침 (privacy notice)
///
/// GET /privacy
pub async fn privacy(state: State<AppState>) -> Result<Html<String>> {
    serve_page(&state, "privacy.html").await
}

/// AI 활용 안내 (AI-use notice)
///
/// GET /ai-notice
pub async fn ai_notice(state: State<AppState>) -> Result<Html<String>> {
    serve_page(&state, "ai-notice.html").await
}

/// 나침반 페이지（与对话功能无关的自测页）
///
/// GET /compass
pub async fn compass(state: State<AppState>) -> Result<Html<String>> {
    serve_page(&state, "compass.html").await
}

async fn serve_page(state: &AppState, file_name: &str) -> Result<Html<String>> {
    let path = state.static_dir.join(file_name);

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(_) => Err(AppError::NotFound(file_name.to_string())),
    }
}
