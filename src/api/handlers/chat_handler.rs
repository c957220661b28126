//! Chat API Handler
//!
//! HTTP handler for the single conversational endpoint.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    models::user_record::UserProfile,
};

/// Handle one chat exchange
///
/// POST /ask
///
/// 步骤 1-7 中的任何失败都在这里收口：打日志、计错误数，并转换为
/// 携带用户可读描述的 500 响应，进程继续服务后续请求。
pub async fn ask(State(state): State<AppState>, Json(request): Json<AskRequest>) -> Response {
    let request_id = Uuid::new_v4();
    let started = std::time::Instant::now();

    debug!("[{}] chat request received", request_id);

    let profile: UserProfile = request.profile.into();
    let result = state
        .conversation_service
        .handle(&request.message, profile)
        .await;

    match result {
        Ok(response) => {
            state
                .metrics
                .record_chat_request(started.elapsed().as_millis() as u64);
            Json(AskResponse { response }).into_response()
        }
        Err(e) => {
            error!("[{}] chat request failed: {}", request_id, e);
            state.metrics.record_error();
            e.into_response()
        }
    }
}
