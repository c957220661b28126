//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。所有对话请求的失败最终
//! 汇入统一的 `{"response": "오류가 발생했습니다: …"}` 载荷，进程
//! 不因单个请求的失败而退出。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置错误
    #[error("설정 오류: {0}")]
    Config(String),

    /// 出站凭证缺失或不合规（消息在调用方构造，含部署环境标识）
    #[error("{0}")]
    Credential(String),

    /// 上游模型调用失败
    #[error("상위 모델 호출에 실패했습니다: {0}")]
    Upstream(String),

    /// 文件存储错误
    #[error("저장소 오류: {0}")]
    Storage(String),

    /// 序列化错误
    #[error("직렬화 오류: {0}")]
    Serialization(String),

    /// 参数验证错误
    #[error("요청 검증에 실패했습니다: {0}")]
    Validation(String),

    /// 资源不存在
    #[error("요청한 리소스를 찾을 수 없습니다: {0}")]
    NotFound(String),

    /// 内部错误
    #[error("내부 오류: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream(e.to_string())
    }
}

/// 错误响应载荷
///
/// 与成功响应同形（单个 `response` 字段），前端不区分两种形状。
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 用户可读的错误描述
    pub response: String,
}

impl ErrorResponse {
    /// 由错误构造统一的用户可读载荷
    pub fn from_error(err: &AppError) -> Self {
        Self {
            response: format!("오류가 발생했습니다: {}", err),
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for StatusCode {
    fn from(err: &AppError) -> StatusCode {
        match err {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let body = Json(ErrorResponse::from_error(&self));
        (status, body).into_response()
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;
