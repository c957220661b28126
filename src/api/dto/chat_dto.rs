//! 对话 DTO
//!
//! 用于 /ask 接口的请求和响应序列化。

use serde::{Deserialize, Serialize};

use crate::models::user_record::UserProfile;

/// 对话请求
///
/// 缺失字段一律取默认值，不拒绝请求。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AskRequest {
    /// 用户消息
    pub message: String,

    /// 用户档案（整体替换已存档案）
    pub profile: ProfileDto,
}

/// 档案 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileDto {
    /// 展示名（同时是存储键）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 居住地区
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// 职业
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,

    /// 年龄段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    /// 性别
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl From<ProfileDto> for UserProfile {
    fn from(dto: ProfileDto) -> Self {
        UserProfile {
            name: dto.name,
            region: dto.region,
            job: dto.job,
            age: dto.age,
            gender: dto.gender,
        }
    }
}

/// 对话响应
///
/// 成功与失败同形，均只有一个 `response` 字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// 最终回复文本（或用户可读的错误描述）
    pub response: String,
}
