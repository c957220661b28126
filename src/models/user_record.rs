//! 用户记录数据模型
//!
//! 每个展示名对应一条记录：最新的档案 + 只追加的问答历史。
//! 磁盘格式与线上日志文件保持一致（Exchange 序列化为 `t` / `q` / `a`）。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户档案
///
/// 所有字段均为可选；请求中缺失的字段在提示词里渲染为 `None` 占位符。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserProfile {
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

impl UserProfile {
    /// 展示名，缺失时回退为 `익명`
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("익명")
    }
}

/// 一次问答交换
///
/// 创建后不可变，只会被追加到历史序列末尾。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// 时间戳
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,

    /// 用户消息
    #[serde(rename = "q")]
    pub question: String,

    /// 最终回复（含替换后的推荐语句）
    #[serde(rename = "a")]
    pub answer: String,
}

impl Exchange {
    /// 以当前时间创建一次交换
    pub fn now(question: &str, answer: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// 用户记录
///
/// 档案整体替换（最后写入为准），历史只追加。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserRecord {
    /// 最新档案
    pub profile: UserProfile,

    /// 问答历史（按时间追加）
    pub history: Vec<Exchange>,
}

impl UserRecord {
    /// 追加一次交换
    pub fn push_exchange(&mut self, exchange: Exchange) {
        self.history.push(exchange);
    }
}
