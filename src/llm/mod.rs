//! 上游对话模型客户端
//!
//! 一次对话补全调用固定携带两条消息：系统提示词 + 用户消息，
//! 历史只落盘、不回放。凭证来自进程环境变量，按请求校验。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::config::ModelConfig;
use crate::error::{AppError, Result};

/// 对话模型 trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// 发起一次补全调用，返回回复文本
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}

/// 消息角色 + 内容
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// OpenAI Chat Completions 客户端
pub struct OpenAiChatModel {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_min_length: usize,
    app_name: String,
}

impl OpenAiChatModel {
    /// 创建客户端
    ///
    /// 凭证在启动时读入，但在每次调用前才校验，校验失败只影响
    /// 当前请求。
    pub fn new(config: &ModelConfig, api_key: Option<String>, app_name: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
            api_key_min_length: config.api_key_min_length,
            app_name: app_name.to_string(),
        })
    }

    /// 校验出站凭证：必须存在且不短于配置的最小长度
    fn validate_credential(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            None => Err(AppError::Credential(format!(
                "OPENAI_API_KEY 환경 변수가 설정되지 않았습니다. 배포 환경({})의 설정에서 변수를 추가해주세요.",
                self.app_name
            ))),
            Some(key) if key.len() < self.api_key_min_length => Err(AppError::Credential(format!(
                "OPENAI_API_KEY 값이 너무 짧습니다. 배포 환경({})의 설정에서 올바른 키인지 확인해주세요.",
                self.app_name
            ))),
            Some(key) => Ok(key),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let key = self.validate_credential()?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: user_message.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "chat completion failed ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::Upstream("completion response has no choices".to_string()))
    }
}

/// 固定回复模型（"static" 后端）
///
/// 开发与测试用，不访问网络。
pub struct StaticChatModel {
    reply: String,
}

impl StaticChatModel {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

impl Default for StaticChatModel {
    fn default() -> Self {
        Self::new("말씀해 주셔서 감사합니다. 함께 기도하겠습니다.")
    }
}

#[async_trait]
impl ChatModel for StaticChatModel {
    async fn complete(&self, _system_prompt: &str, _user_message: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

/// 按配置创建对话模型客户端
pub fn create_chat_model(
    config: &ModelConfig,
    api_key: Option<String>,
    app_name: &str,
) -> Result<Box<dyn ChatModel>> {
    match config.backend.as_str() {
        "openai" => Ok(Box::new(OpenAiChatModel::new(config, api_key, app_name)?)),
        "static" => Ok(Box::new(StaticChatModel::default())),
        other => Err(AppError::Config(format!(
            "unknown chat model backend: {}",
            other
        ))),
    }
}
