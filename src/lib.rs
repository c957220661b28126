//! Compass - AI 牧会咨询对话服务
//!
//! 将用户消息转发给大语言模型，注入牧师人设系统提示词，按用户持久化
//! 问答历史，并可选地在回复中替换推荐讲道链接。

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod observability;
pub mod persona;
pub mod services;
pub mod storage;
