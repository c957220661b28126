use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::persona::PersonaVariant;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
}

/// 上游模型配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// 后端类型: "openai" 或 "static"
    pub backend: String,
    /// Chat Completions 服务地址
    pub base_url: String,
    /// 模型标识
    pub model: String,
    /// 凭证最小长度（逐请求校验）
    pub api_key_min_length: usize,
    /// 上游请求超时（秒）
    pub request_timeout: u64,
}

/// 用户记录存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// 按用户落盘的日志目录（首次写入时惰性创建）
    pub logs_dir: PathBuf,
}

/// 讲道目录配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// 讲道 JSON 文件路径
    pub path: PathBuf,
}

/// 人设策略配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersonaConfig {
    /// 生效的策略变体（部署期选定，不按请求切换）
    pub variant: PersonaVariant,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 静态页面配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PagesConfig {
    /// 静态页面目录
    pub static_dir: PathBuf,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 上游模型配置
    pub model: ModelConfig,
    /// 用户记录存储配置
    pub storage: StorageConfig,
    /// 讲道目录配置
    pub catalog: CatalogConfig,
    /// 人设策略配置
    pub persona: PersonaConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 静态页面配置
    pub pages: PagesConfig,
    /// 应用名称（凭证报错时用于定位部署环境）
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 5000,
                request_timeout: 30,
            },
            model: ModelConfig {
                backend: "openai".into(),
                base_url: "https://api.openai.com/v1".into(),
                model: "gpt-4o-mini".into(),
                api_key_min_length: 20,
                request_timeout: 60,
            },
            storage: StorageConfig {
                logs_dir: PathBuf::from("./logs"),
            },
            catalog: CatalogConfig {
                path: PathBuf::from("./total_sermon_db.json"),
            },
            persona: PersonaConfig {
                variant: PersonaVariant::Simple,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            pages: PagesConfig {
                static_dir: PathBuf::from("./static"),
            },
            app_name: "compass".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.persona.variant = PersonaVariant::TwoSectionException;
        config
    }
}
