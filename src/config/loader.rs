use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序：
    /// 1. 开发环境预设
    /// 2. ./config.yaml
    /// 3. COMPASS_ 前缀环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file("config.yaml"))
            .merge(Env::prefixed("COMPASS_").split("_").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("COMPASS_").split("_").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.model.model.is_empty() {
            return Err(ConfigValidationError::MissingModelId);
        }

        if config.storage.logs_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingLogsDir);
        }

        if config.model.api_key_min_length == 0 {
            return Err(ConfigValidationError::InvalidKeyLength);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("서비스 포트가 유효하지 않습니다 (0보다 커야 합니다)")]
    InvalidPort,

    #[error("상위 모델 식별자가 설정되지 않았습니다")]
    MissingModelId,

    #[error("사용자 기록 저장 디렉터리가 설정되지 않았습니다")]
    MissingLogsDir,

    #[error("자격 증명 최소 길이가 유효하지 않습니다 (0보다 커야 합니다)")]
    InvalidKeyLength,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}
