//! 用户记录文件存储
//!
//! 每个用户一个 JSON 文件，文件名由展示名直接拼出（不做转义，
//! 调用方把 user_id 当作可信路径片段 — 既有部署的已接受风险）。
//! 读取端永远看不到写了一半的文件：先写临时文件再原子改名。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::user_record::UserRecord;

/// 用户记录存储 trait
///
/// ConversationService 只透过该接口读写，后端可替换而不动业务层。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 载入用户记录
    ///
    /// 文件缺失或解析失败时静默返回默认记录（空档案 + 空历史），
    /// 不向调用方暴露失败。
    async fn load(&self, user_id: &str) -> UserRecord;

    /// 整体覆盖保存用户记录
    ///
    /// 目标目录不存在时惰性创建。并发同键写入为最后写入者胜，
    /// 不做锁或版本检查。
    async fn save(&self, user_id: &str, record: &UserRecord) -> Result<()>;
}

/// 按用户落盘的文件存储实现
#[derive(Debug, Clone)]
pub struct FileUserStore {
    root: PathBuf,
}

impl FileUserStore {
    /// 以给定目录为根创建存储
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn user_path(&self, user_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", user_id))
    }
}

#[async_trait]
impl UserStore for FileUserStore {
    async fn load(&self, user_id: &str) -> UserRecord {
        let path = self.user_path(user_id);

        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(record) => record,
                Err(e) => {
                    debug!("Unparseable record for {}, using defaults: {}", user_id, e);
                    UserRecord::default()
                }
            },
            Err(_) => UserRecord::default(),
        }
    }

    async fn save(&self, user_id: &str, record: &UserRecord) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        let json = serde_json::to_string_pretty(record)?;
        let path = self.user_path(user_id);
        let tmp = self.root.join(format!("{}.json.{}.tmp", user_id, Uuid::new_v4()));

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        Ok(())
    }
}
