//! 讲道目录模块
//!
//! 进程启动时从外部 JSON 文件一次性载入讲道列表，载入后只读。
//! 文件缺失或解析失败时目录为空（打日志但不致命），服务照常启动。

pub mod matcher;

use std::path::Path;

use tracing::{error, info, warn};

use crate::models::sermon::Sermon;

/// 模糊匹配的相似度下限
const MATCH_CUTOFF: f64 = 0.3;

/// 讲道目录
///
/// 只读结构，构造后由进程级状态显式传递给使用方。
#[derive(Debug, Clone, Default)]
pub struct SermonCatalog {
    sermons: Vec<Sermon>,
}

impl SermonCatalog {
    /// 从给定的讲道列表构造目录
    pub fn new(sermons: Vec<Sermon>) -> Self {
        Self { sermons }
    }

    /// 从 JSON 文件载入目录
    ///
    /// 任何失败都会降级为空目录，只记录日志。
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            warn!("Sermon catalog file not found: {}", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Vec<Sermon>>(&raw) {
                Ok(sermons) => {
                    info!("{} sermons loaded", sermons.len());
                    Self::new(sermons)
                }
                Err(e) => {
                    error!("Sermon catalog parse failed: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Sermon catalog read failed: {}", e);
                Self::default()
            }
        }
    }

    /// 目录中的讲道数量
    pub fn len(&self) -> usize {
        self.sermons.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.sermons.is_empty()
    }

    /// 按标题模糊查找最相近的讲道
    ///
    /// 相似度低于下限时返回 `None`；同分时取目录顺序中第一条与最优
    /// 标题串相等的记录。
    pub fn find_best(&self, query: &str) -> Option<&Sermon> {
        if self.sermons.is_empty() {
            return None;
        }

        let mut best: Option<(&Sermon, f64)> = None;
        for sermon in &self.sermons {
            let ratio = matcher::similarity_ratio(&sermon.title, query);
            if ratio < MATCH_CUTOFF {
                continue;
            }
            match best {
                Some((_, best_ratio)) if ratio <= best_ratio => {}
                _ => best = Some((sermon, ratio)),
            }
        }

        best.map(|(sermon, _)| sermon)
    }
}
