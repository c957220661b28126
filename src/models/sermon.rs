//! 讲道数据模型

use serde::{Deserialize, Serialize};

/// 一条讲道记录
///
/// 进程启动时从外部 JSON 文件一次性载入，之后只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    /// 讲道标题
    pub title: String,

    /// 讲道链接
    pub url: String,
}

impl Sermon {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}
