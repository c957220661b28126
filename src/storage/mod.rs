//! 存储层模块
//!
//! 提供按用户落盘的扁平文件持久化。

pub mod user_store;

pub use user_store::{FileUserStore, UserStore};
