//! # Lingovox Library
//!
//! 翻译文本并把译文导出为语音的轻量包装层。翻译和语音合成都由远程服务完成，
//! 本库负责输入校验、记忆化缓存和错误规范化。
//!
//! ## 模块组织
//!
//! - `translation` - 翻译包装器和远程翻译服务
//! - `speech` - 语音合成包装器和远程语音服务
//! - `cache` - 有界 LRU 记忆化缓存
//! - `network` - HTTP 客户端和远程失败分类
//! - `service` - 组合两个包装器
//! - `env` - 环境变量配置
//! - `utils` - 界面语言列表
//! - `cli` - 命令行交互（可选）
//! - `web` - Web 表单服务器（可选）

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod error;
pub mod logging;
pub mod network;
pub mod service;
pub mod speech;
pub mod translation;
pub mod utils;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used items for convenience
pub use cache::{CacheStats, LruMemo};
pub use error::{ErrorKind, LingoError, LingoResult};
pub use service::{LingoService, SetupError};
pub use speech::SpeechSynthesizer;
pub use translation::Translator;
