//! # 网络模块
//!
//! 与远程翻译和语音合成服务通信所需的传输层：
//!
//! - 阻塞式 HTTP 客户端构建（超时、User-Agent）
//! - 远程失败的分类（超时 / 网络 / 其他）
//!
//! # 模块组织
//!
//! - `client` - HTTP 客户端构建和请求 URL 拼装
//! - `failure` - `RemoteFailure` 及其分类规则

pub mod client;
pub mod failure;

// Re-export commonly used items for convenience
pub use client::{build_http_client, provider_url, DEFAULT_USER_AGENT};
pub use failure::RemoteFailure;
