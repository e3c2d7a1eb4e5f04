//! HTTP 客户端

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::network::failure::RemoteFailure;

/// 远程服务会拒绝没有浏览器 User-Agent 的请求
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// 创建阻塞式 HTTP 客户端
///
/// 请求截止时间由传输层负责，包装器本身不做任何超时或取消处理。
pub fn build_http_client(timeout: Duration) -> Result<Client, RemoteFailure> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(RemoteFailure::from)
}

/// 拼装带查询参数的请求地址
pub fn provider_url(base: &str, params: &[(&str, &str)]) -> Result<Url, RemoteFailure> {
    Url::parse_with_params(base, params)
        .map_err(|e| RemoteFailure::Other(format!("invalid service URL '{}': {}", base, e)))
}
