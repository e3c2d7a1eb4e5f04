//! 远程失败分类
//!
//! 优先使用传输层给出的结构化信号（`reqwest::Error::is_timeout` 等），
//! 只有在没有结构化信号时才退回到错误消息的关键字匹配。

use std::error::Error as StdError;
use std::fmt;

use reqwest::StatusCode;

const TIMEOUT_KEYWORDS: &[&str] = &["timeout", "timed out"];
const NETWORK_KEYWORDS: &[&str] = &[
    "connection",
    "network",
    "dns",
    "unreachable",
    "resolve",
    "connect",
];

/// 错误响应体截取长度
const BODY_SNIPPET_CHARS: usize = 200;

/// 远程服务调用失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    Timeout(String),
    Network(String),
    Other(String),
}

impl RemoteFailure {
    /// 根据错误消息关键字分类
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        if TIMEOUT_KEYWORDS.iter().any(|k| lower.contains(k)) {
            RemoteFailure::Timeout(message)
        } else if NETWORK_KEYWORDS.iter().any(|k| lower.contains(k)) {
            RemoteFailure::Network(message)
        } else {
            RemoteFailure::Other(message)
        }
    }

    /// 非成功 HTTP 状态码
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let snippet: String = body.trim().chars().take(BODY_SNIPPET_CHARS).collect();
        if snippet.is_empty() {
            RemoteFailure::Other(format!("HTTP {}", status))
        } else {
            RemoteFailure::Other(format!("HTTP {}: {}", status, snippet))
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RemoteFailure::Timeout(msg)
            | RemoteFailure::Network(msg)
            | RemoteFailure::Other(msg) => msg,
        }
    }
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl StdError for RemoteFailure {}

impl From<reqwest::Error> for RemoteFailure {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);

        if err.is_timeout() {
            RemoteFailure::Timeout(message)
        } else if err.is_connect() {
            RemoteFailure::Network(message)
        } else if let Some(status) = err.status() {
            RemoteFailure::Other(format!("HTTP {}: {}", status, message))
        } else if err.is_request() {
            // 请求未能发出，没有更细的信号时按网络错误处理
            match RemoteFailure::classify(message) {
                RemoteFailure::Other(msg) => RemoteFailure::Network(msg),
                classified => classified,
            }
        } else {
            RemoteFailure::classify(message)
        }
    }
}

/// reqwest 的 Display 不包含底层原因，这里把整条 source 链拼起来
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_timeout() {
        assert_eq!(
            RemoteFailure::classify("operation timed out"),
            RemoteFailure::Timeout("operation timed out".to_string())
        );
        assert!(matches!(
            RemoteFailure::classify("Read Timeout after 10s"),
            RemoteFailure::Timeout(_)
        ));
    }

    #[test]
    fn test_classify_network() {
        assert!(matches!(
            RemoteFailure::classify("Connection refused"),
            RemoteFailure::Network(_)
        ));
        assert!(matches!(
            RemoteFailure::classify("failed to resolve host"),
            RemoteFailure::Network(_)
        ));
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(
            RemoteFailure::classify("invalid target language"),
            RemoteFailure::Other("invalid target language".to_string())
        );
    }

    #[test]
    fn test_from_status_truncates_body() {
        let body = "x".repeat(500);
        let failure = RemoteFailure::from_status(StatusCode::BAD_REQUEST, &body);
        let message = failure.message();

        assert!(message.starts_with("HTTP 400 Bad Request: "));
        assert!(message.len() < 260);
        assert_eq!(
            RemoteFailure::from_status(StatusCode::NOT_FOUND, "  "),
            RemoteFailure::Other("HTTP 404 Not Found".to_string())
        );
    }

    #[test]
    fn test_connection_refused_is_network() {
        // 端口 1 上没有服务
        let client = reqwest::blocking::Client::new();
        let err = client.get("http://127.0.0.1:1/").send().unwrap_err();

        assert!(matches!(RemoteFailure::from(err), RemoteFailure::Network(_)));
    }
}
