//! 统一错误处理
//!
//! 翻译与语音合成包装器的结构化错误类型，调用方按 [`ErrorKind`] 分支，
//! 而不是匹配错误消息字符串。

use thiserror::Error;

/// 网络类错误附带的重试提示
pub const RETRY_HINT: &str = "Please check your internet connection and try again.";

/// 包装器错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LingoError {
    /// 去除首尾空白后文本为空，在任何缓存查询或网络调用之前返回
    #[error("Text cannot be empty or whitespace")]
    EmptyInput,

    /// 远程服务超时
    #[error("Translation request timed out: {0}. {hint}", hint = RETRY_HINT)]
    RemoteTimeout(String),

    /// 远程服务网络连接失败
    #[error("Network error while contacting the translation service: {0}. {hint}", hint = RETRY_HINT)]
    RemoteNetworkError(String),

    /// 其他翻译失败（不支持的语言对、服务错误等）
    #[error("Translation failed: {0}")]
    RemoteTranslationError(String),

    /// 语音合成失败，或输出文件缺失/为空
    #[error("Text-to-speech conversion failed: {0}")]
    SynthesisFailed(String),
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    RemoteTimeout,
    RemoteNetworkError,
    RemoteTranslationError,
    SynthesisFailed,
}

impl ErrorKind {
    /// 稳定的 snake_case 标签，用于 JSON 响应
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::RemoteTimeout => "remote_timeout",
            ErrorKind::RemoteNetworkError => "remote_network_error",
            ErrorKind::RemoteTranslationError => "remote_translation_error",
            ErrorKind::SynthesisFailed => "synthesis_failed",
        }
    }
}

impl LingoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LingoError::EmptyInput => ErrorKind::EmptyInput,
            LingoError::RemoteTimeout(_) => ErrorKind::RemoteTimeout,
            LingoError::RemoteNetworkError(_) => ErrorKind::RemoteNetworkError,
            LingoError::RemoteTranslationError(_) => ErrorKind::RemoteTranslationError,
            LingoError::SynthesisFailed(_) => ErrorKind::SynthesisFailed,
        }
    }

    /// 检查错误是否值得调用方重试
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LingoError::RemoteTimeout(_) | LingoError::RemoteNetworkError(_)
        )
    }
}

pub type LingoResult<T> = Result<T, LingoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_messages_suggest_retry() {
        let timeout = LingoError::RemoteTimeout("read timed out".to_string()).to_string();
        let network = LingoError::RemoteNetworkError("dns error".to_string()).to_string();

        assert!(timeout.contains("read timed out"));
        assert!(timeout.contains("check your internet connection"));
        assert!(network.contains("dns error"));
        assert!(network.contains("try again"));
    }

    #[test]
    fn test_messages_wrap_cause() {
        let err = LingoError::RemoteTranslationError("HTTP 400".to_string());
        assert_eq!(err.to_string(), "Translation failed: HTTP 400");

        let err = LingoError::SynthesisFailed("Audio file is empty".to_string());
        assert_eq!(
            err.to_string(),
            "Text-to-speech conversion failed: Audio file is empty"
        );
    }

    #[test]
    fn test_kind_and_retryable() {
        assert_eq!(LingoError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(ErrorKind::RemoteTimeout.as_str(), "remote_timeout");
        assert!(LingoError::RemoteTimeout(String::new()).is_retryable());
        assert!(LingoError::RemoteNetworkError(String::new()).is_retryable());
        assert!(!LingoError::RemoteTranslationError(String::new()).is_retryable());
        assert!(!LingoError::SynthesisFailed(String::new()).is_retryable());
        assert!(!LingoError::EmptyInput.is_retryable());
    }
}
