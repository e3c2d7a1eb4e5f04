//! Web 模块的数据类型定义

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::error::{ErrorKind, LingoError};
use crate::service::LingoService;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub service: LingoService,
    pub default_source_lang: String,
    pub default_target_lang: String,
}

impl AppState {
    pub fn new(service: LingoService) -> Self {
        Self {
            service,
            default_source_lang: "en".to_string(),
            default_target_lang: "es".to_string(),
        }
    }
}

/// 翻译请求
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub text: String,
}

/// 翻译响应
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// 语音合成请求
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    /// 仅用于生成下载文件名
    pub source_lang: Option<String>,
}

/// 语言条目
#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
}

/// 语言列表响应
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub default_source: String,
    pub default_target: String,
}

/// 缓存统计响应
#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    pub hit_rate: f64,
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// API 错误响应
pub type ApiError = (StatusCode, Json<serde_json::Value>);

/// 构造 `{"error", "kind"}` 错误体
pub fn api_error(status: StatusCode, message: impl Into<String>, kind: &str) -> ApiError {
    (
        status,
        Json(serde_json::json!({
            "error": message.into(),
            "kind": kind,
        })),
    )
}

/// 包装器错误到 HTTP 状态码的映射
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::EmptyInput => StatusCode::BAD_REQUEST,
        ErrorKind::RemoteTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorKind::RemoteNetworkError
        | ErrorKind::RemoteTranslationError
        | ErrorKind::SynthesisFailed => StatusCode::BAD_GATEWAY,
    }
}

/// 包装器错误转换为 API 错误
pub fn lingo_error(err: &LingoError) -> ApiError {
    let kind = err.kind();
    api_error(status_for(kind), err.to_string(), kind.as_str())
}

/// 请求体不是合法 JSON 或缺少字段
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    api_error(
        StatusCode::BAD_REQUEST,
        format!("Invalid request body: {}", rejection.body_text()),
        "bad_request",
    )
}
