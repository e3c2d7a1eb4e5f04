//! 远程翻译服务

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::network::{build_http_client, provider_url, RemoteFailure};

/// Google 翻译公开接口
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TRANSLATE_TIMEOUT: Duration = Duration::from_secs(10);

/// 远程翻译服务接口
///
/// 一次阻塞调用：接受 (源语言, 目标语言, 文本)，返回译文或失败。
/// 语言代码原样转发，不支持的代码由远程服务报错。
pub trait TranslationProvider: Send + Sync {
    fn translate(
        &self,
        source_lang: &str,
        target_lang: &str,
        text: &str,
    ) -> Result<String, RemoteFailure>;
}

/// 基于 Google 翻译 `translate_a/single` 接口的实现
pub struct GoogleTranslateProvider {
    client: Client,
    api_url: String,
}

impl GoogleTranslateProvider {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteFailure> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_url: api_url.into(),
        })
    }

    pub fn with_defaults() -> Result<Self, RemoteFailure> {
        Self::new(DEFAULT_TRANSLATE_API_URL, DEFAULT_TRANSLATE_TIMEOUT)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl TranslationProvider for GoogleTranslateProvider {
    fn translate(
        &self,
        source_lang: &str,
        target_lang: &str,
        text: &str,
    ) -> Result<String, RemoteFailure> {
        let url = provider_url(
            &self.api_url,
            &[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ],
        )?;

        tracing::debug!("请求翻译服务: {} -> {}", source_lang, target_lang);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteFailure::from_status(status, &body));
        }

        let body = response.text()?;
        parse_translation(&body)
    }
}

/// 解析嵌套数组响应，译文是 `[0][i][0]` 各片段的拼接
fn parse_translation(body: &str) -> Result<String, RemoteFailure> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RemoteFailure::Other(format!("unexpected response from translation service: {}", e)))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| RemoteFailure::Other("translation service returned no segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(RemoteFailure::Other(
            "translation service returned an empty translation".to_string(),
        ));
    }

    Ok(translated)
}
