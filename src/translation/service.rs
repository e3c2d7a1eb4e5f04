//! 翻译包装器
//!
//! 单次 校验 → 缓存 → 远程调用 → 返回 流程，不做内部重试。

use std::sync::Arc;

use crate::error::{LingoError, LingoResult};
use crate::network::RemoteFailure;
use crate::translation::{TranslationCache, TranslationProvider, TranslationRequest};

/// 带记忆化缓存的翻译包装器
///
/// 缓存由组合方显式构造并注入，测试中每个用例可以使用独立的缓存实例。
#[derive(Clone)]
pub struct Translator {
    provider: Arc<dyn TranslationProvider>,
    cache: Arc<TranslationCache>,
}

impl Translator {
    pub fn new(provider: Arc<dyn TranslationProvider>, cache: Arc<TranslationCache>) -> Self {
        Self { provider, cache }
    }

    /// 翻译文本
    ///
    /// 文本去除首尾空白后为空时立即返回 [`LingoError::EmptyInput`]，不查询缓存也不发起网络调用。
    /// 命中缓存时直接返回缓存值；否则调用远程服务一次，只有成功结果会写入缓存。
    pub fn translate(&self, source_lang: &str, target_lang: &str, text: &str) -> LingoResult<String> {
        let request = TranslationRequest::new(source_lang, target_lang, text);
        if request.is_empty() {
            return Err(LingoError::EmptyInput);
        }

        self.cache.get_or_try_insert_with(request, |request| {
            tracing::info!(
                "缓存未命中，调用翻译服务: {} -> {} ({} 字符)",
                request.source_lang,
                request.target_lang,
                request.text.chars().count()
            );

            self.provider
                .translate(&request.source_lang, &request.target_lang, &request.text)
                .map_err(|failure| {
                    tracing::warn!("翻译失败: {}", failure);
                    translation_error(failure)
                })
        })
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }
}

fn translation_error(failure: RemoteFailure) -> LingoError {
    match failure {
        RemoteFailure::Timeout(msg) => LingoError::RemoteTimeout(msg),
        RemoteFailure::Network(msg) => LingoError::RemoteNetworkError(msg),
        RemoteFailure::Other(msg) => LingoError::RemoteTranslationError(msg),
    }
}
