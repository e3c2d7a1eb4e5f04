//! 服务组合
//!
//! 把翻译包装器、语音合成包装器和它们共享的缓存组合在一起，
//! 供命令行和 Web 层使用。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::cache::CacheStats;
use crate::env::{EnvConfig, EnvError};
use crate::error::LingoResult;
use crate::network::RemoteFailure;
use crate::speech::{GoogleSpeechProvider, SpeechSynthesizer};
use crate::translation::{GoogleTranslateProvider, TranslationCache, Translator};

/// 服务构建错误
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(#[from] EnvError),

    #[error("could not initialise HTTP client: {0}")]
    Http(#[from] RemoteFailure),
}

/// 翻译与语音合成服务
#[derive(Clone)]
pub struct LingoService {
    translator: Translator,
    synthesizer: SpeechSynthesizer,
}

impl LingoService {
    pub fn new(translator: Translator, synthesizer: SpeechSynthesizer) -> Self {
        Self {
            translator,
            synthesizer,
        }
    }

    /// 使用 Google 服务和配置中的地址、超时、缓存容量构建
    pub fn from_config(config: &EnvConfig) -> Result<Self, SetupError> {
        let translate_provider =
            GoogleTranslateProvider::new(&config.translate_api_url, config.translate_timeout)?;
        let speech_provider = GoogleSpeechProvider::new(&config.tts_api_url, config.tts_timeout)?;

        tracing::debug!(
            "服务初始化: 翻译 {}, 语音 {}, 缓存容量 {}",
            config.translate_api_url,
            config.tts_api_url,
            config.cache_size
        );

        let cache = Arc::new(TranslationCache::new(config.cache_size));
        Ok(Self::new(
            Translator::new(Arc::new(translate_provider), cache),
            SpeechSynthesizer::new(Arc::new(speech_provider)),
        ))
    }

    pub fn translate(&self, source_lang: &str, target_lang: &str, text: &str) -> LingoResult<String> {
        self.translator.translate(source_lang, target_lang, text)
    }

    pub fn synthesize(&self, text: &str, lang: &str, output: Option<&Path>) -> LingoResult<PathBuf> {
        self.synthesizer.synthesize(text, lang, output)
    }

    pub fn synthesize_to_temp(&self, text: &str, lang: &str) -> LingoResult<PathBuf> {
        self.synthesizer.synthesize_to_temp(text, lang)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.translator.cache().stats()
    }

    pub fn clear_cache(&self) {
        self.translator.cache().clear();
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn synthesizer(&self) -> &SpeechSynthesizer {
        &self.synthesizer
    }
}
