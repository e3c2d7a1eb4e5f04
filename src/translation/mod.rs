//! 翻译模块
//!
//! 文本翻译包装器：校验输入、查询有界 LRU 缓存、委托远程翻译服务并规范化错误。
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lingovox::translation::{GoogleTranslateProvider, TranslationCache, Translator};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GoogleTranslateProvider::with_defaults()?;
//! let translator = Translator::new(Arc::new(provider), Arc::new(TranslationCache::new(100)));
//!
//! let translated = translator.translate("en", "es", "Hello")?;
//! println!("{}", translated);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// 子模块声明
// ============================================================================

/// 远程翻译服务接口及 Google 实现
pub mod provider;

/// 缓存键
pub mod request;

/// 翻译包装器
pub mod service;

// ============================================================================
// 公共导出
// ============================================================================

pub use provider::{GoogleTranslateProvider, TranslationProvider, DEFAULT_TRANSLATE_API_URL};
pub use request::TranslationRequest;
pub use service::Translator;

/// 翻译结果缓存
pub type TranslationCache = crate::cache::LruMemo<TranslationRequest, String>;
