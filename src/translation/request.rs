//! 翻译请求

use serde::{Deserialize, Serialize};

/// 不可变的 (源语言, 目标语言, 文本) 三元组，三个字段共同构成缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub text: String,
}

impl TranslationRequest {
    /// 创建请求，文本去除首尾空白
    pub fn new(source_lang: &str, target_lang: &str, text: &str) -> Self {
        Self {
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            text: text.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trimmed_text_shares_key() {
        let a = TranslationRequest::new("en", "es", "  Hello \n");
        let b = TranslationRequest::new("en", "es", "Hello");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_all_fields_participate() {
        let base = TranslationRequest::new("en", "es", "Hello");
        assert_ne!(base, TranslationRequest::new("en", "fr", "Hello"));
        assert_ne!(base, TranslationRequest::new("de", "es", "Hello"));
        assert_ne!(base, TranslationRequest::new("en", "es", "hello"));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(TranslationRequest::new("en", "es", " \t\n").is_empty());
    }
}
