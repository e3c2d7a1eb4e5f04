//! 语音合成支持的语言

/// Google 语音合成接受的语言代码
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "fr-CA", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja",
    "jw", "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa",
    "pl", "pt", "pt-PT", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th",
    "tl", "tr", "uk", "ur", "vi", "yue", "zh", "zh-CN", "zh-TW",
];

/// 语言代码比较不区分大小写
pub fn is_supported_language(lang: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(lang.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_languages_are_speakable() {
        for (_, code) in crate::utils::languages::LANGUAGES {
            assert!(is_supported_language(code), "{} should be supported", code);
        }
    }

    #[test]
    fn test_unknown_languages() {
        assert!(is_supported_language("ZH-cn"));
        assert!(!is_supported_language("not-a-real-lang"));
        assert!(!is_supported_language("invalid_lang"));
        assert!(!is_supported_language(""));
    }
}
