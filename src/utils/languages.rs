//! 界面语言列表
//!
//! 网页表单和命令行共用的 20 种语言。核心包装器不校验语言代码，
//! 源语言与目标语言不能相同的限制只在界面层检查。

/// (显示名称, ISO 639-1 代码)
pub type Language = (&'static str, &'static str);

pub const LANGUAGES: &[Language] = &[
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Chinese (Simplified)", "zh"),
    ("Arabic", "ar"),
    ("Hindi", "hi"),
    ("Dutch", "nl"),
    ("Swedish", "sv"),
    ("Norwegian", "no"),
    ("Danish", "da"),
    ("Finnish", "fi"),
    ("Polish", "pl"),
    ("Turkish", "tr"),
    ("Greek", "el"),
];

/// 根据代码查找显示名称
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(name, _)| *name)
}

/// 命令行菜单编号（从 1 开始）
pub fn by_menu_choice(choice: &str) -> Option<Language> {
    let index: usize = choice.trim().parse().ok()?;
    index.checked_sub(1).and_then(|i| LANGUAGES.get(i)).copied()
}

/// 源语言与目标语言必须不同
pub fn ensure_distinct(source_lang: &str, target_lang: &str) -> Result<(), String> {
    if source_lang.trim().eq_ignore_ascii_case(target_lang.trim()) {
        Err("Source and target languages cannot be the same. Please select different languages.".to_string())
    } else {
        Ok(())
    }
}
