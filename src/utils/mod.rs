//! # 工具模块
//!
//! - `languages` - 界面语言菜单（名称、代码、编号选择）

pub mod languages;

// Re-export commonly used items for convenience
pub use languages::{by_menu_choice, ensure_distinct, language_name, Language, LANGUAGES};
