//! 命令行交互
//!
//! 提示输入、编号语言菜单和 y/n 确认。输入输出为泛型，便于用内存缓冲测试。

use std::io::{self, BufRead, Write};

use crate::utils::languages::{by_menu_choice, ensure_distinct, Language, LANGUAGES};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_GREEN: &str = "\x1b[32m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// 交互式提示器
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出一行
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// 显示提示并读取一行（已去除首尾空白），输入结束时返回 `None`
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn print_language_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nAvailable languages:")?;
        for (i, (name, code)) in LANGUAGES.iter().enumerate() {
            writeln!(self.output, "  {}. {} ({})", i + 1, name, code)?;
        }
        Ok(())
    }

    /// 反复提示直到选中有效的语言编号
    ///
    /// `exclude` 为已选的源语言时，拒绝选择相同的语言。
    pub fn choose_language(
        &mut self,
        prompt: &str,
        exclude: Option<&str>,
    ) -> io::Result<Option<Language>> {
        loop {
            let Some(choice) = self.ask(prompt)? else {
                return Ok(None);
            };

            match by_menu_choice(&choice) {
                Some(language) => {
                    if let Some(source) = exclude {
                        if let Err(message) = ensure_distinct(source, language.1) {
                            self.say(&message)?;
                            continue;
                        }
                    }
                    return Ok(Some(language));
                }
                None => self.say(&format!(
                    "Invalid choice. Please select 1-{}.",
                    LANGUAGES.len()
                ))?,
            }
        }
    }

    /// y/yes 为真，其他输入（包括输入结束）为假
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// 错误消息，按需加红色
pub fn format_failure(message: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", ANSI_COLOR_RED, message, ANSI_COLOR_RESET)
    } else {
        message.to_string()
    }
}

/// 成功消息，按需加绿色
pub fn format_success(message: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", ANSI_COLOR_GREEN, message, ANSI_COLOR_RESET)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_choose_language_reprompts_on_invalid() {
        let mut p = prompter("abc\n42\n2\n");
        let choice = p.choose_language("Select source language (1-20): ", None).unwrap();

        assert_eq!(choice, Some(("Spanish", "es")));
        let out = output_of(p);
        assert_eq!(out.matches("Invalid choice. Please select 1-20.").count(), 2);
    }

    #[test]
    fn test_choose_language_rejects_same_as_source() {
        let mut p = prompter("1\n3\n");
        let choice = p.choose_language("Select target language (1-20): ", Some("en")).unwrap();

        assert_eq!(choice, Some(("French", "fr")));
        assert!(output_of(p).contains("Source and target languages cannot be the same"));
    }

    #[test]
    fn test_choose_language_eof() {
        let mut p = prompter("");
        assert_eq!(p.choose_language("> ", None).unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("Y\nyes\nn\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }

    #[test]
    fn test_ask_trims() {
        let mut p = prompter("   Hello there  \n");
        assert_eq!(p.ask("Text: ").unwrap(), Some("Hello there".to_string()));
        assert_eq!(output_of(p), "Text: ");
    }

    #[test]
    fn test_menu_lists_all_languages() {
        let mut p = prompter("");
        p.print_language_menu().unwrap();
        let out = output_of(p);

        assert!(out.contains("  1. English (en)"));
        assert!(out.contains("  20. Greek (el)"));
    }

    #[test]
    fn test_format_failure_color() {
        assert_eq!(format_failure("boom", false), "boom");
        assert_eq!(format_failure("boom", true), "\x1b[31mboom\x1b[0m");
    }
}
