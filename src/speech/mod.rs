//! 语音合成模块
//!
//! 校验文本、委托远程语音合成服务、写出 MP3 文件并校验输出非空。
//! 成功写出的文件归调用方所有；临时文件只在合成失败时被删除。

pub mod languages;
pub mod provider;
pub mod service;

pub use languages::{is_supported_language, SUPPORTED_LANGUAGES};
pub use provider::{split_text, GoogleSpeechProvider, SpeechProvider, DEFAULT_TTS_API_URL};
pub use service::{SpeechSynthesizer, DEFAULT_OUTPUT_FILE};
