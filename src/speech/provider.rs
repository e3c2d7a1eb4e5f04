//! 远程语音合成服务

use std::time::Duration;

use reqwest::blocking::Client;

use crate::network::{build_http_client, provider_url, RemoteFailure};
use crate::speech::languages::is_supported_language;

/// Google 翻译语音接口
pub const DEFAULT_TTS_API_URL: &str = "https://translate.google.com/translate_tts";
pub const DEFAULT_TTS_TIMEOUT: Duration = Duration::from_secs(15);

/// 远程接口单次请求的最大字符数
pub const MAX_CHUNK_CHARS: usize = 100;

/// 无条件断句的标点
const HARD_BREAKS: &[char] = &['!', '?', ';', '\n', '。', '！', '？', '；', '，', '、'];

/// 后面紧跟空白或文本结尾时才断句，数字和缩写中的标点不切分
const SOFT_BREAKS: &[char] = &['.', ',', ':'];

/// 远程语音合成服务接口
///
/// 一次阻塞调用：接受 (文本, 语言代码)，返回 MP3 字节流或失败。
pub trait SpeechProvider: Send + Sync {
    fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, RemoteFailure>;
}

/// 基于 Google `translate_tts` 接口的实现
pub struct GoogleSpeechProvider {
    client: Client,
    api_url: String,
}

impl GoogleSpeechProvider {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteFailure> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_url: api_url.into(),
        })
    }

    pub fn with_defaults() -> Result<Self, RemoteFailure> {
        Self::new(DEFAULT_TTS_API_URL, DEFAULT_TTS_TIMEOUT)
    }

    fn synthesize_chunk(
        &self,
        chunk: &str,
        lang: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, RemoteFailure> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let url = provider_url(
            &self.api_url,
            &[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", chunk),
                ("total", &total),
                ("idx", &idx),
                ("textlen", &textlen),
            ],
        )?;

        let response = self
            .client
            .get(url)
            .header("Referer", "https://translate.google.com/")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteFailure::from_status(status, &body));
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl SpeechProvider for GoogleSpeechProvider {
    fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, RemoteFailure> {
        if !is_supported_language(lang) {
            return Err(RemoteFailure::Other(format!("Language not supported: {}", lang)));
        }

        let chunks = split_text(text, MAX_CHUNK_CHARS);
        tracing::debug!("语音合成分为 {} 段 (语言: {})", chunks.len(), lang);

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            audio.extend(self.synthesize_chunk(chunk, lang, idx, chunks.len())?);
        }

        Ok(audio)
    }
}

/// 把文本切成不超过 `max_chars` 个字符的片段
///
/// 先按句读切分，过长的句子再按空白切分，单个超长词按字符硬切分。
/// 相邻的短片段会合并，尽量减少远程请求次数。
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for piece in pieces(text, max_chars) {
        let piece_len = piece.chars().count();
        if !current.is_empty() && current_len + 1 + piece_len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&piece);
        current_len += piece_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn pieces(text: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();

    for sentence in sentences(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if sentence.chars().count() <= max_chars {
            out.push(sentence.to_string());
            continue;
        }

        for word in sentence.split_whitespace() {
            if word.chars().count() <= max_chars {
                out.push(word.to_string());
            } else {
                let chars: Vec<char> = word.chars().collect();
                out.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
            }
        }
    }

    out
}

fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_break = HARD_BREAKS.contains(&c)
            || (SOFT_BREAKS.contains(&c)
                && chars.peek().map_or(true, |&(_, next)| next.is_whitespace()));

        if is_break {
            let end = i + c.len_utf8();
            out.push(&text[start..end]);
            start = end;
        }
    }

    if start < text.len() {
        out.push(&text[start..]);
    }

    out
}
