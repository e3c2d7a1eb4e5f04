//! 语音合成包装器

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{LingoError, LingoResult};
use crate::speech::SpeechProvider;

/// 调用方未指定输出路径时使用的文件名
pub const DEFAULT_OUTPUT_FILE: &str = "output.mp3";

/// 语音合成包装器
#[derive(Clone)]
pub struct SpeechSynthesizer {
    provider: Arc<dyn SpeechProvider>,
}

impl SpeechSynthesizer {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self { provider }
    }

    /// 合成语音并写入 `output`（默认 [`DEFAULT_OUTPUT_FILE`]），返回文件路径
    ///
    /// 文件已存在时会被覆盖。写入后校验文件存在且非空。
    pub fn synthesize(&self, text: &str, lang: &str, output: Option<&Path>) -> LingoResult<PathBuf> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LingoError::EmptyInput);
        }

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        tracing::info!("调用语音合成服务 (语言: {}, {} 字符)", lang, text.chars().count());
        let audio = self.provider.synthesize(text, lang).map_err(|failure| {
            tracing::warn!("语音合成失败: {}", failure);
            LingoError::SynthesisFailed(failure.to_string())
        })?;

        fs::write(&output, &audio).map_err(|e| {
            LingoError::SynthesisFailed(format!("could not write {}: {}", output.display(), e))
        })?;

        verify_artifact(&output)?;
        tracing::debug!("音频已写入 {} ({} 字节)", output.display(), audio.len());

        Ok(output)
    }

    /// 合成语音并写入新建的 `.mp3` 临时文件
    ///
    /// 临时文件会被保留，删除由调用方负责。
    pub fn synthesize_to_temp(&self, text: &str, lang: &str) -> LingoResult<PathBuf> {
        if text.trim().is_empty() {
            return Err(LingoError::EmptyInput);
        }

        let (_file, path) = tempfile::Builder::new()
            .prefix("lingovox-")
            .suffix(".mp3")
            .tempfile()
            .and_then(|file| file.keep().map_err(|e| e.error))
            .map_err(|e| LingoError::SynthesisFailed(format!("could not create temporary file: {}", e)))?;

        let result = self.synthesize(text, lang, Some(&path));
        if result.is_err() {
            let _ = fs::remove_file(&path);
        }
        result
    }
}

fn verify_artifact(path: &Path) -> LingoResult<()> {
    let metadata = fs::metadata(path)
        .map_err(|_| LingoError::SynthesisFailed("Audio file was not created".to_string()))?;

    if metadata.len() == 0 {
        return Err(LingoError::SynthesisFailed("Audio file is empty".to_string()));
    }

    Ok(())
}
