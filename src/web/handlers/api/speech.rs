//! 语音合成API处理器

use std::fs;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json as ExtractJson, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::task;

use crate::error::{LingoError, LingoResult};
use crate::web::handlers::api::translation::join_error;
use crate::web::types::{json_rejection, lingo_error, ApiError, AppState, SpeechRequest};

/// 合成语音并作为 MP3 附件返回
///
/// 临时文件读入内存后立即删除。
pub async fn synthesize_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<ExtractJson<SpeechRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let ExtractJson(request) = payload.map_err(json_rejection)?;
    let service = state.service.clone();
    let filename = attachment_name(request.source_lang.as_deref(), &request.lang);
    let SpeechRequest { text, lang, .. } = request;

    let audio = task::spawn_blocking(move || -> LingoResult<Vec<u8>> {
        let path = service.synthesize_to_temp(&text, &lang)?;
        let bytes = fs::read(&path);
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("无法删除临时音频文件 {}: {}", path.display(), e);
        }
        bytes.map_err(|e| LingoError::SynthesisFailed(format!("Could not read audio file: {}", e)))
    })
    .await
    .map_err(join_error)?
    .map_err(|e| {
        tracing::warn!("语音合成失败: {}", e);
        lingo_error(&e)
    })?;

    tracing::debug!("语音合成完成: {} ({} bytes)", filename, audio.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        audio,
    )
        .into_response())
}

/// `translation_<src>_<lang>.mp3`，没有源语言时为 `translation_<lang>.mp3`
pub fn attachment_name(source_lang: Option<&str>, lang: &str) -> String {
    let clean = |code: &str| -> String {
        code.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect()
    };

    match source_lang.map(clean).filter(|s| !s.is_empty()) {
        Some(source) => format!("translation_{}_{}.mp3", source, clean(lang)),
        None => format!("translation_{}.mp3", clean(lang)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_name() {
        assert_eq!(attachment_name(Some("en"), "es"), "translation_en_es.mp3");
        assert_eq!(attachment_name(None, "fr"), "translation_fr.mp3");
        assert_eq!(attachment_name(Some("../x"), "zh-CN"), "translation_x_zh-CN.mp3");
    }
}
