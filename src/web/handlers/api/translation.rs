//! 翻译API处理器

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
};
use tokio::task;

use crate::utils::languages::ensure_distinct;
use crate::web::types::{
    api_error, json_rejection, lingo_error, ApiError, AppState, TranslateRequest,
    TranslateResponse,
};

/// 翻译文本
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<ExtractJson<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let ExtractJson(request) = payload.map_err(json_rejection)?;

    if let Err(message) = ensure_distinct(&request.source_lang, &request.target_lang) {
        return Err(api_error(StatusCode::BAD_REQUEST, message, "same_language"));
    }

    let service = state.service.clone();
    let TranslateRequest {
        source_lang,
        target_lang,
        text,
    } = request;

    let result = {
        let source_lang = source_lang.clone();
        let target_lang = target_lang.clone();
        task::spawn_blocking(move || service.translate(&source_lang, &target_lang, &text))
    }
    .await
    .map_err(join_error)?;

    match result {
        Ok(translated_text) => Ok(Json(TranslateResponse {
            translated_text,
            source_lang,
            target_lang,
        })),
        Err(e) => {
            tracing::warn!("翻译失败 ({} -> {}): {}", source_lang, target_lang, e);
            Err(lingo_error(&e))
        }
    }
}

/// 阻塞任务异常终止
pub(crate) fn join_error(e: task::JoinError) -> ApiError {
    tracing::error!("后台任务失败: {}", e);
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Internal task failed: {}", e),
        "internal",
    )
}
