//! 语言列表API处理器

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::utils::languages::LANGUAGES;
use crate::web::types::{AppState, LanguageInfo, LanguagesResponse};

/// 表单可选的语言
pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: LANGUAGES
            .iter()
            .map(|&(name, code)| LanguageInfo { code, name })
            .collect(),
        default_source: state.default_source_lang.clone(),
        default_target: state.default_target_lang.clone(),
    })
}
