//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 页面
        .route("/", get(index))
        .route("/health", get(health))
        // API
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate_text))
        .route("/api/speech", post(synthesize_speech))
        // 缓存管理
        .route("/api/cache/stats", get(get_cache_stats))
        .route("/api/cache/clear", post(clear_cache))
}
