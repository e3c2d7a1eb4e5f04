//! 缓存相关API处理器

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::web::types::{AppState, CacheStatsResponse};

/// 获取缓存统计信息
pub async fn get_cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStatsResponse> {
    let stats = state.service.cache_stats();
    Json(CacheStatsResponse {
        hit_rate: stats.hit_rate(),
        stats,
    })
}

/// 清理缓存
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let cleared = state.service.cache_stats().len;
    state.service.clear_cache();
    tracing::info!("已清理 {} 个缓存条目", cleared);

    Json(serde_json::json!({
        "success": true,
        "message": format!("Cleared {} cache entries", cleared),
        "deleted_count": cleared
    }))
}
