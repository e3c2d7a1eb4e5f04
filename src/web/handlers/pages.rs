//! 页面处理器

use axum::response::{Html, Json};

use crate::web::types::HealthResponse;

/// 主页处理器
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../templates/index.html"))
}

/// 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
