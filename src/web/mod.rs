//! Web 服务器模块
//!
//! 翻译表单页面和 JSON API

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::io;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::service::LingoService;

// ============================================================================
// 服务器
// ============================================================================

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    service: LingoService,
}

impl WebServer {
    /// 创建新的 Web 服务器
    ///
    /// `service` 内含阻塞 HTTP 客户端，必须在 tokio 运行时之外构建。
    pub fn new(config: WebConfig, service: LingoService) -> Self {
        Self { config, service }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> io::Result<()> {
        let app_state = Arc::new(AppState {
            service: self.service.clone(),
            default_source_lang: self.config.default_source_lang.clone(),
            default_target_lang: self.config.default_target_lang.clone(),
        });

        let app = create_router(app_state, &self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address()).await?;

        tracing::info!("Web server starting at http://{}", self.config.listen_address());

        axum::serve(listener, app).await
    }
}

// ============================================================================
// 路由器
// ============================================================================

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    // 添加CORS支持
    app = app.layer(CorsLayer::permissive());

    // 添加静态文件服务（如果配置了）
    if let Some(static_dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    app
}
