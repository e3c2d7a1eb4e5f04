//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅者，输出到 stderr
///
/// `RUST_LOG` 优先于传入的级别。重复调用时忽略（测试中常见）。
pub fn init_tracing(level: &str, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("lingovox={level},tower_http=warn")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init();
}
