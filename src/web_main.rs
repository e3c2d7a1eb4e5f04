//! Web 服务器主程序入口

use std::process;

use clap::Parser;

use lingovox::env::{self, EnvConfig};
use lingovox::web::{WebConfig, WebServer};
use lingovox::LingoService;

#[derive(Parser, Debug)]
#[command(name = "lingovox-web", version, about = "Lingovox Web Server")]
struct Args {
    /// Bind address (overrides LINGOVOX_WEB_BIND_ADDRESS)
    #[arg(short, long)]
    bind: Option<String>,

    /// Port (overrides LINGOVOX_WEB_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print configuration summary before starting
    #[arg(long)]
    show_config: bool,
}

fn main() {
    env::load_dotenv();
    let args = Args::parse();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    lingovox::logging::init_tracing(&config.log_level, !config.no_color);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    if args.show_config {
        config.print_summary();
    }

    let mut web_config = WebConfig::from_config(&config);
    if let Some(bind) = args.bind {
        web_config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        web_config.port = port;
    }
    if let Err(e) = web_config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // 阻塞 HTTP 客户端不能在异步上下文中创建或销毁，所以先于运行时构建
    let service = match LingoService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: could not start async runtime: {}", e);
            process::exit(1);
        }
    };

    let server = WebServer::new(web_config, service);
    let result = runtime.block_on(server.start());

    // 运行时先关闭，服务（及其客户端）随后在同步上下文中释放
    drop(runtime);
    drop(server);

    if let Err(e) = result {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}
