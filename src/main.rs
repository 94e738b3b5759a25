//! 产品 REST API 服务器

use product_api::infrastructure::{config::load_config, logger::Logger};
use product_api::{build_app, build_state};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let (config, source) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("配置加载失败: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日志
    Logger::init(&config.logging);

    match source {
        Some(path) => info!("从配置文件加载: {}", path),
        None => info!("未找到配置文件，使用默认配置"),
    }

    if let Err(e) = run(config).await {
        error!("服务器错误: {}", e);
        std::process::exit(1);
    }

    info!("服务器已停止");
}

async fn run(
    config: product_api::infrastructure::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config);
    let app = build_app(state, &config.http);

    let addr = config.http.server_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 产品 API 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/v1/products     - 获取所有产品");
    info!("   GET    /api/v1/products/:id - 获取特定产品");
    info!("   POST   /api/v1/products     - 创建新产品");
    info!("   PUT    /api/v1/products/:id - 更新产品");
    info!("   DELETE /api/v1/products/:id - 删除产品");
    info!("   GET    /health              - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("收到 Ctrl+C 信号"),
        _ = terminate => info!("收到 SIGTERM 信号"),
    }
}
