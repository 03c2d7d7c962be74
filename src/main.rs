// ==========================================
// 自行车门店管理后台 - HTTP 服务主入口
// ==========================================
// 技术栈: axum + Rust + SQLite
// 配置: 环境变量（见 config::app_config::env_keys）
// ==========================================

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use bike_store_admin::app::{build_router, AppState};
use bike_store_admin::config::AppConfig;
use bike_store_admin::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", bike_store_admin::APP_NAME);
    tracing::info!("系统版本: {}", bike_store_admin::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env()?;

    if i18n::available_locales().iter().any(|l| l == &config.locale) {
        i18n::set_locale(&config.locale);
    } else {
        tracing::warn!(locale = %config.locale, "不支持的语言，使用默认语言 en");
    }
    tracing::info!(locale = %i18n::current_locale(), "界面语言");

    tracing::info!("正在初始化AppState...");
    let state = AppState::new(&config)?;

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("无法监听地址: {}", config.bind))?;
    tracing::info!("服务已启动: http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("收到 Ctrl+C，准备停止"),
            Err(e) => {
                tracing::error!(error = %e, "无法安装 Ctrl+C 处理器");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("收到 SIGTERM，准备停止");
            }
            Err(e) => {
                tracing::error!(error = %e, "无法安装 SIGTERM 处理器");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
