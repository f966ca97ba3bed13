use store_server::utils::logger;
use store_server::{Config, Server};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_level = std::env::var("LOG_LEVEL").ok();
    if config.is_production() {
        let logs_dir = config.logs_dir();
        if let Err(e) = std::fs::create_dir_all(&logs_dir) {
            eprintln!("failed to create log directory: {e}");
        }
        logger::init_logger_with_file(log_level.as_deref(), logs_dir.to_str());
    } else {
        logger::init_logger_with_file(log_level.as_deref(), None);
    }

    tracing::info!(
        port = config.http_port,
        work_dir = %config.work_dir,
        environment = %config.environment,
        "starting store-server"
    );

    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server exited with error: {e}");
        std::process::exit(1);
    }
}
