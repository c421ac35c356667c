#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = taskboard_server::run().await {
        log::error!("error while running taskboard-server: {}", e);
        std::process::exit(1);
    }
}
