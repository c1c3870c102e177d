use barcode_server::{start_server, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    start_server(ServerConfig::from_env()).await
}
