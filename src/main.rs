use recipe_box::{config::Config, filters::routes, store::JsonStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let store = JsonStore::open(&config.recipes_file, &config.data_dir).await?;

    let (address, server) = warp::serve(routes(store, config.static_dir.clone()))
        .try_bind_with_graceful_shutdown(config.address(), async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for Ctrl+C: {e}");
            }
            log::info!("Received Ctrl+C, shutting down");
        })?;

    log::info!("Serving recipes on http://{address}");
    server.await;
    log::info!("Server stopped");

    Ok(())
}
