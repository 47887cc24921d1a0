#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

#[macroquad::main("Balloon")]
async fn main() {
    init_logging();
    balloon_web_lib::run().await;
}
