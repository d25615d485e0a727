#[tokio::main]
async fn main() {
    if let Err(e) = wayfarer_server::cli::run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
