#[tokio::main]
async fn main() {
    harmoniq::cli::run().await;
}
