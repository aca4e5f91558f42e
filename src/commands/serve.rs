use crate::server;

pub async fn run(port: u16) {
    println!("🚀 Starting harmoniq server on port {}", port);

    if let Err(e) = server::serve(port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
