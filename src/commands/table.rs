use crate::error::Result;
use crate::models::AssetClass;
use crate::server::AppState;
use chrono::Local;

pub async fn run(class: &str) {
    if let Err(e) = print_table(class).await {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn print_table(class: &str) -> Result<()> {
    let class = AssetClass::from_str(class)?;
    let state = AppState::from_env()?;

    let rows = state.assembler.table(class, Local::now().naive_local()).await;
    if rows.is_empty() {
        eprintln!("⚠️  No symbol in the {} basket returned enough data", class);
    }

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
