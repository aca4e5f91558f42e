use crate::error::Result;
use crate::models::{AssetClass, Period, Theme};
use crate::server::AppState;
use chrono::Local;

pub async fn run(class: &str, period: &str, theme: &str) {
    if let Err(e) = print_chart(class, period, theme).await {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn print_chart(class: &str, period: &str, theme: &str) -> Result<()> {
    let class = AssetClass::from_str(class)?;
    // The CLI rejects bad periods instead of silently charting YTD
    let period = Period::parse(period)?;
    let theme = Theme::parse_or_default(Some(theme));
    let state = AppState::from_env()?;

    let figure = state
        .assembler
        .performance(class, period, theme, Local::now().naive_local())
        .await;

    println!("{}", serde_json::to_string_pretty(&figure)?);
    Ok(())
}
