use crate::server::widgets::registry;

pub fn run() {
    match serde_json::to_string_pretty(&registry()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
