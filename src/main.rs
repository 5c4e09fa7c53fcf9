//! DeFi Scout - GitHub DeFi Opportunity Scanner
//!
//! Runs one scan (or the requested command) and prints the result.

use anyhow::Result;

use defi_scout::adapters::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (GITHUB_TOKEN usually lives here)
    dotenvy::dotenv().ok();

    let app = cli::init();
    cli::execute(app).await
}
