/// Example demonstrating how to reconstruct a token holder list at a height
///
/// This example shows how to:
/// 1. Create an HttpQueryClient for a public SLP indexer
/// 2. Pick a safe cutoff from the indexer's own indexed height
/// 3. Reconstruct per-address balances as of that height
/// 4. Print the holders in first-credit order
///
/// Run with:
/// ```bash
/// ENDPOINT=https://slpdb.fountainhead.cash \
/// TOKEN_ID=4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf \
/// HEIGHT=620971 \
/// cargo run --example holder_list
/// ```
///
/// Note: HEIGHT is optional; without it the snapshot is taken at the
/// indexer's current indexed height.
use anyhow::{Context, Result};
use slpscan::{HttpQueryClient, SnapshotCalculator, TokenId};
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    dotenvy::dotenv().ok();

    // Read configuration from environment
    let endpoint =
        env::var("ENDPOINT").unwrap_or_else(|_| "https://slpdb.fountainhead.cash".to_string());
    let token_str = env::var("TOKEN_ID").unwrap_or_else(|_| {
        // SPICE, a long-lived fungible token with a deep holder set
        "4de69e374a8ed21cbddd47f2338cc0f479dc58daa2bbe11cd604ca488eca0ddf".to_string()
    });

    info!(endpoint, token = token_str, "Starting holder list example");

    let token: TokenId = token_str
        .parse()
        .context("Failed to parse TOKEN_ID (expected 64 hex characters)")?;

    let client = HttpQueryClient::new(&endpoint)?;
    let calculator = SnapshotCalculator::new(client);

    // Pick the cutoff: explicit HEIGHT, or whatever the indexer has indexed
    let cutoff = match env::var("HEIGHT") {
        Ok(raw) => raw
            .parse()
            .context("Failed to parse HEIGHT (expected a block height)")?,
        Err(_) => calculator
            .indexed_height()
            .await
            .context("Failed to read the indexer height")?,
    };

    info!(token = %token, cutoff, "Reconstructing holder balances");
    let balances = calculator.address_balances(&token, cutoff).await?;

    println!("\n=== Token Holders ===");
    println!("Token: {token}");
    println!("Cutoff height: {cutoff}");
    println!(
        "Holders: {} ({} with a positive balance)",
        balances.len(),
        balances.positive_count()
    );
    println!("Total in circulation: {}", balances.total());
    println!();
    for (address, amount) in balances.iter().take(20) {
        println!("{address}: {amount}");
    }
    if balances.len() > 20 {
        println!("... and {} more holders", balances.len() - 20);
    }

    Ok(())
}
