//! List linked accounts and the latest transactions of each.
//!
//! Run with: source .env && cargo run --example list_transactions
//!
//! Required environment:
//!   MONEYTREE_BASE_URL       e.g. https://jp-api.getmoneytree.com
//!   MONEYTREE_CLIENT_ID
//!   MONEYTREE_CLIENT_SECRET
//!   MONEYTREE_REFRESH_TOKEN

use moneytree::prelude::*;

#[tokio::main]
async fn main() -> moneytree::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("MONEYTREE_BASE_URL").expect("MONEYTREE_BASE_URL required");
    let client_id = std::env::var("MONEYTREE_CLIENT_ID").expect("MONEYTREE_CLIENT_ID required");
    let client_secret =
        std::env::var("MONEYTREE_CLIENT_SECRET").expect("MONEYTREE_CLIENT_SECRET required");
    let refresh_token =
        std::env::var("MONEYTREE_REFRESH_TOKEN").expect("MONEYTREE_REFRESH_TOKEN required");

    let client = MoneytreeClient::new(Config::new(base_url, client_id, client_secret))?;

    println!("Refreshing access token...");
    let tokens = client
        .oauth()
        .refresh(&RefreshToken::new(refresh_token))
        .await?;
    if let Some(expires_at) = tokens.expires_at() {
        println!("Token valid until {}\n", expires_at);
    }
    let token = tokens.access_token;

    let profile = client.profile().get(&token).await?;
    println!("=== Profile {} ===", profile.moneytree_id);
    println!("Email:    {:?}", profile.email);
    println!("Locale:   {:?}", profile.locale_identifier);
    println!();

    let accounts = client.personal_accounts();
    for account in accounts.list(&token, None).await? {
        println!("=== {} ({}) ===", account.display_name(), account.currency);
        println!("Balance:  {:?}", account.current_balance);

        let query = TransactionsQuery::new()
            .per_page(10)
            .sort(SortKey::Date, SortOrder::Desc);
        let transactions = match accounts.transactions(&token, account.id, Some(query)).await {
            Ok(transactions) => transactions,
            Err(e) if e.is_api() => {
                println!("  could not load transactions: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        for tx in transactions {
            println!(
                "  {}  {:>12}  {}",
                tx.date.format("%Y-%m-%d"),
                tx.amount,
                tx.description().unwrap_or("-")
            );
        }
        println!();
    }

    Ok(())
}
