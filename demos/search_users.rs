//! Search example.
//!
//! This example searches users, walks every matching page lazily and lists
//! the available job titles.
//!
//! Run with: cargo run --example search_users -- [keyword]
//!
//! Configuration comes from USERHUB_BACKEND_URL, USERHUB_TIMEOUT_SECS and
//! USERHUB_ACCESS_TOKEN.

use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

use userhub_rs::api::UserSearch;
use userhub_rs::UserHubClient;

#[tokio::main]
async fn main() -> userhub_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keyword = std::env::args().nth(1);
    let client = UserHubClient::from_env()?;
    println!("Connecting to {}...", client.config().backend_url);

    let titles = client.job_titles().list().await?;
    println!("\n{} job title(s):", titles.len());
    for title in &titles {
        println!(
            "  - {} {}",
            title.id,
            title.field("name").and_then(|v| v.as_str()).unwrap_or("?")
        );
    }

    let mut criteria = UserSearch::new().size(25);
    if let Some(keyword) = keyword {
        criteria = criteria.keyword(keyword);
    }

    let first = client.users().search(&criteria.clone().page(1)).await?;
    println!("\n{} matching user(s)", first.total_items);

    let mut stream = client.users().search_stream(criteria);
    while let Some(user) = stream.next().await {
        let user = user?;
        let email = user.email().unwrap_or("-");
        match user.id {
            Some(id) => println!("  {:>6}  {}", id.get(), email),
            None => println!("       ?  {}", email),
        }
    }

    println!("\nDone!");
    Ok(())
}
