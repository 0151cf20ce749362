/// Lists the dashboards visible to the configured user, page by page.
///
/// Set these before running:
/// export JIRA_URL=https://your-instance.atlassian.net
/// export JIRA_USER=your-email@example.com
/// export JIRA_API_TOKEN=your-api-token
///
/// Run with:
/// cargo run --example dashboard_gets
use dotenv::dotenv;
use jira_cloud::{DashboardFilter, JiraClient, JiraConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = JiraConfig::from_env()
        .map_err(|e| format!("Jira environment not configured: {}", e))?;
    let client = JiraClient::new(config)?;

    let mut start_at = 0;
    loop {
        let (page, response) = client.dashboard().gets(start_at, 50, None).await?;
        println!("{} {} -> {}", response.method, response.endpoint, response.code);

        for dashboard in &page.dashboards {
            println!(
                "  {} - {} (favourite: {})",
                dashboard.id,
                dashboard.name.as_deref().unwrap_or("<unnamed>"),
                dashboard.is_favourite.unwrap_or(false)
            );
        }

        if page.next.is_none() || page.dashboards.is_empty() {
            break;
        }
        start_at += page.dashboards.len() as u32;
    }

    let (favourites, _) = client
        .dashboard()
        .gets(0, 50, Some(DashboardFilter::Favourite))
        .await?;
    println!("Favourite dashboards: {}", favourites.total);

    Ok(())
}
