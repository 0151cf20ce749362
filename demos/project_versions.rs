/// Prints the versions of a project with their unresolved issue counts.
///
/// Set these before running:
/// export JIRA_URL=https://your-instance.atlassian.net
/// export JIRA_USER=your-email@example.com
/// export JIRA_API_TOKEN=your-api-token
/// export JIRA_PROJECT=KP
///
/// Run with:
/// cargo run --example project_versions
use std::env;

use dotenv::dotenv;
use jira_cloud::{JiraClient, JiraConfig, VersionGetsOptions};
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
    let project = env::var("JIRA_PROJECT").unwrap_or_else(|_| "KP".to_string());

    let options = VersionGetsOptions::new()
        .expand(vec!["issuesstatus".to_string()])
        .status("unreleased")
        .order_by("-sequence");
    let (page, _) = client
        .project_version()
        .search(&project, Some(&options), 0, 50)
        .await?;

    println!("Unreleased versions of {}: {}", project, page.total);
    for version in &page.values {
        let Some(id) = version.id.as_deref() else {
            continue;
        };
        let (counts, _) = client.project_version().unresolved_issue_count(id).await?;
        println!(
            "  {} - {} ({}/{} unresolved, release {})",
            id,
            version.name.as_deref().unwrap_or("<unnamed>"),
            counts.issues_unresolved_count,
            counts.issues_count,
            version
                .release_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "unscheduled".to_string())
        );
    }

    Ok(())
}
