/// Shows which fields of an issue can be edited, and where new issues of a
/// project can be created.
///
/// Set these before running:
/// export JIRA_URL=https://your-instance.atlassian.net
/// export JIRA_USER=your-email@example.com
/// export JIRA_API_TOKEN=your-api-token
/// export JIRA_ISSUE=KP-2
///
/// Run with:
/// cargo run --example issue_editmeta
use std::env;

use dotenv::dotenv;
use jira_cloud::{IssueMetadataCreateOptions, JiraClient, JiraConfig};
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
    let issue = env::var("JIRA_ISSUE").unwrap_or_else(|_| "KP-2".to_string());

    let (metadata, _) = client.issue_metadata().get(&issue, false, false).await?;
    if let Some(fields) = metadata["fields"].as_object() {
        println!("Editable fields of {}:", issue);
        for (key, field) in fields {
            println!(
                "  {} ({}) required: {}",
                key,
                field["name"].as_str().unwrap_or("?"),
                field["required"].as_bool().unwrap_or(false)
            );
        }
    }

    let project = issue.split('-').next().unwrap_or_default().to_string();
    let options = IssueMetadataCreateOptions::new()
        .project_keys(vec![project])
        .expand("projects.issuetypes.fields");
    let (create, _) = client.issue_metadata().create(Some(&options)).await?;
    for project in create["projects"].as_array().into_iter().flatten() {
        for issue_type in project["issuetypes"].as_array().into_iter().flatten() {
            println!(
                "{} / {}: {} fields",
                project["key"].as_str().unwrap_or("?"),
                issue_type["name"].as_str().unwrap_or("?"),
                issue_type["fields"].as_object().map_or(0, |fields| fields.len())
            );
        }
    }

    Ok(())
}
