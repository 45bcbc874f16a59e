#![deny(clippy::all, clippy::pedantic)]

use folio::client::ApiClient;
use uuid::Uuid;

use crate::args::ProjectsCmd;
use crate::error::CliError;
use crate::io::read_value;
use crate::print::print_json;

pub async fn handle(client: &ApiClient, cmd: ProjectsCmd) -> Result<(), CliError> {
    match cmd {
        ProjectsCmd::List => list(client).await,
        ProjectsCmd::Show { uuid } => show(client, uuid).await,
        ProjectsCmd::Like { uuid } => like(client, uuid).await,
        ProjectsCmd::Comment {
            uuid,
            content,
            content_file,
        } => {
            let content = read_value(content, content_file)?;
            comment(client, uuid, &content).await
        }
    }
}

async fn list(client: &ApiClient) -> Result<(), CliError> {
    let projects = client.get_projects().await?;
    print_json(&projects)?;
    Ok(())
}

async fn show(client: &ApiClient, uuid: Uuid) -> Result<(), CliError> {
    let project = client.get_project(uuid).await?;
    print_json(&project)?;
    Ok(())
}

async fn like(client: &ApiClient, uuid: Uuid) -> Result<(), CliError> {
    client.like_project(uuid).await?;
    println!("liked");
    Ok(())
}

async fn comment(client: &ApiClient, uuid: Uuid, content: &str) -> Result<(), CliError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("comment content is empty".into()));
    }
    let created = client.add_project_comment(uuid, trimmed).await?;
    print_json(&created)?;
    Ok(())
}
