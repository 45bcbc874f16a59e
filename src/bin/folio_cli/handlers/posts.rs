#![deny(clippy::all, clippy::pedantic)]

use folio::client::ApiClient;
use uuid::Uuid;

use crate::args::PostsCmd;
use crate::error::CliError;
use crate::io::read_value;
use crate::print::print_json;

pub async fn handle(client: &ApiClient, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List => list(client).await,
        PostsCmd::Show { uuid } => show(client, uuid).await,
        PostsCmd::Like { uuid } => like(client, uuid).await,
        PostsCmd::Comment {
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
    let posts = client.get_posts().await?;
    print_json(&posts)?;
    Ok(())
}

async fn show(client: &ApiClient, uuid: Uuid) -> Result<(), CliError> {
    let post = client.get_post(uuid).await?;
    print_json(&post)?;
    Ok(())
}

async fn like(client: &ApiClient, uuid: Uuid) -> Result<(), CliError> {
    client.like_post(uuid).await?;
    println!("liked");
    Ok(())
}

async fn comment(client: &ApiClient, uuid: Uuid, content: &str) -> Result<(), CliError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("comment content is empty".into()));
    }
    let created = client.add_post_comment(uuid, trimmed).await?;
    print_json(&created)?;
    Ok(())
}
