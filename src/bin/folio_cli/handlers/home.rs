#![deny(clippy::all, clippy::pedantic)]

use folio::client::ApiClient;

use crate::error::CliError;
use crate::print::print_json;

pub async fn handle(client: &ApiClient) -> Result<(), CliError> {
    let home = client.get_home().await?;
    print_json(&home)?;
    Ok(())
}
