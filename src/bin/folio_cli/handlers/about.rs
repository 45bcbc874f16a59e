#![deny(clippy::all, clippy::pedantic)]

use folio::client::ApiClient;

use crate::args::AboutCmd;
use crate::error::CliError;
use crate::print::print_json;

pub async fn handle(client: &ApiClient, cmd: AboutCmd) -> Result<(), CliError> {
    match cmd {
        AboutCmd::Show => {
            let about = client.get_about_me().await?;
            print_json(&about)?;
        }
        AboutCmd::Skills => {
            let skills = client.get_skills().await?;
            print_json(&skills)?;
        }
        AboutCmd::Experiences => {
            let experiences = client.get_experiences().await?;
            print_json(&experiences)?;
        }
        AboutCmd::Certificates => {
            let certificates = client.get_certificates().await?;
            print_json(&certificates)?;
        }
    }
    Ok(())
}
