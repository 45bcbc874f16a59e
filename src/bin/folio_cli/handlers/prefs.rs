#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use folio::prefs::{Language, PrefsStore, Theme};

use crate::args::{LanguageArg, PrefsCmd, ThemeArg};
use crate::error::CliError;
use crate::print::print_json;

pub fn handle(file: PathBuf, cmd: PrefsCmd) -> Result<(), CliError> {
    let store = PrefsStore::load(file);
    match cmd {
        PrefsCmd::Show => {
            print_json(&serde_json::json!({
                "language": store.language(),
                "theme": store.theme(),
            }))?;
        }
        PrefsCmd::SetLanguage { language } => {
            store.set_language(language.into())?;
            println!("language set");
        }
        PrefsCmd::SetTheme { theme } => {
            store.set_theme(theme.into())?;
            println!("theme set");
        }
    }
    Ok(())
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::En => Language::En,
            LanguageArg::Ru => Language::Ru,
            LanguageArg::Uz => Language::Uz,
        }
    }
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}
