//! Command-line surface for `folio-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use folio::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "folio-cli", version, about = "Portfolio API command-line client", long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "FOLIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Home aggregate: hero plus latest posts and projects
    Home,
    /// Profile, skills, experiences, certificates
    About(AboutArgs),
    /// Blog posts (list/show/like/comment)
    Posts(PostsArgs),
    /// Portfolio projects (list/show/like/comment)
    Projects(ProjectsArgs),
    /// Viewer preferences (language, theme)
    Prefs(PrefsArgs),
}

#[derive(Parser, Debug)]
pub struct AboutArgs {
    #[command(subcommand)]
    pub action: AboutCmd,
}

#[derive(Subcommand, Debug)]
pub enum AboutCmd {
    /// Show the profile record
    Show,
    /// List skills
    Skills,
    /// List experience entries
    Experiences,
    /// List certificates
    Certificates,
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List all posts
    List,
    /// Show a single post
    Show { uuid: Uuid },
    /// Submit a like
    Like { uuid: Uuid },
    /// Submit a comment
    Comment {
        uuid: Uuid,
        /// Comment text (inline)
        #[arg(long)]
        content: Option<String>,
        /// Read comment text from a file (takes precedence over --content)
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct PrefsArgs {
    /// Preferences file to read and persist.
    #[arg(
        long = "file",
        env = "FOLIO_PREFS_FILE",
        value_name = "PATH",
        default_value = "folio-prefs.toml"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub action: PrefsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PrefsCmd {
    /// Show the current preferences
    Show,
    /// Set the UI language
    SetLanguage { language: LanguageArg },
    /// Set the UI theme
    SetTheme { theme: ThemeArg },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LanguageArg {
    En,
    Ru,
    Uz,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub action: ProjectsCmd,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCmd {
    /// List all projects
    List,
    /// Show a single project
    Show { uuid: Uuid },
    /// Submit a like
    Like { uuid: Uuid },
    /// Submit a comment
    Comment {
        uuid: Uuid,
        /// Comment text (inline)
        #[arg(long)]
        content: Option<String>,
        /// Read comment text from a file (takes precedence over --content)
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
}
