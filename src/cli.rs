use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schedlens")]
#[command(author, version, about = "GitLab pipeline schedule success-rate exporter", long_about = None)]
pub struct Cli {
    /// Path to the JSON settings file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,
}
