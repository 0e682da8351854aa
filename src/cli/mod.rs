pub mod check;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pwncheck")]
#[command(about = "Check passwords and accounts against Have I Been Pwned")]
#[command(version)]
pub struct Cli {
    /// HIBP API key (or HIBP_API_KEY env var, or config file)
    #[arg(short, long, env = "HIBP_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Service to query: breach, paste or password
    #[arg(short, long, default_value = "")]
    pub service: String,

    /// CSV list to check, first column only, no header ("-" reads stdin)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Account or password to check when no list is given
    pub item: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
