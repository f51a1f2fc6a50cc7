use clap::{Parser, Subcommand};
use clap_complete::Shell;
use userdir_business::UserId;

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Manage the users of a remote directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server origin, e.g. https://example.com (the API lives under /api)
    #[arg(long, global = true, env = "USERDIR_API_BASE_URL")]
    pub api_url: Option<String>,

    /// Print users as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all users
    List,
    /// Create a user, then show the refreshed list
    Add {
        /// Attribute as key=value (repeatable); values that parse as JSON keep their type
        #[arg(long = "field", short = 'f', value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Whole record as a JSON object; --field entries are applied on top
        #[arg(long, short = 'd')]
        data: Option<String>,
    },
    /// Replace a user record, then show the refreshed list
    Update {
        /// User ID
        id: UserId,

        /// Attribute as key=value (repeatable)
        #[arg(long = "field", short = 'f', value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Whole record as a JSON object; --field entries are applied on top
        #[arg(long, short = 'd')]
        data: Option<String>,

        /// Send only the given attributes instead of starting from the current record
        #[arg(long)]
        replace: bool,
    },
    /// Delete a user, then show the refreshed list
    Remove {
        /// User ID
        id: UserId,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location and the effective endpoint
    Show,
    /// Save the server origin used when --api-url is not given
    SetUrl {
        /// Server origin, e.g. https://example.com
        url: String,
    },
}
