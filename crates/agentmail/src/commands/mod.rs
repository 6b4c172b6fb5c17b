//! CLI command dispatch and execution

use agentmail_core::MailApi;
use agentmail_core::config::{ConfigOverrides, resolve_config};
use agentmail_core::home::get_home_dir;
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

mod attachments;
mod inboxes;
mod messages;
mod threads;

/// agentmail - Email accounts for AI agents
#[derive(Parser, Debug)]
#[command(
    name = "agentmail",
    version,
    about = "CLI for AgentMail - Email accounts for AI agents",
    long_about = "CLI for AgentMail - Email accounts for AI agents.\n\n\
                  Every command prints the API response as JSON on stdout. \
                  Failures print a JSON error object on stderr and exit with status 1."
)]
pub struct Cli {
    /// AgentMail API key (or set AGENTMAIL_API_KEY env var)
    #[arg(short = 'k', long, global = true)]
    api_key: Option<String>,

    /// API base URL (or set AGENTMAIL_BASE_URL env var)
    #[arg(long, global = true, hide_short_help = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage inboxes
    Inboxes(inboxes::InboxesArgs),

    /// Manage threads
    Threads(threads::ThreadsArgs),

    /// Send and manage messages
    Messages(messages::MessagesArgs),

    /// Manage attachments
    Attachments(attachments::AttachmentsArgs),
}

impl Cli {
    /// Resolve configuration, build the API client once, run the command
    pub fn execute(self) -> Result<Value> {
        let overrides = ConfigOverrides {
            api_key: self.api_key,
            base_url: self.base_url,
        };
        let home_dir = get_home_dir()?;
        let config = resolve_config(&overrides, &home_dir)?;
        debug!("resolved configuration: {:?}", config.api);

        let client = agentmail_core::connect(&config.api)?;
        self.command.run(&client)
    }
}

impl Commands {
    fn run(self, api: &dyn MailApi) -> Result<Value> {
        match self {
            Commands::Inboxes(args) => inboxes::execute(args, api),
            Commands::Threads(args) => threads::execute(args, api),
            Commands::Messages(args) => messages::execute(args, api),
            Commands::Attachments(args) => attachments::execute(args, api),
        }
    }
}

/// Treat an empty string flag as if it had not been given
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
