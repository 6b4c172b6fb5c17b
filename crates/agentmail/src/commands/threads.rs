//! Threads command group: list, get

use agentmail_core::MailApi;
use agentmail_core::api::ListThreadsParams;
use agentmail_core::ListValue;
use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use super::non_empty;

/// Manage threads
#[derive(Args, Debug)]
pub struct ThreadsArgs {
    #[command(subcommand)]
    command: ThreadCommand,
}

#[derive(Subcommand, Debug)]
enum ThreadCommand {
    /// List threads in an inbox
    List(ListArgs),

    /// Get thread details with all messages
    Get(GetArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Inbox ID
    inbox_id: String,

    /// Max number of items to return
    #[arg(short, long, default_value_t = 10)]
    limit: u32,

    /// Page token for pagination
    #[arg(long)]
    page_token: Option<String>,

    /// Labels to filter by (JSON array or single label)
    #[arg(long)]
    labels: Option<ListValue>,

    /// Filter items before datetime (ISO 8601)
    #[arg(long)]
    before: Option<String>,

    /// Filter items after datetime (ISO 8601)
    #[arg(long)]
    after: Option<String>,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Inbox ID
    inbox_id: String,

    /// Thread ID
    thread_id: String,
}

/// Execute a threads subcommand
pub fn execute(args: ThreadsArgs, api: &dyn MailApi) -> Result<Value> {
    match args.command {
        ThreadCommand::List(args) => {
            let params = ListThreadsParams {
                limit: Some(args.limit),
                page_token: non_empty(args.page_token),
                labels: ListValue::resolve(args.labels)?,
                before: non_empty(args.before),
                after: non_empty(args.after),
            };
            Ok(api.list_threads(&args.inbox_id, &params)?)
        }
        ThreadCommand::Get(args) => Ok(api.get_thread(&args.inbox_id, &args.thread_id)?),
    }
}
