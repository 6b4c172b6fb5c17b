//! Inboxes command group: list, get, create, delete

use agentmail_core::MailApi;
use agentmail_core::api::{CreateInboxParams, ListInboxesParams};
use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::{Value, json};

use super::non_empty;

/// Manage inboxes
#[derive(Args, Debug)]
pub struct InboxesArgs {
    #[command(subcommand)]
    command: InboxCommand,
}

#[derive(Subcommand, Debug)]
enum InboxCommand {
    /// List all inboxes
    List(ListArgs),

    /// Get inbox details
    Get(GetArgs),

    /// Create a new inbox
    Create(CreateArgs),

    /// Delete an inbox (destructive!)
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Max number of items to return
    #[arg(short, long, default_value_t = 10)]
    limit: u32,

    /// Page token for pagination
    #[arg(long)]
    page_token: Option<String>,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Inbox ID
    inbox_id: String,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Email username
    #[arg(short, long)]
    username: Option<String>,

    /// Email domain
    #[arg(short, long)]
    domain: Option<String>,

    /// Display name
    #[arg(short = 'n', long)]
    display_name: Option<String>,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    /// Inbox ID
    inbox_id: String,
}

/// Execute an inboxes subcommand
pub fn execute(args: InboxesArgs, api: &dyn MailApi) -> Result<Value> {
    match args.command {
        InboxCommand::List(args) => {
            let params = ListInboxesParams {
                limit: Some(args.limit),
                page_token: non_empty(args.page_token),
            };
            Ok(api.list_inboxes(&params)?)
        }
        InboxCommand::Get(args) => Ok(api.get_inbox(&args.inbox_id)?),
        InboxCommand::Create(args) => {
            let params = CreateInboxParams {
                username: non_empty(args.username),
                domain: non_empty(args.domain),
                display_name: non_empty(args.display_name),
            };
            Ok(api.create_inbox(&params)?)
        }
        InboxCommand::Delete(args) => {
            api.delete_inbox(&args.inbox_id)?;
            Ok(json!({ "success": true, "deleted": args.inbox_id }))
        }
    }
}
