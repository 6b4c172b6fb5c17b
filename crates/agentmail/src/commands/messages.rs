//! Messages command group: send, reply, forward, update

use agentmail_core::MailApi;
use agentmail_core::api::{ReplyMessageParams, SendMessageParams, UpdateMessageParams};
use agentmail_core::{ListValue, collect_values};
use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use super::non_empty;

/// Send and manage messages
#[derive(Args, Debug)]
pub struct MessagesArgs {
    #[command(subcommand)]
    command: MessageCommand,
}

#[derive(Subcommand, Debug)]
enum MessageCommand {
    /// Send a new email
    Send(SendArgs),

    /// Reply to an email
    Reply(ReplyArgs),

    /// Forward an email
    Forward(ForwardArgs),

    /// Update message labels
    Update(UpdateArgs),
}

/// Recipients and body shared by send and forward
#[derive(Args, Debug)]
struct ComposeArgs {
    /// Recipient email (can specify multiple)
    #[arg(long, required = true)]
    to: Vec<ListValue>,

    /// CC recipient (can specify multiple)
    #[arg(long)]
    cc: Vec<ListValue>,

    /// BCC recipient (can specify multiple)
    #[arg(long)]
    bcc: Vec<ListValue>,

    /// Email subject
    #[arg(short, long)]
    subject: Option<String>,

    /// Plain text body
    #[arg(short, long)]
    text: Option<String>,

    /// HTML body
    #[arg(long)]
    html: Option<String>,

    /// Labels (JSON array or single label)
    #[arg(long)]
    labels: Option<ListValue>,
}

impl ComposeArgs {
    fn into_params(self) -> Result<SendMessageParams> {
        let to = collect_values(self.to)?;
        if to.is_empty() {
            anyhow::bail!("At least one --to recipient is required");
        }

        Ok(SendMessageParams {
            to,
            cc: non_empty_list(collect_values(self.cc)?),
            bcc: non_empty_list(collect_values(self.bcc)?),
            subject: non_empty(self.subject),
            text: non_empty(self.text),
            html: non_empty(self.html),
            labels: ListValue::resolve(self.labels)?,
        })
    }
}

#[derive(Args, Debug)]
struct SendArgs {
    /// Inbox ID to send from
    inbox_id: String,

    #[command(flatten)]
    compose: ComposeArgs,
}

#[derive(Args, Debug)]
struct ReplyArgs {
    /// Inbox ID
    inbox_id: String,

    /// Message ID to reply to
    message_id: String,

    /// Plain text body
    #[arg(short, long)]
    text: Option<String>,

    /// HTML body
    #[arg(long)]
    html: Option<String>,

    /// Reply to all recipients
    #[arg(long)]
    reply_all: bool,

    /// Labels (JSON array or single label)
    #[arg(long)]
    labels: Option<ListValue>,
}

#[derive(Args, Debug)]
struct ForwardArgs {
    /// Inbox ID
    inbox_id: String,

    /// Message ID to forward
    message_id: String,

    #[command(flatten)]
    compose: ComposeArgs,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    /// Inbox ID
    inbox_id: String,

    /// Message ID
    message_id: String,

    /// Labels to add (JSON array or single label)
    #[arg(long)]
    add_labels: Option<ListValue>,

    /// Labels to remove (JSON array or single label)
    #[arg(long)]
    remove_labels: Option<ListValue>,
}

/// Execute a messages subcommand
pub fn execute(args: MessagesArgs, api: &dyn MailApi) -> Result<Value> {
    match args.command {
        MessageCommand::Send(args) => {
            let params = args.compose.into_params()?;
            Ok(api.send_message(&args.inbox_id, &params)?)
        }
        MessageCommand::Reply(args) => {
            let params = ReplyMessageParams {
                text: non_empty(args.text),
                html: non_empty(args.html),
                reply_all: args.reply_all.then_some(true),
                labels: ListValue::resolve(args.labels)?,
            };
            Ok(api.reply_to_message(&args.inbox_id, &args.message_id, &params)?)
        }
        MessageCommand::Forward(args) => {
            let params = args.compose.into_params()?;
            Ok(api.forward_message(&args.inbox_id, &args.message_id, &params)?)
        }
        MessageCommand::Update(args) => {
            let params = UpdateMessageParams {
                add_labels: ListValue::resolve(args.add_labels)?,
                remove_labels: ListValue::resolve(args.remove_labels)?,
            };
            Ok(api.update_message(&args.inbox_id, &args.message_id, &params)?)
        }
    }
}

fn non_empty_list(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}
