//! Attachments command group

use agentmail_core::MailApi;
use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

/// Manage attachments
#[derive(Args, Debug)]
pub struct AttachmentsArgs {
    #[command(subcommand)]
    command: AttachmentCommand,
}

#[derive(Subcommand, Debug)]
enum AttachmentCommand {
    /// Get attachment details and download URL
    Get(GetArgs),
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Thread ID
    thread_id: String,

    /// Attachment ID
    attachment_id: String,
}

/// Execute an attachments subcommand
pub fn execute(args: AttachmentsArgs, api: &dyn MailApi) -> Result<Value> {
    match args.command {
        AttachmentCommand::Get(args) => Ok(api.get_attachment(&args.thread_id, &args.attachment_id)?),
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{Call, RecordingApi, run};

    #[test]
    fn test_get() {
        let api = RecordingApi::default();
        run(&api, &["attachments", "get", "thr_1", "att_1"]).unwrap();
        assert_eq!(
            api.single_call(),
            Call::GetAttachment("thr_1".to_string(), "att_1".to_string())
        );
    }

    #[test]
    fn test_get_requires_both_ids() {
        let api = RecordingApi::default();
        assert!(run(&api, &["attachments", "get", "thr_1"]).is_err());
    }
}
