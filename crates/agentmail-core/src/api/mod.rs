//! The AgentMail API boundary
//!
//! [`MailApi`] is the only thing the command layer talks to. The production
//! implementation is [`HttpClient`]; tests substitute a recording double.
//! Every operation takes typed parameters in and hands the service's JSON
//! back untouched, because the CLI prints it verbatim.

mod http;
mod params;

pub use http::{HttpClient, connect};
pub use params::{
    CreateInboxParams, ForwardMessageParams, ListInboxesParams, ListThreadsParams,
    ReplyMessageParams, SendMessageParams, UpdateMessageParams,
};

use crate::error::ApiError;
use serde_json::Value;

/// Resource operations exposed by the AgentMail service
pub trait MailApi {
    /// List inboxes, one page at a time
    fn list_inboxes(&self, params: &ListInboxesParams) -> Result<Value, ApiError>;

    /// Fetch a single inbox
    fn get_inbox(&self, inbox_id: &str) -> Result<Value, ApiError>;

    /// Create an inbox; every field is optional
    fn create_inbox(&self, params: &CreateInboxParams) -> Result<Value, ApiError>;

    /// Delete an inbox permanently
    fn delete_inbox(&self, inbox_id: &str) -> Result<(), ApiError>;

    /// List threads in an inbox
    fn list_threads(&self, inbox_id: &str, params: &ListThreadsParams) -> Result<Value, ApiError>;

    /// Fetch a thread with all of its messages
    fn get_thread(&self, inbox_id: &str, thread_id: &str) -> Result<Value, ApiError>;

    /// Send a new message
    fn send_message(&self, inbox_id: &str, params: &SendMessageParams) -> Result<Value, ApiError>;

    /// Reply to an existing message
    fn reply_to_message(
        &self,
        inbox_id: &str,
        message_id: &str,
        params: &ReplyMessageParams,
    ) -> Result<Value, ApiError>;

    /// Forward an existing message
    fn forward_message(
        &self,
        inbox_id: &str,
        message_id: &str,
        params: &ForwardMessageParams,
    ) -> Result<Value, ApiError>;

    /// Add or remove labels on a message
    fn update_message(
        &self,
        inbox_id: &str,
        message_id: &str,
        params: &UpdateMessageParams,
    ) -> Result<Value, ApiError>;

    /// Attachment metadata and download URL
    fn get_attachment(&self, thread_id: &str, attachment_id: &str) -> Result<Value, ApiError>;
}
