//! Request parameters for each API operation
//!
//! Unset options are skipped on serialization: the service only ever sees
//! the keys the user actually supplied. List queries are built by hand with
//! `query_pairs` so repeated labels stay separate pairs.

use serde::Serialize;

/// Query for `GET /inboxes`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInboxesParams {
    pub limit: Option<u32>,
    pub page_token: Option<String>,
}

impl ListInboxesParams {
    /// Query string pairs, in declaration order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref token) = self.page_token {
            pairs.push(("page_token", token.clone()));
        }
        pairs
    }
}

/// Body for `POST /inboxes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateInboxParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Query for `GET /inboxes/{inbox_id}/threads`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListThreadsParams {
    pub limit: Option<u32>,
    pub page_token: Option<String>,
    pub labels: Option<Vec<String>>,
    /// ISO 8601, passed through as given
    pub before: Option<String>,
    /// ISO 8601, passed through as given
    pub after: Option<String>,
}

impl ListThreadsParams {
    /// Query string pairs; each label becomes its own `labels=` pair
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref token) = self.page_token {
            pairs.push(("page_token", token.clone()));
        }
        for label in self.labels.iter().flatten() {
            pairs.push(("labels", label.clone()));
        }
        if let Some(ref before) = self.before {
            pairs.push(("before", before.clone()));
        }
        if let Some(ref after) = self.after {
            pairs.push(("after", after.clone()));
        }
        pairs
    }
}

/// Body for `POST /inboxes/{inbox_id}/messages/send`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendMessageParams {
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Body for `POST /inboxes/{inbox_id}/messages/{message_id}/forward`
///
/// Forwarding takes exactly the same fields as sending.
pub type ForwardMessageParams = SendMessageParams;

/// Body for `POST /inboxes/{inbox_id}/messages/{message_id}/reply`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplyMessageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Only ever `Some(true)`; an unset flag is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Body for `PATCH /inboxes/{inbox_id}/messages/{message_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMessageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_labels: Option<Vec<String>>,
}
