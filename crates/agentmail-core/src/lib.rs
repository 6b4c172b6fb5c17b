//! Core library for the agentmail CLI
//!
//! This crate holds everything below the command-line surface:
//! - API configuration resolution (CLI flag > environment > config file)
//! - Normalization of JSON-or-scalar list arguments
//! - The [`api::MailApi`] boundary and its blocking HTTP implementation
//!
//! The binary crate only binds flags to the request types defined here
//! and formats whatever comes back.

pub mod api;
pub mod config;
pub mod error;
pub mod home;
pub mod list_value;
pub mod logging;

pub use api::{HttpClient, MailApi, connect};
pub use error::ApiError;
pub use list_value::{ListValue, accumulate, collect_values, normalize_list_value};
