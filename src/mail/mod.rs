//! Email dispatch
//!
//! Sends the exported spreadsheet as an attachment through the SendGrid
//! HTTP API.

mod sendgrid;

pub use sendgrid::{ATTACHMENT_MIME_TYPE, SendGridClient, mask_api_key};
