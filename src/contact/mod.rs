//! Contact form: field validation, backend payload and reply classification
//!
//! Submitting the payload is left to the caller; this module only decides
//! what is sent and what the visitor is told about the backend's answer.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ContactConfig;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub const MSG_SENT: &str = "Thank you! Message sent.";
pub const MSG_QUEUED: &str = "Received. I’ll get back to you soon.";
pub const MSG_FAILED: &str = "Could not send your message. Please try again later.";
pub const MSG_FORBIDDEN_LOCAL: &str =
    "Submission failed (403). Backend likely rejects local requests due to CORS/Origin restrictions.";

/// Reasons a form is rejected before anything is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact form is not configured yet.")]
    NotConfigured,

    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Raw form input
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Honeypot; real visitors leave it empty
    pub website: String,
}

/// Body posted to the contact backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub secret: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub website: String,
}

/// A backend reply the way the visitor sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent(String),
    Queued(String),
    Failed(String),
}

impl ContactOutcome {
    pub fn message(&self) -> &str {
        match self {
            ContactOutcome::Sent(m) | ContactOutcome::Queued(m) | ContactOutcome::Failed(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, ContactOutcome::Failed(_))
    }
}

#[derive(Debug, Default, Deserialize)]
struct BackendReply {
    status: Option<String>,
    message: Option<String>,
}

/// Basic shape check of an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Whether the page is served from the local machine
pub fn is_local_origin(origin: &str) -> bool {
    if origin.starts_with("file:") {
        return true;
    }

    let rest = origin.split_once("://").map(|(_, r)| r).unwrap_or(origin);
    let host = rest
        .split(|c| c == '/' || c == ':')
        .next()
        .unwrap_or_default();
    host == "localhost" || host == "127.0.0.1"
}

impl ContactForm {
    /// Validate the form against the backend configuration and build the payload
    pub fn into_payload(self, config: &ContactConfig) -> Result<ContactPayload, ContactError> {
        let secret = match (&config.backend_url, &config.secret) {
            (Some(url), Some(secret)) if !url.trim().is_empty() && !secret.is_empty() => {
                secret.clone()
            }
            _ => return Err(ContactError::NotConfigured),
        };

        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactPayload {
            secret,
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            website: self.website.trim().to_string(),
        })
    }
}

impl ContactPayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Map the backend's status code and JSON body to what the visitor is told
///
/// A body that is not JSON is treated as carrying no status.
pub fn classify_response(status: u16, body: &str, local: bool) -> ContactOutcome {
    let reply: BackendReply = serde_json::from_str(body).unwrap_or_default();

    match reply.status.as_deref() {
        Some("ok") if (200..300).contains(&status) => {
            ContactOutcome::Sent(reply.message.unwrap_or_else(|| MSG_SENT.to_string()))
        }
        Some("queued") if status == 202 => {
            ContactOutcome::Queued(reply.message.unwrap_or_else(|| MSG_QUEUED.to_string()))
        }
        _ if status == 403 && local => ContactOutcome::Failed(MSG_FORBIDDEN_LOCAL.to_string()),
        _ => {
            tracing::debug!("Contact backend replied {}: {}", status, body);
            ContactOutcome::Failed(MSG_FAILED.to_string())
        }
    }
}
