//! FCM Legacy HTTP Client
//!
//! Builds push notification requests for the Firebase Cloud Messaging legacy
//! HTTP API (`https://fcm.googleapis.com/fcm/send`) and sends them with a
//! single POST per call.
//!
//! It handles:
//! - Device and topic targeting, including OR-conditions across topics
//! - Notification, data and delivery options
//! - Pre-encrypted Web Push payloads
//! - Server key authentication and proxy endpoints
//!
//! Response interpretation and retries are left to the caller.

pub mod client;
pub mod config;
pub mod errors;
pub mod message;
pub mod models;

pub use client::{FcmClient, DEFAULT_API_URL};
pub use config::FcmConfig;
pub use errors::{FcmError, Result};
pub use message::Message;
pub use models::{EncryptedPayload, Notification, Priority, Recipient, RecipientKind};
