//! # Elastic Email Client
//! Asynchronous wrapper around the Elastic Email v2 HTTP API, covering accounts, contacts, lists, segments, campaigns, templates, logs, attachments, files, SMS and surveys through a configured [`Client`].
//!
//! ## Audience and uses
//! For Rust services that send transactional or marketing email through Elastic Email: build a [`Client`] with [`ClientBuilder`], then call the resource groups (`client.email()`, `client.contact()`, ...) from [`api`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Calls are independent and can run concurrently from clones of one client; nothing is retried or cached.
//!
//! ## Wire conventions
//! Every call is a form-encoded POST (multipart for uploads, GET for downloads) carrying the API key as the `apikey` parameter. Responses are a `{success, error, data}` [`Envelope`]; see [`decode`].
//!
//! ## Errors
//! A failed envelope becomes [`Error::Api`] with the server's message, an unreadable body [`Error::Decode`], a non-2xx status [`Error::Transport`] and an empty download [`Error::NotFound`]. Connection-level failures surface as [`Error::Request`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use elasticemail_client::{Client, models::EmailMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), elasticemail_client::Error> {
//!     let client = Client::new("my-api-key")?;
//!     let account = client.account().load().await?;
//!     println!("Sending as {}", account.email);
//!
//!     let sent = client
//!         .email()
//!         .send(&EmailMessage {
//!             from: Some(account.email.clone()),
//!             msg_to: Some(vec!["someone@example.com".into()]),
//!             subject: Some("Hello".into()),
//!             body_text: Some("Sent from Rust".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Transaction: {}", sent.transaction_id);
//!     Ok(())
//! }
//! ```

pub mod api;
mod client;
mod envelope;
mod error;
pub mod models;
mod multipart;
mod params;

pub use client::{Client, ClientBuilder};
pub use envelope::{Envelope, decode};
pub use error::Error;
pub use models::FilePayload;
pub use multipart::extract_filename;
pub use params::{ParamValue, ParameterMap};

/// Result type alias for Elastic Email operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
