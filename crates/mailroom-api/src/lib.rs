//! # mailroom-api
//!
//! Async client for the webmail JSON API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | [`ApiClient::list_emails`] | GET | `/emails/{mailbox}` |
//! | [`ApiClient::get_email`] | GET | `/emails/{id}` |
//! | [`ApiClient::update_email`] | PUT | `/emails/{id}` |
//! | [`ApiClient::create_email`] | POST | `/emails` |
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailroom_api::{ApiClient, EmailUpdate, Mailbox, NewEmail};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://127.0.0.1:8000")?;
//!
//!     for email in client.list_emails(Mailbox::Inbox).await? {
//!         println!("{} - {}", email.sender, email.subject);
//!     }
//!
//!     let created = client
//!         .create_email(&NewEmail::new("bob@example.com, eve@example.com", "Hi", "Hello!"))
//!         .await?;
//!     if let Some(reason) = created.error() {
//!         eprintln!("rejected: {reason}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use types::{CreateResponse, Email, EmailId, EmailUpdate, Mailbox, NewEmail};
