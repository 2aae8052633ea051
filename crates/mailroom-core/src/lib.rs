//! # mailroom-core
//!
//! Core logic for the `Mailroom` webmail client.
//!
//! This crate provides:
//! - **Validation** - recipient syntax and required fields, before any request
//! - **Drafts** - compose state, including reply pre-fill
//! - **Controller** - the view state machine, driven by events, emitting requests
//! - **Rendering** - view models for the mailbox, compose and detail screens
//! - **Settings** - server URL and theme, persisted as JSON

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod draft;
mod error;
pub mod render;
pub mod validation;

pub use config::{AppSettings, ThemePreference};
pub use controller::{Controller, Event, Request, SendOutcome, Ticket, ViewState};
pub use draft::{Draft, DraftField};
pub use error::{Error, Result};
pub use render::{
    ComposeForm, DetailPage, EmailRow, MailboxPage, RowAction, RowShade, Screen, render,
};
pub use validation::{ValidationError, ValidationResult, is_valid_address, validate_draft};

pub use mailroom_api::{Email, EmailId, Mailbox};
