//! Runs controller requests against the API.

use mailroom_api::{ApiClient, EmailUpdate};
use mailroom_core::{Event, Request, SendOutcome};
use tracing::warn;

/// Performs `request` and turns the answer into the event that reports it.
pub async fn execute(client: ApiClient, request: Request) -> Event {
    match request {
        Request::List { ticket, mailbox } => {
            let result = client
                .list_emails(mailbox)
                .await
                .map_err(|e| e.to_string());
            Event::Listed(ticket, mailbox, result)
        }
        Request::Fetch { ticket, id } => {
            let result = client.get_email(id).await.map_err(|e| e.to_string());
            Event::Fetched(ticket, result)
        }
        Request::MarkRead { id } => {
            let result = client
                .update_email(id, &EmailUpdate::mark_read())
                .await
                .map_err(|e| e.to_string());
            Event::MarkedRead(id, result)
        }
        Request::SetArchived {
            ticket,
            id,
            archived,
        } => {
            let result = client
                .update_email(id, &EmailUpdate::archived(archived))
                .await
                .map_err(|e| e.to_string());
            Event::ArchiveUpdated(ticket, archived, result)
        }
        Request::Create { ticket, email } => {
            let outcome = SendOutcome::from_api(client.create_email(&email).await);
            Event::Created(ticket, outcome)
        }
    }
}

/// Answers `request` with a failure when no client could be built.
pub fn unavailable(request: Request, reason: &str) -> Event {
    warn!(?request, "No API client: {reason}");
    let error = reason.to_string();

    match request {
        Request::List { ticket, mailbox } => Event::Listed(ticket, mailbox, Err(error)),
        Request::Fetch { ticket, .. } => Event::Fetched(ticket, Err(error)),
        Request::MarkRead { id } => Event::MarkedRead(id, Err(error)),
        Request::SetArchived {
            ticket, archived, ..
        } => Event::ArchiveUpdated(ticket, archived, Err(error)),
        Request::Create { ticket, .. } => Event::Created(ticket, SendOutcome::Failed(error)),
    }
}
