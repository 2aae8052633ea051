//! View controller.
//!
//! The controller owns the only piece of client state: which view is shown
//! and what it contains. User input and request results both arrive as
//! [`Event`]s; [`Controller::update`] applies them and hands back at most one
//! [`Request`] for the caller to run against the API.
//!
//! Every navigation intent takes a fresh [`Ticket`]. Requests carry the
//! ticket that spawned them and their results are only applied while that
//! ticket is still current, so a slow response can never overwrite a view
//! the user has already left.

use mailroom_api::{CreateResponse, Email, EmailId, Mailbox, NewEmail};
use tracing::{debug, info, warn};

use crate::draft::{Draft, DraftField};

/// Shown when sending failed without a reason from the server.
const SEND_FAILED: &str = "Something went wrong.";

/// Tag identifying the navigation intent a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// The view currently shown. Exactly one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Listing of one mailbox.
    Mailbox {
        /// Which mailbox.
        mailbox: Mailbox,
        /// Emails in server order.
        emails: Vec<Email>,
        /// Whether the listing request is still in flight.
        loading: bool,
    },
    /// Compose form with its draft.
    Compose(Draft),
    /// A single opened email.
    Detail(Email),
}

impl ViewState {
    /// Returns the mailbox being listed, if any.
    #[must_use]
    pub const fn mailbox(&self) -> Option<Mailbox> {
        match self {
            Self::Mailbox { mailbox, .. } => Some(*mailbox),
            _ => None,
        }
    }

    /// Returns the draft, if composing.
    #[must_use]
    pub const fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Compose(draft) => Some(draft),
            _ => None,
        }
    }
}

/// What came of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The server stored the email.
    Sent,
    /// The server refused it and said why.
    Rejected(String),
    /// No usable answer (transport or parse failure).
    Failed(String),
}

impl SendOutcome {
    /// Classifies the result of [`mailroom_api::ApiClient::create_email`].
    ///
    /// A server that answered with a reason rejected the email; anything
    /// else that went wrong is a failure with no reason worth showing.
    #[must_use]
    pub fn from_api(result: mailroom_api::Result<CreateResponse>) -> Self {
        match result {
            Ok(response) => response
                .error()
                .map_or(Self::Sent, |reason| Self::Rejected(reason.to_string())),
            Err(e) if e.is_transport() => Self::Failed(e.to_string()),
            Err(mailroom_api::Error::Server { message, .. }) => Self::Rejected(message),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Input to the controller: user actions and request results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User actions
    /// Show a mailbox.
    Navigate(Mailbox),
    /// Open an empty compose form.
    Compose,
    /// Reply to the email being shown.
    Reply,
    /// A compose field changed.
    Edit(DraftField, String),
    /// Send the draft.
    Submit,
    /// Open an email from the listing.
    Open(EmailId),
    /// Move an email into (`true`) or out of (`false`) the archive.
    SetArchived(EmailId, bool),
    /// Close the blocking alert.
    DismissAlert,
    /// Clear the status notice.
    DismissNotice,

    // Request results
    /// Mailbox listing finished.
    Listed(Ticket, Mailbox, Result<Vec<Email>, String>),
    /// Full email fetched.
    Fetched(Ticket, Result<Email, String>),
    /// Read flag update finished.
    MarkedRead(EmailId, Result<(), String>),
    /// Archive flag update finished.
    ArchiveUpdated(Ticket, bool, Result<(), String>),
    /// Create request finished.
    Created(Ticket, SendOutcome),
}

impl Event {
    /// Returns true for events that come from user input.
    ///
    /// These are ignored while a blocking alert is open.
    #[must_use]
    pub const fn is_user_action(&self) -> bool {
        matches!(
            self,
            Self::Navigate(_)
                | Self::Compose
                | Self::Reply
                | Self::Edit(..)
                | Self::Submit
                | Self::Open(_)
                | Self::SetArchived(..)
                | Self::DismissNotice
        )
    }
}

/// A network call the controller wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// List a mailbox; answer with [`Event::Listed`].
    List {
        /// Ticket to echo back.
        ticket: Ticket,
        /// Mailbox to list.
        mailbox: Mailbox,
    },
    /// Fetch one email; answer with [`Event::Fetched`].
    Fetch {
        /// Ticket to echo back.
        ticket: Ticket,
        /// Email to fetch.
        id: EmailId,
    },
    /// Mark an email read; answer with [`Event::MarkedRead`].
    MarkRead {
        /// Email to mark.
        id: EmailId,
    },
    /// Change the archived flag; answer with [`Event::ArchiveUpdated`].
    SetArchived {
        /// Ticket to echo back.
        ticket: Ticket,
        /// Email to update.
        id: EmailId,
        /// New archived flag.
        archived: bool,
    },
    /// Send a new email; answer with [`Event::Created`].
    Create {
        /// Ticket to echo back.
        ticket: Ticket,
        /// Request body.
        email: NewEmail,
    },
}

/// The client's state machine.
#[derive(Debug)]
pub struct Controller {
    /// Current view.
    view: ViewState,
    /// Ticket of the latest navigation intent.
    ticket: Ticket,
    /// Blocking message; input is ignored until it is dismissed.
    alert: Option<String>,
    /// Non-blocking status message.
    notice: Option<String>,
}

impl Controller {
    /// Creates a controller showing the inbox, with the request that fills it.
    #[must_use]
    pub fn new() -> (Self, Request) {
        let mut controller = Self {
            view: ViewState::Mailbox {
                mailbox: Mailbox::Inbox,
                emails: Vec::new(),
                loading: true,
            },
            ticket: Ticket::default(),
            alert: None,
            notice: None,
        };
        let request = controller.show_mailbox(Mailbox::Inbox);
        (controller, request)
    }

    /// Returns the current view.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the ticket of the latest navigation intent.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Returns the blocking alert, if one is open.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns the status notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies an event, returning the request to run next, if any.
    pub fn update(&mut self, event: Event) -> Option<Request> {
        if self.alert.is_some() && event.is_user_action() {
            debug!(?event, "Ignoring input while alert is open");
            return None;
        }

        match event {
            Event::Navigate(mailbox) => Some(self.show_mailbox(mailbox)),
            Event::Compose => {
                self.begin();
                self.view = ViewState::Compose(Draft::new());
                None
            }
            Event::Reply => {
                if let ViewState::Detail(email) = &self.view {
                    let draft = Draft::reply(email);
                    self.begin();
                    self.view = ViewState::Compose(draft);
                }
                None
            }
            Event::Edit(field, value) => {
                if let ViewState::Compose(draft) = &mut self.view {
                    draft.set(field, value);
                }
                None
            }
            Event::Submit => self.submit(),
            Event::Open(id) => {
                let ticket = self.begin();
                Some(Request::Fetch { ticket, id })
            }
            Event::SetArchived(id, archived) => {
                let ticket = self.begin();
                Some(Request::SetArchived {
                    ticket,
                    id,
                    archived,
                })
            }
            Event::DismissAlert => {
                self.alert = None;
                None
            }
            Event::DismissNotice => {
                self.notice = None;
                None
            }
            Event::Listed(ticket, mailbox, result) => {
                self.on_listed(ticket, mailbox, result);
                None
            }
            Event::Fetched(ticket, result) => self.on_fetched(ticket, result),
            Event::MarkedRead(id, result) => {
                if let Err(e) = result {
                    warn!(%id, error = %e, "Failed to mark message as read");
                    self.notice = Some(format!("Could not mark message as read: {e}"));
                }
                None
            }
            Event::ArchiveUpdated(ticket, archived, result) => {
                self.on_archive_updated(ticket, archived, result)
            }
            Event::Created(ticket, outcome) => self.on_created(ticket, outcome),
        }
    }

    /// Starts a new navigation intent, superseding every pending one.
    fn begin(&mut self) -> Ticket {
        self.ticket = self.ticket.next();
        self.ticket
    }

    /// Returns true if `ticket` belongs to the latest intent.
    fn is_current(&self, ticket: Ticket, what: &str) -> bool {
        let current = ticket == self.ticket;
        if !current {
            debug!(?ticket, latest = ?self.ticket, "Discarding stale {what}");
        }
        current
    }

    fn show_mailbox(&mut self, mailbox: Mailbox) -> Request {
        let ticket = self.begin();
        info!(%mailbox, "Showing mailbox");
        self.view = ViewState::Mailbox {
            mailbox,
            emails: Vec::new(),
            loading: true,
        };
        Request::List { ticket, mailbox }
    }

    fn submit(&mut self) -> Option<Request> {
        let ViewState::Compose(draft) = &mut self.view else {
            return None;
        };
        if draft.sending {
            return None;
        }

        if let Err(e) = draft.validate() {
            debug!(field = e.field(), "Draft rejected");
            self.alert = Some(e.to_string());
            return None;
        }

        draft.sending = true;
        let email = draft.to_new_email();
        let ticket = self.begin();
        info!(recipients = %email.recipients, "Sending email");
        Some(Request::Create { ticket, email })
    }

    fn on_listed(&mut self, ticket: Ticket, mailbox: Mailbox, result: Result<Vec<Email>, String>) {
        if !self.is_current(ticket, "mailbox listing") {
            return;
        }
        let ViewState::Mailbox {
            mailbox: shown,
            emails,
            loading,
        } = &mut self.view
        else {
            return;
        };
        if *shown != mailbox {
            return;
        }

        *loading = false;
        match result {
            Ok(list) => {
                info!(%mailbox, count = list.len(), "Mailbox loaded");
                *emails = list;
            }
            Err(e) => {
                warn!(%mailbox, error = %e, "Failed to load mailbox");
                self.alert = Some(format!("Could not load {}: {e}", mailbox.title()));
            }
        }
    }

    fn on_fetched(&mut self, ticket: Ticket, result: Result<Email, String>) -> Option<Request> {
        if !self.is_current(ticket, "message") {
            return None;
        }

        match result {
            Ok(mut email) => {
                let id = email.id;
                info!(%id, "Opened message");
                email.read = true;
                self.view = ViewState::Detail(email);
                Some(Request::MarkRead { id })
            }
            Err(e) => {
                warn!(error = %e, "Failed to open message");
                self.alert = Some(format!("Could not open message: {e}"));
                None
            }
        }
    }

    fn on_archive_updated(
        &mut self,
        ticket: Ticket,
        archived: bool,
        result: Result<(), String>,
    ) -> Option<Request> {
        if let Err(e) = result {
            let verb = if archived { "archive" } else { "unarchive" };
            warn!(error = %e, "Failed to {verb} message");
            self.alert = Some(format!("Could not {verb} message: {e}"));
            return None;
        }

        if !self.is_current(ticket, "archive update") {
            return None;
        }
        let target = if archived {
            Mailbox::Inbox
        } else {
            Mailbox::Archive
        };
        Some(self.show_mailbox(target))
    }

    fn on_created(&mut self, ticket: Ticket, outcome: SendOutcome) -> Option<Request> {
        match outcome {
            SendOutcome::Sent => info!("Email sent"),
            SendOutcome::Rejected(reason) => {
                warn!(%reason, "Server rejected email");
                self.alert = Some(reason);
            }
            SendOutcome::Failed(detail) => {
                warn!(%detail, "Sending failed");
                self.alert = Some(SEND_FAILED.to_string());
            }
        }

        if !self.is_current(ticket, "send result") {
            return None;
        }
        Some(self.show_mailbox(Mailbox::Sent))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn email(id: u64, read: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: format!("sender{id}@example.com"),
            recipients: vec!["me@example.com".into()],
            subject: format!("Subject {id}"),
            body: "Body".into(),
            timestamp: "Jan 08 2026, 10:00 AM".into(),
            read,
            archived: false,
        }
    }

    fn list_ticket(request: Option<Request>) -> (Ticket, Mailbox) {
        match request {
            Some(Request::List { ticket, mailbox }) => (ticket, mailbox),
            other => panic!("expected list request, got {other:?}"),
        }
    }

    /// Controller sitting on a loaded inbox.
    fn loaded_inbox() -> Controller {
        let (mut controller, request) = Controller::new();
        let (ticket, mailbox) = list_ticket(Some(request));
        controller.update(Event::Listed(
            ticket,
            mailbox,
            Ok(vec![email(1, false), email(2, true)]),
        ));
        controller
    }

    fn compose_with(controller: &mut Controller, recipients: &str, subject: &str, body: &str) {
        controller.update(Event::Compose);
        controller.update(Event::Edit(DraftField::Recipients, recipients.into()));
        controller.update(Event::Edit(DraftField::Subject, subject.into()));
        controller.update(Event::Edit(DraftField::Body, body.into()));
    }

    #[test]
    fn test_starts_loading_inbox() {
        let (controller, request) = Controller::new();
        assert_eq!(
            request,
            Request::List {
                ticket: controller.ticket(),
                mailbox: Mailbox::Inbox
            }
        );
        assert_eq!(
            controller.view(),
            &ViewState::Mailbox {
                mailbox: Mailbox::Inbox,
                emails: Vec::new(),
                loading: true
            }
        );
    }

    #[test]
    fn test_listing_fills_mailbox() {
        let controller = loaded_inbox();
        let ViewState::Mailbox { emails, loading, .. } = controller.view() else {
            panic!("expected mailbox view");
        };
        assert!(!loading);
        assert_eq!(emails.len(), 2);
    }

    #[test]
    fn test_stale_listing_is_discarded() {
        let (mut controller, request) = Controller::new();
        let (inbox_ticket, _) = list_ticket(Some(request));
        let sent = controller.update(Event::Navigate(Mailbox::Sent));
        let (sent_ticket, _) = list_ticket(sent);

        // Inbox answers after the user moved on to sent.
        controller.update(Event::Listed(
            inbox_ticket,
            Mailbox::Inbox,
            Ok(vec![email(1, false)]),
        ));
        assert_eq!(
            controller.view(),
            &ViewState::Mailbox {
                mailbox: Mailbox::Sent,
                emails: Vec::new(),
                loading: true
            }
        );

        controller.update(Event::Listed(sent_ticket, Mailbox::Sent, Ok(vec![email(9, true)])));
        let ViewState::Mailbox { emails, .. } = controller.view() else {
            panic!("expected mailbox view");
        };
        assert_eq!(emails[0].id, EmailId(9));
    }

    #[test]
    fn test_listing_failure_alerts() {
        let (mut controller, request) = Controller::new();
        let (ticket, mailbox) = list_ticket(Some(request));
        controller.update(Event::Listed(ticket, mailbox, Err("connection refused".into())));

        assert_eq!(
            controller.alert(),
            Some("Could not load Inbox: connection refused")
        );
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Inbox));
    }

    #[test]
    fn test_compose_twice_is_empty() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com", "S", "B");
        controller.update(Event::Compose);

        assert_eq!(controller.view().draft(), Some(&Draft::new()));
    }

    #[test]
    fn test_navigation_discards_draft() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com", "S", "B");
        controller.update(Event::Navigate(Mailbox::Inbox));
        controller.update(Event::Compose);

        assert_eq!(controller.view().draft(), Some(&Draft::new()));
    }

    #[test]
    fn test_invalid_draft_never_reaches_network() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com, bad", "S", "B");

        assert_eq!(controller.update(Event::Submit), None);
        assert!(controller.view().draft().is_some());
        assert!(controller.alert().is_some());
    }

    #[test]
    fn test_alert_blocks_input_until_dismissed() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "bad", "S", "B");
        controller.update(Event::Submit);

        assert_eq!(controller.update(Event::Navigate(Mailbox::Sent)), None);
        assert!(controller.view().draft().is_some());

        controller.update(Event::DismissAlert);
        assert!(controller.alert().is_none());
        assert!(controller.update(Event::Navigate(Mailbox::Sent)).is_some());
    }

    #[test]
    fn test_submit_sends_raw_recipients() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com,  c@d.org", "S", "B");

        let request = controller.update(Event::Submit);
        assert_eq!(
            request,
            Some(Request::Create {
                ticket: controller.ticket(),
                email: NewEmail::new("a@b.com,  c@d.org", "S", "B"),
            })
        );
        assert!(controller.view().draft().is_some_and(|d| d.sending));

        // A second press while sending does nothing.
        assert_eq!(controller.update(Event::Submit), None);
    }

    #[test]
    fn test_sent_goes_to_sent_mailbox() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com", "S", "B");
        controller.update(Event::Submit);

        let request = controller.update(Event::Created(controller.ticket(), SendOutcome::Sent));
        let (_, mailbox) = list_ticket(request);
        assert_eq!(mailbox, Mailbox::Sent);
        assert!(controller.alert().is_none());
    }

    #[test]
    fn test_rejected_send_alerts_then_goes_to_sent() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "x@y.z", "S", "B");
        controller.update(Event::Submit);

        let request = controller.update(Event::Created(
            controller.ticket(),
            SendOutcome::Rejected("User with email x@y.z does not exist.".into()),
        ));
        assert_eq!(
            controller.alert(),
            Some("User with email x@y.z does not exist.")
        );
        assert_eq!(list_ticket(request).1, Mailbox::Sent);
    }

    #[test]
    fn test_failed_send_shows_generic_alert() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com", "S", "B");
        controller.update(Event::Submit);

        let request = controller.update(Event::Created(
            controller.ticket(),
            SendOutcome::Failed("HTTP error: connection reset".into()),
        ));
        assert_eq!(controller.alert(), Some(SEND_FAILED));
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Sent));
        assert!(request.is_some());
    }

    #[test]
    fn test_open_fetches_then_marks_read() {
        let mut controller = loaded_inbox();
        let request = controller.update(Event::Open(EmailId(1)));
        let ticket = controller.ticket();
        assert_eq!(
            request,
            Some(Request::Fetch {
                ticket,
                id: EmailId(1)
            })
        );

        // Still showing the list until the email arrives.
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Inbox));

        let request = controller.update(Event::Fetched(ticket, Ok(email(1, false))));
        assert_eq!(request, Some(Request::MarkRead { id: EmailId(1) }));
        let ViewState::Detail(shown) = controller.view() else {
            panic!("expected detail view");
        };
        assert!(shown.read);
    }

    #[test]
    fn test_stale_fetch_does_not_open() {
        let mut controller = loaded_inbox();
        controller.update(Event::Open(EmailId(1)));
        let stale = controller.ticket();
        controller.update(Event::Navigate(Mailbox::Archive));

        let request = controller.update(Event::Fetched(stale, Ok(email(1, false))));
        assert_eq!(request, None);
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Archive));
    }

    #[test]
    fn test_mark_read_failure_sets_notice() {
        let mut controller = loaded_inbox();
        controller.update(Event::MarkedRead(EmailId(1), Err("timeout".into())));

        assert_eq!(
            controller.notice(),
            Some("Could not mark message as read: timeout")
        );
        assert!(controller.alert().is_none());

        controller.update(Event::DismissNotice);
        assert!(controller.notice().is_none());
    }

    #[test]
    fn test_reply_prefills_compose() {
        let mut controller = loaded_inbox();
        controller.update(Event::Open(EmailId(2)));
        controller.update(Event::Fetched(controller.ticket(), Ok(email(2, true))));
        controller.update(Event::Reply);

        let draft = controller.view().draft().unwrap();
        assert_eq!(draft.recipients, "sender2@example.com");
        assert_eq!(draft.subject, "Re: Subject 2");
    }

    #[test]
    fn test_reply_outside_detail_is_ignored() {
        let mut controller = loaded_inbox();
        controller.update(Event::Reply);
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Inbox));
    }

    #[test]
    fn test_archive_returns_to_inbox() {
        let mut controller = loaded_inbox();
        let request = controller.update(Event::SetArchived(EmailId(1), true));
        let ticket = controller.ticket();
        assert_eq!(
            request,
            Some(Request::SetArchived {
                ticket,
                id: EmailId(1),
                archived: true
            })
        );

        let request = controller.update(Event::ArchiveUpdated(ticket, true, Ok(())));
        assert_eq!(list_ticket(request).1, Mailbox::Inbox);
    }

    #[test]
    fn test_unarchive_goes_to_archive() {
        let mut controller = loaded_inbox();
        controller.update(Event::Navigate(Mailbox::Archive));
        controller.update(Event::SetArchived(EmailId(4), false));

        let request =
            controller.update(Event::ArchiveUpdated(controller.ticket(), false, Ok(())));
        assert_eq!(list_ticket(request).1, Mailbox::Archive);
    }

    #[test]
    fn test_archive_failure_is_surfaced() {
        let mut controller = loaded_inbox();
        let before = controller.view().clone();
        controller.update(Event::SetArchived(EmailId(1), true));

        let request = controller.update(Event::ArchiveUpdated(
            controller.ticket(),
            true,
            Err("Server error (404): Email not found.".into()),
        ));
        assert_eq!(request, None);
        assert_eq!(controller.view(), &before);
        assert_eq!(
            controller.alert(),
            Some("Could not archive message: Server error (404): Email not found.")
        );
    }

    #[test]
    fn test_send_outcome_from_api() {
        let ok = CreateResponse {
            message: Some("Email sent successfully.".into()),
            ..CreateResponse::default()
        };
        assert_eq!(SendOutcome::from_api(Ok(ok)), SendOutcome::Sent);

        let rejected = CreateResponse {
            error: Some("At least one recipient required.".into()),
            ..CreateResponse::default()
        };
        assert_eq!(
            SendOutcome::from_api(Ok(rejected)),
            SendOutcome::Rejected("At least one recipient required.".into())
        );

        let refused = SendOutcome::from_api(Err(mailroom_api::Error::server(500, "boom")));
        assert_eq!(refused, SendOutcome::Rejected("boom".into()));

        let garbled: mailroom_api::Error = serde_json::from_str::<CreateResponse>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(
            SendOutcome::from_api(Err(garbled)),
            SendOutcome::Failed(_)
        ));

        let bad_url = mailroom_api::ApiClient::new("not a url").unwrap_err();
        assert!(matches!(
            SendOutcome::from_api(Err(bad_url)),
            SendOutcome::Failed(_)
        ));
    }

    #[test]
    fn test_failed_fetch_alerts_and_stays() {
        let mut controller = loaded_inbox();
        let before = controller.view().clone();
        controller.update(Event::Open(EmailId(1)));

        let request = controller.update(Event::Fetched(controller.ticket(), Err("404".into())));
        assert_eq!(request, None);
        assert_eq!(controller.view(), &before);
        assert_eq!(controller.alert(), Some("Could not open message: 404"));
    }

    #[test]
    fn test_stale_send_result_alerts_without_switching() {
        let mut controller = loaded_inbox();
        compose_with(&mut controller, "a@b.com", "S", "B");
        controller.update(Event::Submit);
        let stale = controller.ticket();
        controller.update(Event::Navigate(Mailbox::Archive));

        let request = controller.update(Event::Created(stale, SendOutcome::Sent));
        assert_eq!(request, None);
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Archive));
        assert!(controller.alert().is_none());

        let request = controller.update(Event::Created(
            stale,
            SendOutcome::Failed("HTTP error: connection reset".into()),
        ));
        assert_eq!(request, None);
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Archive));
        assert_eq!(controller.alert(), Some(SEND_FAILED));
    }

    #[test]
    fn test_stale_archive_update_keeps_view() {
        let mut controller = loaded_inbox();
        controller.update(Event::SetArchived(EmailId(1), true));
        let stale = controller.ticket();
        controller.update(Event::Navigate(Mailbox::Sent));
        let ticket = controller.ticket();

        let request = controller.update(Event::ArchiveUpdated(stale, true, Ok(())));
        assert_eq!(request, None);
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Sent));
        assert_eq!(controller.ticket(), ticket);
        assert!(controller.alert().is_none());

        let request = controller.update(Event::ArchiveUpdated(stale, true, Err("timeout".into())));
        assert_eq!(request, None);
        assert_eq!(controller.view().mailbox(), Some(Mailbox::Sent));
        assert_eq!(controller.alert(), Some("Could not archive message: timeout"));
    }
}
