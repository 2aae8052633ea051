//! View models built from the controller's state.
//!
//! Rendering is a pure function of [`ViewState`]: the result names exactly
//! one screen, so two views can never be visible together. Every element
//! that reacts to input carries the [`Event`] it emits, which is what the
//! widget layer wires to its buttons.

use mailroom_api::{Email, EmailId, Mailbox};

use crate::controller::{Event, ViewState};
use crate::draft::{Draft, DraftField};

/// The one screen to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Mailbox listing.
    Mailbox(MailboxPage),
    /// Compose form.
    Compose(ComposeForm),
    /// Opened email.
    Detail(DetailPage),
}

/// Background of a listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShade {
    /// Already opened: light gray.
    Read,
    /// Not opened yet: white.
    Unread,
}

impl RowShade {
    /// Background colour as 8-bit RGB.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Read => [211, 211, 211],
            Self::Unread => [255, 255, 255],
        }
    }
}

/// Per-row archive control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Move to the archive (inbox rows).
    Archive(EmailId),
    /// Move back to the inbox (archive rows).
    Unarchive(EmailId),
}

impl RowAction {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Archive(_) => "Archive",
            Self::Unarchive(_) => "Unarchive",
        }
    }

    /// Event emitted when pressed.
    #[must_use]
    pub const fn event(self) -> Event {
        match self {
            Self::Archive(id) => Event::SetArchived(id, true),
            Self::Unarchive(id) => Event::SetArchived(id, false),
        }
    }
}

/// One line of a mailbox listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRow {
    /// Email shown on this row.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Server timestamp.
    pub timestamp: String,
    /// Background.
    pub shade: RowShade,
    /// Archive control, absent for sent mail.
    pub action: Option<RowAction>,
}

impl EmailRow {
    /// Event emitted when the row itself is clicked.
    #[must_use]
    pub const fn open_event(&self) -> Event {
        Event::Open(self.id)
    }
}

/// Mailbox listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxPage {
    /// Mailbox listed.
    pub mailbox: Mailbox,
    /// Capitalised mailbox name.
    pub heading: String,
    /// Rows in server order.
    pub rows: Vec<EmailRow>,
    /// Whether rows are still on their way.
    pub loading: bool,
}

/// Compose screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeForm {
    /// Recipients field.
    pub recipients: String,
    /// Subject field.
    pub subject: String,
    /// Body field.
    pub body: String,
    /// Whether the send button is disabled.
    pub sending: bool,
}

impl ComposeForm {
    /// Event emitted when a field is edited.
    #[must_use]
    pub fn edit_event(field: DraftField, value: String) -> Event {
        Event::Edit(field, value)
    }

    /// Event emitted by the send button.
    #[must_use]
    pub const fn submit_event() -> Event {
        Event::Submit
    }
}

/// Opened email screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    /// Email shown.
    pub id: EmailId,
    /// Sender address.
    pub sender: String,
    /// Recipients joined with `, `.
    pub recipients: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// Server timestamp.
    pub timestamp: String,
}

impl DetailPage {
    /// Event emitted by the reply button.
    #[must_use]
    pub const fn reply_event() -> Event {
        Event::Reply
    }
}

/// Builds the screen for the current view.
#[must_use]
pub fn render(view: &ViewState) -> Screen {
    match view {
        ViewState::Mailbox {
            mailbox,
            emails,
            loading,
        } => Screen::Mailbox(render_mailbox(*mailbox, emails, *loading)),
        ViewState::Compose(draft) => Screen::Compose(render_compose(draft)),
        ViewState::Detail(email) => Screen::Detail(render_detail(email)),
    }
}

/// Builds a mailbox listing.
#[must_use]
pub fn render_mailbox(mailbox: Mailbox, emails: &[Email], loading: bool) -> MailboxPage {
    let rows = emails
        .iter()
        .map(|email| EmailRow {
            id: email.id,
            sender: email.sender.clone(),
            subject: email.subject.clone(),
            timestamp: email.timestamp.clone(),
            shade: if email.read {
                RowShade::Read
            } else {
                RowShade::Unread
            },
            action: match mailbox {
                Mailbox::Inbox => Some(RowAction::Archive(email.id)),
                Mailbox::Archive => Some(RowAction::Unarchive(email.id)),
                Mailbox::Sent => None,
            },
        })
        .collect();

    MailboxPage {
        mailbox,
        heading: mailbox.title(),
        rows,
        loading,
    }
}

/// Builds the compose form.
#[must_use]
pub fn render_compose(draft: &Draft) -> ComposeForm {
    ComposeForm {
        recipients: draft.recipients.clone(),
        subject: draft.subject.clone(),
        body: draft.body.clone(),
        sending: draft.sending,
    }
}

/// Builds the detail page.
#[must_use]
pub fn render_detail(email: &Email) -> DetailPage {
    DetailPage {
        id: email.id,
        sender: email.sender.clone(),
        recipients: email.recipients.join(", "),
        subject: email.subject.clone(),
        body: email.body.clone(),
        timestamp: email.timestamp.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn email(id: u64, read: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: "ann@example.com".into(),
            recipients: vec!["me@example.com".into(), "bob@example.com".into()],
            subject: "Hello".into(),
            body: "Body".into(),
            timestamp: "Jan 08 2026, 10:00 AM".into(),
            read,
            archived: false,
        }
    }

    fn labels(page: &MailboxPage) -> Vec<Option<&'static str>> {
        page.rows
            .iter()
            .map(|row| row.action.map(RowAction::label))
            .collect()
    }

    #[test]
    fn test_inbox_rows() {
        let page = render_mailbox(Mailbox::Inbox, &[email(1, true), email(2, false)], false);

        assert_eq!(page.heading, "Inbox");
        let read = page.rows.iter().filter(|r| r.shade == RowShade::Read).count();
        let unread = page.rows.iter().filter(|r| r.shade == RowShade::Unread).count();
        assert_eq!((read, unread), (1, 1));
        assert_eq!(labels(&page), [Some("Archive"), Some("Archive")]);
        assert_eq!(page.rows[0].shade.rgb(), [211, 211, 211]);
        assert_eq!(page.rows[1].shade.rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_archive_rows_only_unarchive() {
        let page = render_mailbox(Mailbox::Archive, &[email(1, true), email(2, false)], false);

        assert_eq!(page.heading, "Archive");
        assert_eq!(labels(&page), [Some("Unarchive"), Some("Unarchive")]);
        assert_eq!(
            page.rows[1].action.map(RowAction::event),
            Some(Event::SetArchived(EmailId(2), false))
        );
    }

    #[test]
    fn test_sent_rows_have_no_action() {
        let page = render_mailbox(Mailbox::Sent, &[email(1, true), email(2, false)], false);
        assert_eq!(page.heading, "Sent");
        assert_eq!(labels(&page), [None, None]);
    }

    #[test]
    fn test_rows_keep_server_order_and_events() {
        let page = render_mailbox(Mailbox::Inbox, &[email(5, false), email(3, false)], false);
        let ids: Vec<EmailId> = page.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, [EmailId(5), EmailId(3)]);
        assert_eq!(page.rows[0].open_event(), Event::Open(EmailId(5)));
        assert_eq!(
            page.rows[0].action.map(RowAction::event),
            Some(Event::SetArchived(EmailId(5), true))
        );
    }

    #[test]
    fn test_render_picks_one_screen() {
        let compose = render(&ViewState::Compose(Draft::new()));
        let Screen::Compose(form) = compose else {
            panic!("expected compose screen");
        };
        assert!(form.recipients.is_empty() && form.subject.is_empty() && form.body.is_empty());

        let detail = render(&ViewState::Detail(email(1, true)));
        let Screen::Detail(page) = detail else {
            panic!("expected detail screen");
        };
        assert_eq!(page.recipients, "me@example.com, bob@example.com");
    }
}
