//! `Mailroom` - Desktop client for a webmail REST API.
//!
//! Built with Rust and the iced GUI framework. The view controller from
//! `mailroom-core` owns all client state; this binary runs its requests
//! against `mailroom-api` and draws its view models.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod dispatch;
mod message;
mod style;
mod view;

use anyhow::Context;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row, text_editor};
use iced::{Element, Length, Subscription, Task};
use mailroom_api::ApiClient;
use mailroom_core::config::SERVER_URL_ENV;
use mailroom_core::{
    AppSettings, Controller, DraftField, Event, Request, Screen, ViewState, render,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{KeyboardAction, Message};
use style::widgets::{palette, surface_style};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mailroom=debug,mailroom_core=debug,mailroom_api=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mailroom");

    iced::application(Mailroom::new, Mailroom::update, Mailroom::view)
        .title("Mailroom")
        .subscription(Mailroom::subscription)
        .run()
        .context("GUI event loop failed")
}

/// Main application state.
struct Mailroom {
    /// The view state machine.
    controller: Controller,
    /// Client for the configured server; `None` until settings are loaded,
    /// or if the configured URL is unusable.
    client: Option<ApiClient>,
    /// Why `client` is missing after settings were loaded.
    client_error: Option<String>,
    /// Requests issued before the client existed.
    pending: Vec<Request>,
    /// Persisted settings.
    settings: AppSettings,
    /// Editor state for the compose body, kept in step with the draft.
    body_editor: text_editor::Content,
}

impl Mailroom {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let (controller, request) = Controller::new();
        let settings = AppSettings::default();
        palette::set_theme(settings.theme);

        let app = Self {
            controller,
            client: None,
            client_error: None,
            pending: vec![request],
            settings,
            body_editor: text_editor::Content::new(),
        };
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Core(event) => {
                let request = self.controller.update(event);
                self.sync_body_editor();
                if let Some(request) = request {
                    return self.perform(request);
                }
            }
            Message::BodyEdited(action) => {
                let is_edit = action.is_edit();
                self.body_editor.perform(action);
                if is_edit {
                    let body = self.body_editor.text();
                    self.controller.update(Event::Edit(DraftField::Body, body));
                    self.sync_body_editor();
                }
            }
            Message::SettingsLoaded(result) => {
                let settings = result.unwrap_or_else(|e| {
                    warn!("Failed to load settings, using defaults: {}", e);
                    AppSettings::default()
                });
                let settings =
                    settings.with_server_url_override(std::env::var(SERVER_URL_ENV).ok());
                palette::set_theme(settings.theme);

                match connect(&settings) {
                    Ok(client) => {
                        info!("Using server {}", client.base_url());
                        self.client = Some(client);
                    }
                    Err(e) => {
                        error!("{:#}", e);
                        self.client_error = Some(format!("{e:#}"));
                    }
                }
                self.settings = settings;

                let pending = std::mem::take(&mut self.pending);
                return Task::batch(pending.into_iter().map(|request| self.perform(request)));
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::ToggleTheme => {
                self.settings.theme = self.settings.theme.toggled();
                palette::set_theme(self.settings.theme);
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
            Message::KeyPressed(action) => {
                if let Some(event) = shortcut_event(action, &self.controller) {
                    return Task::done(Message::Core(event));
                }
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Reloads the body editor when the draft's body changed underneath it:
    /// a fresh or reply draft, or an edit the controller refused.
    fn sync_body_editor(&mut self) {
        if let Some(draft) = self.controller.view().draft()
            && draft.body != self.body_editor.text()
        {
            self.body_editor = text_editor::Content::with_text(&draft.body);
        }
    }

    /// Runs a controller request, or queues it until the client exists.
    fn perform(&mut self, request: Request) -> Task<Message> {
        if let Some(client) = self.client.clone() {
            return Task::perform(dispatch::execute(client, request), Message::Core);
        }
        match &self.client_error {
            Some(reason) => Task::done(Message::Core(dispatch::unavailable(request, reason))),
            None => {
                self.pending.push(request);
                Task::none()
            }
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let main: Element<'_, Message> = match render(self.controller.view()) {
            Screen::Mailbox(page) => view::view_mailbox(&page),
            Screen::Compose(form) => view::view_compose(&form, &self.body_editor),
            Screen::Detail(page) => view::view_detail(&page),
        };

        let mut content = column![];
        if let Some(notice) = self.controller.notice() {
            content = content.push(view::view_notice(notice));
        }
        content = content.push(main);

        let screen: Element<'_, Message> = container(row![
            view::view_sidebar(self.controller.view().mailbox(), self.settings.theme),
            content.width(Length::Fill).height(Length::Fill),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(surface_style)
        .into();

        match self.controller.alert() {
            Some(alert) => view::view_alert(screen, alert),
            None => screen,
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    let action = match key {
        Key::Character(c) if ctrl && c.as_str() == "n" => KeyboardAction::ComposeNew,
        Key::Character(c) if ctrl && c.as_str() == "r" => KeyboardAction::Reply,
        Key::Named(keyboard::key::Named::Enter) if ctrl => KeyboardAction::Send,
        Key::Named(keyboard::key::Named::F5) => KeyboardAction::Refresh,
        Key::Named(keyboard::key::Named::Escape) => KeyboardAction::Cancel,
        _ => return None,
    };
    Some(Message::KeyPressed(action))
}

/// Maps a shortcut onto the controller event it stands for.
fn shortcut_event(action: KeyboardAction, controller: &Controller) -> Option<Event> {
    match action {
        KeyboardAction::ComposeNew => Some(Event::Compose),
        KeyboardAction::Reply => {
            matches!(controller.view(), ViewState::Detail(_)).then_some(Event::Reply)
        }
        KeyboardAction::Send => controller.view().draft().map(|_| Event::Submit),
        KeyboardAction::Refresh => controller.view().mailbox().map(Event::Navigate),
        KeyboardAction::Cancel => {
            if controller.alert().is_some() {
                Some(Event::DismissAlert)
            } else if controller.view().mailbox().is_none() {
                Some(Event::Navigate(mailroom_core::Mailbox::Inbox))
            } else {
                None
            }
        }
    }
}

/// Builds the API client for the configured server.
fn connect(settings: &AppSettings) -> anyhow::Result<ApiClient> {
    settings.validate()?;
    ApiClient::new(&settings.server_url)
        .with_context(|| format!("Invalid server URL {:?}", settings.server_url))
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    AppSettings::load(&AppSettings::default_path())
        .await
        .map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    settings
        .save(&AppSettings::default_path())
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mailroom_core::{Email, EmailId, Mailbox};

    fn email() -> Email {
        Email {
            id: EmailId(1),
            sender: "ann@example.com".into(),
            recipients: vec!["me@example.com".into()],
            subject: "Hello".into(),
            body: "Hi".into(),
            timestamp: "Jan 08 2026, 10:00 AM".into(),
            read: false,
            archived: false,
        }
    }

    #[test]
    fn test_shortcuts_in_mailbox() {
        let (controller, _) = Controller::new();

        assert_eq!(
            shortcut_event(KeyboardAction::ComposeNew, &controller),
            Some(Event::Compose)
        );
        assert_eq!(
            shortcut_event(KeyboardAction::Refresh, &controller),
            Some(Event::Navigate(Mailbox::Inbox))
        );
        assert_eq!(shortcut_event(KeyboardAction::Reply, &controller), None);
        assert_eq!(shortcut_event(KeyboardAction::Send, &controller), None);
        assert_eq!(shortcut_event(KeyboardAction::Cancel, &controller), None);
    }

    #[test]
    fn test_shortcuts_in_detail() {
        let (mut controller, _) = Controller::new();
        let request = controller.update(Event::Open(EmailId(1))).unwrap();
        let Request::Fetch { ticket, .. } = request else {
            unreachable!("open always fetches");
        };
        controller.update(Event::Fetched(ticket, Ok(email())));

        assert_eq!(
            shortcut_event(KeyboardAction::Reply, &controller),
            Some(Event::Reply)
        );
        assert_eq!(
            shortcut_event(KeyboardAction::Cancel, &controller),
            Some(Event::Navigate(Mailbox::Inbox))
        );
    }

    #[test]
    fn test_escape_dismisses_alert_first() {
        let (mut controller, _) = Controller::new();
        controller.update(Event::Compose);
        controller.update(Event::Submit);
        assert!(controller.alert().is_some());

        assert_eq!(
            shortcut_event(KeyboardAction::Cancel, &controller),
            Some(Event::DismissAlert)
        );
        assert_eq!(
            shortcut_event(KeyboardAction::Send, &controller),
            Some(Event::Submit)
        );
    }

    #[test]
    fn test_connect_rejects_blank_url() {
        let settings = AppSettings {
            server_url: String::new(),
            ..AppSettings::default()
        };
        assert!(connect(&settings).is_err());
        assert!(connect(&AppSettings::default()).is_ok());
    }

    fn type_into_body(app: &mut Mailroom, edits: impl IntoIterator<Item = text_editor::Edit>) {
        for edit in edits {
            let _ = app.update(Message::BodyEdited(text_editor::Action::Edit(edit)));
        }
    }

    fn draft_body(app: &Mailroom) -> String {
        app.controller.view().draft().unwrap().body.clone()
    }

    #[test]
    fn test_body_editor_accepts_line_breaks() {
        use text_editor::Edit::{Enter, Insert};

        let (mut app, _) = Mailroom::new();
        let _ = app.update(Message::Core(Event::Compose));
        type_into_body(&mut app, [Insert('h'), Insert('i'), Enter, Insert('!')]);

        assert_eq!(draft_body(&app).trim_end(), "hi\n!");
        assert_eq!(app.body_editor.text(), draft_body(&app));
    }

    #[test]
    fn test_body_editor_loads_reply_quote() {
        let (mut app, _) = Mailroom::new();
        let _ = app.update(Message::Core(Event::Open(EmailId(1))));
        let ticket = app.controller.ticket();
        let mut original = email();
        original.body = "line1\nline2".into();
        let _ = app.update(Message::Core(Event::Fetched(ticket, Ok(original))));
        let _ = app.update(Message::Core(Event::Reply));

        let body = draft_body(&app);
        assert!(body.contains("line1\nline2"));
        assert_eq!(app.body_editor.text().trim_end(), body.trim_end());

        // A new compose starts from an empty editor again.
        let _ = app.update(Message::Core(Event::Compose));
        assert!(app.body_editor.text().trim().is_empty());
    }

    #[test]
    fn test_body_editor_follows_refused_edit() {
        let (mut app, _) = Mailroom::new();
        let _ = app.update(Message::Core(Event::Compose));
        let _ = app.update(Message::Core(Event::Submit));
        assert!(app.controller.alert().is_some());

        type_into_body(&mut app, [text_editor::Edit::Insert('x')]);
        assert!(draft_body(&app).is_empty());
        assert!(app.body_editor.text().trim().is_empty());
    }
}
