//! Sidebar with the compose button, mailbox list and theme toggle.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Length};
use mailroom_core::{Event, Mailbox, ThemePreference};

use crate::message::Message;
use crate::style::widgets::{
    nav_button_selected_style, nav_button_style, palette, primary_button_style,
    secondary_button_style, sidebar_style,
};

/// Renders the sidebar. `current` is the mailbox on screen, if any.
pub fn view_sidebar(current: Option<Mailbox>, theme: ThemePreference) -> Element<'static, Message> {
    let title = text("Mailroom")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let compose_btn = button(row![
        text("\u{270F}").size(14),
        text(" Compose").font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
    ])
    .width(Length::Fill)
    .padding([10, 16])
    .style(primary_button_style)
    .on_press(Message::Core(Event::Compose));

    let header = container(text("MAILBOXES").size(11).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    }))
    .padding([12, 8]);

    let mailboxes: Vec<Element<'static, Message>> = Mailbox::ALL
        .iter()
        .map(|&mailbox| view_mailbox_item(mailbox, current == Some(mailbox)))
        .collect();

    let theme_label = match theme {
        ThemePreference::Light => "\u{263E} Dark theme",
        ThemePreference::Dark => "\u{2600} Light theme",
    };
    let theme_btn = button(text(theme_label).size(13))
        .width(Length::Fill)
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    let content = column![
        title,
        Space::new().height(Length::Fixed(16.0)),
        compose_btn,
        header,
        Column::with_children(mailboxes).spacing(2),
        Space::new().height(Length::Fill),
        theme_btn,
    ]
    .padding(16);

    container(content)
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

fn view_mailbox_item(mailbox: Mailbox, is_selected: bool) -> Element<'static, Message> {
    let icon = match mailbox {
        Mailbox::Inbox => "\u{1F4E5}",   // inbox tray
        Mailbox::Sent => "\u{1F4E4}",    // outbox tray
        Mailbox::Archive => "\u{1F4C1}", // folder
    };

    let content = row![text(icon).size(16), text(mailbox.title()).size(14)]
        .spacing(10)
        .align_y(iced::Alignment::Center);

    let style = if is_selected {
        nav_button_selected_style
    } else {
        nav_button_style
    };

    button(content.width(Length::Fill))
        .width(Length::Fill)
        .padding([10, 12])
        .style(style)
        .on_press(Message::Core(Event::Navigate(mailbox)))
        .into()
}
