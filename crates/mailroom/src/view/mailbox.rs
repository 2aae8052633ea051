//! Mailbox listing.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};
use mailroom_core::{EmailRow, MailboxPage};

use crate::message::Message;
use crate::style::widgets::{
    header_style, palette, row_action_button_style, row_button_style, row_style,
    scrollable_style,
};

/// Renders a listing: a heading, then one row per email in server order.
pub fn view_mailbox(page: &MailboxPage) -> Element<'static, Message> {
    let heading = container(
        text(page.heading.clone())
            .size(24)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    )
    .width(Length::Fill)
    .padding([16, 20])
    .style(header_style);

    let body: Element<'static, Message> = if page.rows.is_empty() {
        let label = if page.loading {
            "Loading..."
        } else {
            "No messages"
        };
        container(text(label).size(14).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        }))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    } else {
        let rows: Vec<Element<'static, Message>> = page.rows.iter().map(view_row).collect();
        scrollable(Column::with_children(rows).padding([8, 20]))
            .height(Length::Fill)
            .style(scrollable_style)
            .into()
    };

    column![heading, body].height(Length::Fill).into()
}

/// One row: sender, subject and timestamp, shaded by read state.
///
/// The archive control is a separate button next to the clickable area, so
/// pressing it never opens the email.
fn view_row(row_model: &EmailRow) -> Element<'static, Message> {
    let summary = row![
        text(row_model.sender.clone())
            .size(14)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .width(Length::FillPortion(3)),
        text(row_model.subject.clone())
            .size(14)
            .width(Length::FillPortion(5)),
        text(row_model.timestamp.clone())
            .size(12)
            .width(Length::FillPortion(2)),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let open = button(summary)
        .width(Length::Fill)
        .padding([12, 12])
        .style(row_button_style)
        .on_press(Message::Core(row_model.open_event()));

    let action: Element<'static, Message> = match row_model.action {
        Some(action) => button(text(action.label()).size(12))
            .padding([6, 12])
            .style(row_action_button_style)
            .on_press(Message::Core(action.event()))
            .into(),
        None => Space::new().width(Length::Shrink).into(),
    };

    container(
        row![open, action]
            .spacing(8)
            .padding([0, 8])
            .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(row_style(row_model.shade))
    .into()
}
