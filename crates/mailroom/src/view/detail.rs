//! Opened email.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};
use mailroom_core::DetailPage;

use crate::message::Message;
use crate::style::widgets::{card_style, palette, primary_button_style, scrollable_style};

/// Renders the detail view: header fields, the reply button, then the body.
pub fn view_detail(page: &DetailPage) -> Element<'static, Message> {
    let subject = text(page.subject.clone())
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let header = column![
        subject,
        header_line("From:", &page.sender),
        header_line("To:", &page.recipients),
        header_line("Timestamp:", &page.timestamp),
    ]
    .spacing(6);

    let reply_btn = button(text("Reply").size(14))
        .padding([8, 18])
        .style(primary_button_style)
        .on_press(Message::Core(DetailPage::reply_event()));

    let body = scrollable(text(page.body.clone()).size(14).width(Length::Fill))
        .height(Length::Fill)
        .style(scrollable_style);

    let card = container(
        column![
            header,
            Space::new().height(Length::Fixed(8.0)),
            reply_btn,
            Space::new().height(Length::Fixed(8.0)),
            body,
        ]
        .spacing(12)
        .padding(20),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(card_style);

    container(card).padding(20).into()
}

fn header_line(label: &str, value: &str) -> Element<'static, Message> {
    let p = palette::current();

    row![
        text(label.to_string())
            .size(13)
            .color(p.text_secondary)
            .width(Length::Fixed(90.0)),
        text(value.to_string()).size(13).color(p.text_primary),
    ]
    .spacing(8)
    .into()
}
