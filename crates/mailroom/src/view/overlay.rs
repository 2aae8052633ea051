//! Alert dialog and status notice.

use iced::widget::{button, center, column, container, opaque, row, stack, text};
use iced::{Element, Length};
use mailroom_core::Event;

use crate::message::Message;
use crate::style::widgets::{
    modal_backdrop_style, modal_style, notice_style, primary_button_style, secondary_button_style,
};

/// Lays a blocking alert over `base`.
///
/// The backdrop swallows every click, so nothing underneath reacts until
/// the alert is dismissed.
pub fn view_alert<'a>(base: Element<'a, Message>, alert: &str) -> Element<'a, Message> {
    let dialog = container(
        column![
            text(alert.to_string()).size(15),
            row![
                iced::widget::Space::new().width(Length::Fill),
                button(text("OK").size(14))
                    .padding([8, 24])
                    .style(primary_button_style)
                    .on_press(Message::Core(Event::DismissAlert)),
            ],
        ]
        .spacing(20),
    )
    .width(Length::Fixed(420.0))
    .padding(24)
    .style(modal_style);

    stack![
        base,
        opaque(center(opaque(dialog)).style(modal_backdrop_style)),
    ]
    .into()
}

/// Status strip shown above the content for failures that need no answer.
pub fn view_notice(notice: &str) -> Element<'static, Message> {
    container(
        row![
            text(notice.to_string()).size(13).width(Length::Fill),
            button(text("\u{2715}").size(12))
                .padding([2, 8])
                .style(secondary_button_style)
                .on_press(Message::Core(Event::DismissNotice)),
        ]
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([6, 12])
    .style(notice_style)
    .into()
}
