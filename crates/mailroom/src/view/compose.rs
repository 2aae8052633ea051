//! Compose view.

use iced::widget::{
    Space, button, column, container, row, scrollable, text, text_editor, text_input,
};
use iced::{Element, Length};
use mailroom_core::{ComposeForm, DraftField};

use crate::message::Message;
use crate::style::widgets::{field_input_style, palette, primary_button_style, surface_style};

/// Renders the compose form.
///
/// `body` mirrors `form.body`; it holds the cursor and selection the
/// multi-line editor needs between frames.
pub fn view_compose<'a>(
    form: &ComposeForm,
    body: &'a text_editor::Content,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("New Email").size(28).color(p.text_primary);

    let to_row = create_field_row(
        "To:",
        &form.recipients,
        "alice@example.com, bob@example.com",
        DraftField::Recipients,
    );
    let subject_row = create_field_row("Subject:", &form.subject, "Subject", DraftField::Subject);

    let body_label = text("Body:")
        .size(14)
        .color(p.text_secondary)
        .width(Length::Fixed(80.0));
    let body_input = text_editor(body)
        .placeholder("Write your message here...")
        .on_action(Message::BodyEdited)
        .padding(10)
        .size(14)
        .height(Length::Fixed(260.0));
    let body_row = row![body_label, body_input]
        .spacing(12)
        .align_y(iced::Alignment::Start);

    // Disabled while the create request is in flight
    let send_btn = if form.sending {
        button(text("Sending...").size(14))
            .padding([10, 20])
            .style(primary_button_style)
    } else {
        button(text("Send").size(14))
            .padding([10, 20])
            .style(primary_button_style)
            .on_press(Message::Core(ComposeForm::submit_event()))
    };

    let content = column![
        title,
        Space::new().height(Length::Fixed(20.0)),
        to_row,
        subject_row,
        body_row,
        Space::new().height(Length::Fixed(20.0)),
        send_btn,
    ]
    .spacing(12)
    .padding(24)
    .width(Length::Fill);

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(surface_style)
        .into()
}

/// Creates a labeled input field row.
fn create_field_row(
    label: &str,
    value: &str,
    placeholder: &str,
    field: DraftField,
) -> Element<'static, Message> {
    let p = palette::current();
    let label_text = text(label.to_string())
        .size(14)
        .color(p.text_secondary)
        .width(Length::Fixed(80.0));

    let input = text_input(placeholder, value)
        .on_input(move |s| Message::Core(ComposeForm::edit_event(field, s)))
        .padding(10)
        .size(14)
        .width(Length::Fill)
        .style(field_input_style);

    row![label_text, input]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
}
