//! Text input and scrollable style functions.

use iced::widget::{container, scrollable, text_input};
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Compose field style.
pub fn field_input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface_elevated),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.selected,
    };

    let border_color = match status {
        text_input::Status::Active => return base,
        text_input::Status::Hovered => p.border_medium,
        text_input::Status::Focused { .. } => p.primary,
        text_input::Status::Disabled => {
            return text_input::Style {
                background: Background::Color(p.background_secondary),
                value: p.text_muted,
                ..base
            };
        }
    };

    text_input::Style {
        background: Background::Color(p.surface),
        border: Border {
            color: border_color,
            ..base.border
        },
        ..base
    }
}

fn rail(scroller: Color) -> scrollable::Rail {
    scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(scroller),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SMALL.into(),
            },
        },
    }
}

/// Scrollable style for the listing and the detail body.
pub fn scrollable_style(_theme: &iced::Theme, status: scrollable::Status) -> scrollable::Style {
    let p = palette::current();

    let scroller = match status {
        scrollable::Status::Active { .. } => p.border_medium,
        scrollable::Status::Hovered {
            is_vertical_scrollbar_hovered,
            ..
        } if is_vertical_scrollbar_hovered => p.primary_light,
        scrollable::Status::Hovered { .. } => p.border_medium,
        scrollable::Status::Dragged { .. } => p.primary,
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail(scroller),
        horizontal_rail: rail(p.border_medium),
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(p.surface),
            border: Border::default(),
            shadow: shadows::none(),
            icon: p.text_muted,
        },
    }
}
