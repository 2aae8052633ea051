//! Widget styles with shadows and rounded corners.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{
    nav_button_selected_style, nav_button_style, primary_button_style, row_action_button_style,
    row_button_style, secondary_button_style,
};
pub use containers::{
    card_style, header_style, modal_backdrop_style, modal_style, notice_style, row_style,
    sidebar_style, surface_style,
};
pub use inputs::{field_input_style, scrollable_style};
