//! View components for the application.
//!
//! Each function draws one view model from `mailroom_core::render`; buttons
//! emit the events those view models carry.

mod compose;
mod detail;
mod mailbox;
mod overlay;
mod sidebar;

pub use compose::view_compose;
pub use detail::view_detail;
pub use mailbox::view_mailbox;
pub use overlay::{view_alert, view_notice};
pub use sidebar::view_sidebar;
