//! Transient status messages
//!
//! Shows short-lived overlays for things the user should notice without
//! interrupting editing: saved files, configuration problems, failed saves.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
