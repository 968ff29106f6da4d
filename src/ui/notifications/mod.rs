// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Navigation boundaries, backend failures and config warnings are shown as
//! short-lived toasts in the bottom-right corner without pausing playback.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - widget rendering
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::info("notification-no-more-videos"));
//!
//! // In the view function
//! let toasts = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
