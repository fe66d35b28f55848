// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue for transient user feedback.
//!
//! Notifications appear in the bottom-right corner, in the order they were
//! enqueued, and disappear after their duration or when the user closes
//! them, whichever comes first.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Kind` and unique `NotificationId`
//! - [`manager`] - `Manager` holding the active queue and pending expiries
//! - [`toast`] - Toast widget rendering the queue
//!
//! # Usage
//!
//! ```
//! use shelfwise::ui::notifications::{Manager, NotificationMessage};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new();
//! let id = manager.success("Saved", Some(Duration::from_millis(100)));
//!
//! // Each enqueue schedules one expiry; the app runs it as a timer task.
//! let expiries = manager.take_scheduled();
//! assert_eq!(expiries[0].id(), id);
//!
//! // When the timer fires (or the user clicks dismiss) the entry goes away.
//! manager.handle_message(&NotificationMessage::Expired(id));
//! assert!(manager.is_empty());
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Expiry, Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId};
pub use toast::Toast;
