//! Outbound chat notifications.
//!
//! - [`Channel`] is the delivery seam; [`TelegramChannel`] delivers through the
//!   Telegram Bot API to one fixed chat.
//! - [`Notifier`] suppresses repeats of the last delivered text and contains
//!   every delivery failure.

pub mod channel;
pub mod notifier;
pub mod telegram;

pub use channel::Channel;
pub use notifier::Notifier;
pub use telegram::TelegramChannel;
