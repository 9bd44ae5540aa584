use crate::channel::Channel;

/// De-duplicating dispatcher in front of a [`Channel`].
///
/// The caller owns the "last seen" slot, so independent message streams
/// (status updates and error reports) can share one notifier.
pub struct Notifier<C> {
    channel: C,
}

impl<C: Channel> Notifier<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Send `text` unless it equals `last_seen`.
    ///
    /// Returns `true` if the message was delivered, in which case `last_seen`
    /// becomes `text`. A delivery failure is logged and leaves `last_seen`
    /// untouched, so the same text is attempted again next time.
    pub async fn notify_if_changed(&self, text: &str, last_seen: &mut String) -> bool {
        if text == last_seen.as_str() {
            tracing::debug!(channel = self.channel.name(), "Message unchanged, not sending");
            return false;
        }

        tracing::debug!(channel = self.channel.name(), text, "Sending message");

        match self.channel.send(text).await {
            Ok(()) => {
                tracing::info!(channel = self.channel.name(), text, "Message sent");
                text.clone_into(last_seen);
                true
            }
            Err(e) => {
                tracing::error!(
                    channel = self.channel.name(),
                    text,
                    error = %e,
                    "Failed to send message"
                );
                false
            }
        }
    }
}
