use async_trait::async_trait;

use review_common::error::ChannelError;

/// A destination for notification text. The recipient is fixed per channel.
#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;

    async fn send(&self, text: &str) -> Result<(), ChannelError>;
}
