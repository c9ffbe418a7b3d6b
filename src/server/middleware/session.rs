//! Type-safe session wrappers.
//!
//! The only state kept in the session is the queue of flash messages: one-shot notices
//! pushed by a mutating handler and shown on the next rendered page.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_FLASH_MESSAGES: &str = "flash:messages";

/// Flash message queue stored in the session.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Appends a message to be shown on the next rendered page.
    ///
    /// # Returns
    /// - `Ok(())` - Message queued
    /// - `Err(AppError::SessionErr(_))` - Failed to read or write the session
    pub async fn push(&self, message: impl Into<String>) -> Result<(), AppError> {
        let mut messages: Vec<String> = self
            .session
            .get(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        messages.push(message.into());

        self.session
            .insert(SESSION_FLASH_MESSAGES, messages)
            .await?;
        Ok(())
    }

    /// Removes and returns every queued message, oldest first.
    pub async fn take(&self) -> Result<Vec<String>, AppError> {
        let messages = self
            .session
            .remove(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn messages_are_taken_once_in_order() -> Result<(), AppError> {
        let mut test = TestBuilder::new().build().await.unwrap();
        let session = test.session().await.unwrap();

        let flash = FlashSession::new(session);
        flash.push("Venue The Musical Hop was successfully listed!").await?;
        flash.push("Show was successfully listed!").await?;

        assert_eq!(
            flash.take().await?,
            vec![
                "Venue The Musical Hop was successfully listed!",
                "Show was successfully listed!",
            ]
        );
        assert!(flash.take().await?.is_empty());

        Ok(())
    }
}
