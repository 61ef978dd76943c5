//! Delayed, cancellable navigation.
//!
//! A [`ScheduledRedirect`] sleeps for a delay and then sends a
//! [`RedirectFired`] message, unless its [`CancellationToken`] is triggered
//! first. Dropping the handle cancels it, so a redirect never outlives the
//! view that scheduled it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::routes::Route;

/// Message delivered when a redirect's delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectFired {
    /// Navigation generation that scheduled the redirect. The receiver
    /// ignores the message if it has navigated since.
    pub generation: u64,
    pub target: Route,
}

#[derive(Debug)]
pub struct ScheduledRedirect {
    cancel: CancellationToken,
}

impl ScheduledRedirect {
    /// Spawn the timer task. Must be called inside a tokio runtime.
    pub fn schedule(
        delay: Duration,
        generation: u64,
        target: Route,
        tx: mpsc::UnboundedSender<RedirectFired>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(generation, "Redirect cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    tracing::debug!(generation, to = %target, "Redirect fired");
                    if tx.send(RedirectFired { generation, target }).is_err() {
                        tracing::debug!(generation, "Redirect receiver gone");
                    }
                }
            }
        });

        Self { cancel }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScheduledRedirect {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _redirect = ScheduledRedirect::schedule(Duration::from_millis(10), 3, Route::Home, tx);

        let fired = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("redirect within timeout")
            .expect("channel open");
        assert_eq!(
            fired,
            RedirectFired {
                generation: 3,
                target: Route::Home
            }
        );
    }

    #[tokio::test]
    async fn cancelled_redirect_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let redirect = ScheduledRedirect::schedule(Duration::from_millis(50), 1, Route::Home, tx);
        redirect.cancel();
        assert!(redirect.is_cancelled());

        // The task drops its sender on exit, closing the channel.
        let next = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("task finished");
        assert!(next.is_none());
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(ScheduledRedirect::schedule(
            Duration::from_millis(50),
            1,
            Route::Home,
            tx,
        ));

        let next = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("task finished");
        assert!(next.is_none());
    }
}
