//! Progressive disclosure of the fetched messages.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default pause between two revealed messages
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(2500);

/// How many of `total` messages are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealProgress {
    visible: usize,
    total: usize,
}

impl RevealProgress {
    pub fn new(total: usize) -> Self {
        Self { visible: 0, total }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.visible
    }

    /// Reveal one more message. Returns false once everything is visible.
    pub fn advance(&mut self) -> bool {
        if self.visible < self.total {
            self.visible += 1;
            true
        } else {
            false
        }
    }

    /// True when every message is visible, including the empty case
    pub fn is_complete(&self) -> bool {
        self.visible == self.total
    }
}

/// One reveal step, posted by [`RevealTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTick;

/// Recurring reveal ticks scoped to the owner's lifetime.
///
/// The first tick arrives one interval after start. The task stops after
/// `ticks` sends, when the receiver goes away, or when the timer is dropped.
pub struct RevealTimer {
    handle: JoinHandle<()>,
}

impl RevealTimer {
    pub fn start<E>(interval: Duration, ticks: usize, tx: mpsc::UnboundedSender<E>) -> Self
    where
        E: From<RevealTick> + Send + 'static,
    {
        // interval_at panics on a zero period
        let interval = interval.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + interval;
            let mut timer = tokio::time::interval_at(start, interval);
            for _ in 0..ticks {
                timer.tick().await;
                if tx.send(E::from(RevealTick)).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
