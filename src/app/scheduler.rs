use crate::app::action::Action;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Kinds of timer the palette keeps. At most one of each is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    FocusInput,
    AutoClose,
}

/// Owns the pending timer tasks. Dropping it aborts all of them.
pub struct Scheduler {
    tx: mpsc::Sender<Action>,
    pending: HashMap<Deferred, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tx,
            pending: HashMap::new(),
        }
    }

    /// Sends `action` after `delay`, replacing any timer of the same kind.
    pub fn schedule(&mut self, kind: Deferred, delay: Duration, action: Action) {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(action).await;
        });
        if let Some(previous) = self.pending.insert(kind, handle) {
            previous.abort();
        }
    }

    pub fn cancel(&mut self, kind: Deferred) {
        if let Some(handle) = self.pending.remove(&kind) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self, kind: Deferred) -> bool {
        self.pending
            .get(&kind)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(Deferred::AutoClose, Duration::from_secs(2), Action::AutoClose(1));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(Action::AutoClose(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(Deferred::FocusInput, Duration::from_millis(100), Action::FocusInput(1));
        scheduler.schedule(Deferred::FocusInput, Duration::from_millis(100), Action::FocusInput(2));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.recv().await, Some(Action::FocusInput(2)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_abort() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(Deferred::FocusInput, Duration::from_millis(100), Action::FocusInput(1));
        scheduler.schedule(Deferred::AutoClose, Duration::from_secs(2), Action::AutoClose(1));
        assert!(scheduler.is_pending(Deferred::AutoClose));

        scheduler.cancel(Deferred::FocusInput);
        assert!(!scheduler.is_pending(Deferred::FocusInput));
        drop(scheduler);

        tokio::time::sleep(Duration::from_secs(5)).await;
        // Every sender is gone once the aborted tasks are reaped
        assert_eq!(rx.recv().await, None);
    }
}
