//! Request-generation tokens
//!
//! Every top-level load takes a ticket from a `LoadGeneration`. Issuing a newer
//! ticket, or cancelling, makes all older tickets stale; a `Latest` slot only
//! accepts results carrying the current ticket.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Token captured when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter
#[derive(Debug, Default)]
pub struct LoadGeneration {
    current: AtomicU64,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier ticket.
    pub fn issue(&self) -> LoadTicket {
        LoadTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Abandon the in-flight load without starting another.
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

/// Slot holding the result of the most recent load.
#[derive(Debug)]
pub struct Latest<T> {
    generation: Arc<LoadGeneration>,
    value: Mutex<Option<T>>,
}

impl<T> Latest<T> {
    pub fn new(generation: Arc<LoadGeneration>) -> Self {
        Self {
            generation,
            value: Mutex::new(None),
        }
    }

    /// Store `value` if `ticket` is still current. Returns whether it was stored.
    pub fn apply(&self, ticket: LoadTicket, value: T) -> bool {
        let mut slot = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        // Checked under the lock so a stale result can never land after a fresh one
        if !self.generation.is_current(ticket) {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Take the stored value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let generation = LoadGeneration::new();
        let a = generation.issue();
        let b = generation.issue();

        assert!(b > a);
        assert!(!generation.is_current(a));
        assert!(generation.is_current(b));
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let generation = Arc::new(LoadGeneration::new());
        let latest = Latest::new(generation.clone());

        let first = generation.issue();
        let second = generation.issue();

        assert!(latest.apply(second, "fresh"));
        assert!(!latest.apply(first, "stale"));
        assert_eq!(latest.take(), Some("fresh"));
    }

    #[test]
    fn test_cancel_invalidates_current_ticket() {
        let generation = Arc::new(LoadGeneration::new());
        let latest: Latest<u32> = Latest::new(generation.clone());

        let ticket = generation.issue();
        generation.cancel();

        assert!(!latest.apply(ticket, 1));
        assert_eq!(latest.take(), None);
    }

    #[test]
    fn test_take_empties_slot() {
        let generation = Arc::new(LoadGeneration::new());
        let latest = Latest::new(generation.clone());

        let ticket = generation.issue();
        assert!(latest.apply(ticket, vec![1, 4, 7]));
        assert_eq!(latest.take(), Some(vec![1, 4, 7]));
        assert_eq!(latest.take(), None);
    }

    #[tokio::test]
    async fn test_late_task_cannot_overwrite() {
        let generation = Arc::new(LoadGeneration::new());
        let latest = Arc::new(Latest::new(generation.clone()));

        let slow_ticket = generation.issue();
        let slow = {
            let latest = latest.clone();
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                latest.apply(slow_ticket, "slow")
            })
        };

        let fast_ticket = generation.issue();
        assert!(latest.apply(fast_ticket, "fast"));

        assert!(!slow.await.unwrap());
        assert_eq!(latest.take(), Some("fast"));
    }
}
