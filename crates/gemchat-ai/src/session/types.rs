//! Session concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Guard that clears the pending flag on drop, so the flag is released on
/// every exit path, including cancellation of the submit future.
pub(crate) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Attempt to mark the session pending. Returns `None` if a request is
    /// already in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::PendingGuard;

    #[test]
    fn acquire_is_exclusive_until_dropped() {
        let flag = AtomicBool::new(false);

        let guard = PendingGuard::acquire(&flag).expect("first acquire succeeds");
        assert!(flag.load(Ordering::Acquire));
        assert!(PendingGuard::acquire(&flag).is_none());

        drop(guard);
        assert!(!flag.load(Ordering::Acquire));
        assert!(PendingGuard::acquire(&flag).is_some());
    }
}
