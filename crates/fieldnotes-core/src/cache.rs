use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A single-slot cache with time-based invalidation.
///
/// Holds one value together with the instant it was stored; `get` serves
/// it only while it is younger than the TTL. A zero TTL disables the cell
/// entirely, so tests and one-shot callers always see fresh builds.
pub struct TtlCell<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, Arc<T>)>>,
}

impl<T> TtlCell<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The cached value, if present and still fresh.
    pub fn get(&self) -> Option<Arc<T>> {
        if self.ttl.is_zero() {
            return None;
        }

        let slot = self.slot.read().unwrap();
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => {
                Some(Arc::clone(value))
            }
            _ => None,
        }
    }

    /// Replace the cached value, restarting its TTL window.
    pub fn store(&self, value: Arc<T>) {
        if self.ttl.is_zero() {
            return;
        }

        let mut slot = self.slot.write().unwrap();
        *slot = Some((Instant::now(), value));
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap();
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_stored_value_while_fresh() {
        let cell = TtlCell::new(Duration::from_secs(60));
        cell.store(Arc::new(42));
        assert_eq!(cell.get().as_deref(), Some(&42));
    }

    #[test]
    fn test_expires_after_ttl() {
        let cell = TtlCell::new(Duration::from_millis(10));
        cell.store(Arc::new(1));
        std::thread::sleep(Duration::from_millis(30));
        assert!(cell.get().is_none(), "value should expire after the TTL");
    }

    #[test]
    fn test_zero_ttl_disables_caching() {
        let cell = TtlCell::new(Duration::ZERO);
        cell.store(Arc::new(1));
        assert!(cell.get().is_none());
    }

    #[test]
    fn test_invalidate_clears_slot() {
        let cell = TtlCell::new(Duration::from_secs(60));
        cell.store(Arc::new(7));
        cell.invalidate();
        assert!(cell.get().is_none());
    }

    #[test]
    fn test_store_restarts_ttl() {
        let cell = TtlCell::new(Duration::from_secs(60));
        cell.store(Arc::new(1));
        cell.store(Arc::new(2));
        assert_eq!(cell.get().as_deref(), Some(&2));
    }
}
