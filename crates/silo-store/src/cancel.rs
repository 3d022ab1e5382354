//! Cooperative cancellation for engine operations.
//!
//! A [`CancellationSource`] hands out cloneable [`CancellationToken`]s
//! that all observe the same flag. Every engine verb checks its token
//! before doing work; multi-key removals re-check between keys so a
//! cancelled batch stops at a key boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};

/// Controller that can cancel the tokens it hands out.
#[derive(Debug, Clone, Default)]
pub struct CancellationSource {
    flag: Arc<AtomicBool>,
}

impl CancellationSource {
    /// Create a new source in the active state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token observing this source.
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            flag: Arc::clone(&self.flag),
        }
    }

    /// Cancel every token created from this source.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Cloneable handle checked by cancellable operations.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that is never cancelled, for call sites that do not cancel.
    pub fn none() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Fail with [`StoreError::Cancelled`] if cancellation was requested.
    pub fn bail_if_cancelled(&self) -> StoreResult<()> {
        if self.is_cancelled() {
            Err(StoreError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_never_cancelled() {
        let token = CancellationToken::none();
        assert!(!token.is_cancelled());
        assert!(token.bail_if_cancelled().is_ok());
    }

    #[test]
    fn source_cancels_all_tokens() {
        let source = CancellationSource::new();
        let token1 = source.token();
        let token2 = source.token();

        assert!(!token1.is_cancelled());
        source.cancel();
        assert!(token1.is_cancelled());
        assert!(token2.is_cancelled());
        assert!(source.is_cancelled());
    }

    #[test]
    fn bail_reports_cancellation() {
        let source = CancellationSource::new();
        let token = source.token();
        source.cancel();
        let err = token.bail_if_cancelled().unwrap_err();
        assert!(matches!(err, StoreError::Cancelled));
    }

    #[test]
    fn tokens_survive_threads() {
        use std::thread;

        let source = CancellationSource::new();
        let token = source.token();
        let handle = thread::spawn(move || {
            while !token.is_cancelled() {
                thread::yield_now();
            }
            true
        });
        source.cancel();
        assert!(handle.join().expect("thread should not panic"));
    }
}
