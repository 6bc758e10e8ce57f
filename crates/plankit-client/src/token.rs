//! Request-generation tokens.
//!
//! Network calls are never cancelled mid-flight; instead, every fetch
//! whose result could race a context change carries the generation it
//! was issued under. When the context changes (selection, mode, plan),
//! the issuer is invalidated and late responses are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// The generation a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic generation counter, one per racing context.
#[derive(Debug, Default)]
pub struct TokenIssuer {
    generation: AtomicU64,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a request with the current generation.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.generation.load(Ordering::Acquire))
    }

    /// Marks all outstanding tokens stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Whether a response tagged with `token` is still current.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::Acquire) == token.0
    }
}
