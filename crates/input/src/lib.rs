//! Held-key tracking for the first-person walk controller.
//!
//! # Invariants
//! - Only current-instant key state is retained; there is no event queue.
//!   A press and release that both land between two ticks are lost, which
//!   is accepted behavior for a per-frame controller.
//! - Writers (the window event loop) and readers (the tick) run on the
//!   same thread, so no synchronization is needed.

pub mod keys;

pub use keys::{Binding, KeyStates};

/// Crate name and version, for diagnostics output.
pub fn crate_info() -> String {
    format!("snowwalk-input v{}", env!("CARGO_PKG_VERSION"))
}
