//! Guided workout sessions.
//!
//! A session walks through one plan entry's sets:
//!
//! ```text
//!             complete_set()                     tick()... / skip_rest()
//! ActiveSet ─────────────────▶ Resting ─────────────────────────────────▶ ActiveSet (next set)
//!     │
//!     │ complete_set() on the last set, or submit_final_set(reps)
//!     ▼
//! Complete ── one attempt handed to the store
//! ```
//!
//! A session for a plan entry that does not exist starts out `Complete`
//! with no results and never writes anything.
//!
//! [`SessionEngine`] is the pure state machine; [`Session`] wraps it with a
//! tokio rest countdown, a `watch` channel of [`SessionState`] snapshots and
//! the background attempt write.

pub mod engine;
pub mod runner;

#[cfg(test)]
mod tests;

pub use engine::{
    Effect, Phase, SessionEngine, SessionKey, SessionState, Tick, PLAN_NOT_FOUND,
};
pub use runner::Session;
