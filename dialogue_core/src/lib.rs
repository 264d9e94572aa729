//! # Dialogue Core (Kaiwa)
//!
//! The conversation runtime. This crate interfaces with `dialogue_script`,
//! owns per-session mutable state, and advances conversations one choice at
//! a time over a shared read-only scenario graph.
//!
//! ## Core Components
//!
//! - **clock**: Caller-supplied timestamps that keep the engine pure
//! - **session**: Per-session state, overlay expiry, and the session registry
//! - **engine**: The choice transition engine and its configuration
//!
//! ## Design Philosophy
//!
//! - **Explicit ownership**: no process-wide state; a session is a value owned by its caller, and concurrent sessions are simply separate values
//! - **Pure transitions**: one choice in, one new state out; time is an argument, never read internally
//! - **Fail hard on defects**: broken scenario data and foreign choices are returned as errors, never patched over with a default node

pub mod clock;
pub mod engine;
pub mod session;

pub use clock::*;
pub use engine::*;
pub use session::*;
