//! # Dialogue Script (The Script Book)
//!
//! The "script book" crate - contains all static dialogue data: trilingual
//! utterances, choice descriptors, conversation nodes, slot schemas, and
//! whole scenarios. This crate is the single source of truth for scenario
//! content and carries no runtime state.
//!
//! ## Core Components
//!
//! - **script**: Immutable building blocks (`TriText`, `Choice`, `Node`)
//! - **slots**: Accumulated-state value model and its mutation rules
//! - **scenario**: Named node graphs with fail-fast validation
//! - **loader**: Declarative TOML scenario files
//! - **catalog**: Built-in scenarios shipped with the engine

pub mod catalog;
pub mod loader;
pub mod scenario;
pub mod script;
pub mod slots;

pub use loader::*;
pub use scenario::*;
pub use script::*;
pub use slots::*;
