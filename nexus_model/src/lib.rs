//! # Nexus Model
//!
//! The data side of the Cosmic Knowledge Nexus: knowledge entries with their
//! qualia, the fixed knowledge store, the error taxonomy, and the injectable
//! sources of randomness and time every drawing operation depends on.
//! This crate holds no scoring or projection logic.

pub mod entries;
pub mod error;
pub mod sources;
pub mod store;

pub use entries::*;
pub use error::*;
pub use sources::*;
pub use store::*;
