//! # Nexus Core
//!
//! The computing side of the Cosmic Knowledge Nexus. Everything here turns
//! knowledge entries into values; nothing here draws on a screen.
//!
//! ## Core Components
//!
//! - **similarity**: bag-of-words overlap between two texts
//! - **entanglement**: append-only log of similarity relations between entries
//! - **collapse**: random resolution of an entry into one or two renderings
//! - **temporal**: past/present/future projection of an entry
//! - **ethics**: four-dimensional ethics vector with a provenance receipt
//! - **presentation**: the sink trait display layers implement
//! - **nexus**: the driver tying a store, the operators and a sink together
//!
//! Randomness and time always come in through [`RandomSource`] and [`Clock`],
//! so every operation is reproducible under test.

pub mod collapse;
pub mod config;
pub mod entanglement;
pub mod ethics;
pub mod indicators;
pub mod nexus;
pub mod presentation;
pub mod similarity;
pub mod temporal;
mod text;

pub use collapse::*;
pub use config::*;
pub use entanglement::*;
pub use ethics::*;
pub use indicators::*;
pub use nexus::*;
pub use presentation::*;
pub use similarity::*;
pub use temporal::*;

pub use nexus_model::{
    Clock, EntryId, FixedClock, KnowledgeEntry, KnowledgeStore, NexusError, RandomSource,
    Result, RngSource, ScriptedRandom, SeedEntry, SystemClock,
};
