//! Minerva Engine
//!
//! Orchestrates the full scoring pipeline over one raw snapshot:
//!
//! ```text
//! raw table ──► parse ──► scale repair ──► liquidity filter ──► blacklist
//!                                                                   │
//!                detail cache (port) ──► merge details ◄────────────┘
//!                                              │
//!                                     share-class dedup
//!                                              │
//!                        ┌─────────────────────┼─────────────────────┐
//!                        ▼                     ▼                     ▼
//!                  filter scores        strategy scores         risk flags
//!                        └─────────────────────┼─────────────────────┘
//!                                              ▼
//!                                composite ranking (stable)
//! ```
//!
//! The pipeline is a pure function of (snapshot, details, config): two runs
//! on identical input produce byte-identical serialized output. The engine
//! performs no I/O and owns no clock; snapshot metadata is caller-stamped.

pub mod cache;
pub mod config;
mod error;
pub mod pipeline;
pub mod ranker;

// Re-export main types
pub use cache::MemoryDetailCache;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use pipeline::Engine;
