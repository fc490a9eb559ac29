//! # HEXHAVEN Procedural Generation
//!
//! Deterministic world materialization: noise-derived terrain heights and
//! the builder that turns a seed plus a map size into a populated
//! [`hexhaven_core::World`].
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same world
//! 2. **Wrapping**: Heights are sampled on a cylinder, so the map tiles
//!    seamlessly east to west
//! 3. **Kernel-agnostic**: Everything here talks to the core through its
//!    public API (`new_entity`, `add`, grid cells); no storage internals
//!
//! ## Example
//!
//! ```rust,ignore
//! use hexhaven_procedural::{MapSeed, WorldBuilder};
//!
//! let world = WorldBuilder::new(64, 64)
//!     .seed(MapSeed::new(42))
//!     .build()?;
//! ```

pub mod builder;
pub mod generator;
pub mod noise;

pub use builder::WorldBuilder;
pub use generator::MapGenerator;
pub use noise::{MapSeed, SimplexNoise};
