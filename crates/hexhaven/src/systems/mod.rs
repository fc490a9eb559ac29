//! # Simulation Systems
//!
//! Systems are plain structs that receive `&mut World` explicitly; there is
//! no registry and no ambient state. The host calls them in a fixed order
//! each update.

pub mod lifecycle;
pub mod time;

pub use lifecycle::LifecycleSystem;
pub use time::TimeSystem;
