//! Domain layer
//!
//! Contains pure inventory logic with no external dependencies.
//! - `entities`: Car records and the collections that hold them
//! - `ports`: Trait definitions for where inventory data comes from

pub mod entities;
pub mod ports;
