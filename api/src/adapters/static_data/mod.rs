//! Static inventory data
//!
//! Car listings compiled into the binary, optionally replaced by JSON files
//! named in the configuration. Loaded once at startup.

mod loader;
mod repository;

pub use repository::StaticInventoryRepository;
