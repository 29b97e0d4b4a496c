//! Name-to-text lookup store for catalogs
//!
//! A [`Store`] maps names to text. It is filled either from an in-memory
//! mapping or by loading files that match glob patterns under a directory,
//! and it is what the catalog parser reads sources from and returns.

pub mod config;
pub mod error;
pub mod key;
mod load;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use key::key_from_relative;
pub use store::{Iter, Store};
