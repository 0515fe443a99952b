//! Price Lookup - closest store cession price search
//!
//! Loads a JSON price catalog once at startup and answers, for a given price,
//! which catalog item has the nearest store cession price and what it sells for.

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod web;

pub use catalog::{Catalog, ItemRecord};
pub use error::{LoadError, SearchError};
pub use matcher::{search, PriceMatch};
