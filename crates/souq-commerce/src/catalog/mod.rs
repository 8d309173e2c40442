//! Product catalog module.
//!
//! The catalog is a read-only external collaborator: the cart consumes
//! these records but never mutates them.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{ColorVariant, LocalizedText, Product};
