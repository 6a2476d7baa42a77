//! Catalog Filter Module
//!
//! Client-side filtering over the product set fetched from the product
//! directory. The engine holds the full set and a bundle of independently
//! toggleable predicates; the visible subset is recomputed in full on
//! every query (product sets are small, tens to low hundreds).

mod filter;

pub use filter::FilterEngine;
