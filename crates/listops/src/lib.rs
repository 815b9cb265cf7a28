//! listops - List manipulation utilities over sequences of optional integers
//!
//! This crate provides functionality to:
//! - Interleave values by parity (odd values at even indices, even values at odd indices)
//! - Split a list into halves sorted descending / ascending
//! - Generate interleaved geometric progressions of two bases
//! - Parse and format lists containing absent values

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::arrange::{ArrangeError, split_and_arrange, swap};
pub use domain::blank::{Blank, are_any_blank};
pub use domain::parity::sort_even_odd_by_index;
pub use domain::progression::geometric_progression;
pub use infra::list_text::{ParseListError, format_list, format_values, parse_list};
