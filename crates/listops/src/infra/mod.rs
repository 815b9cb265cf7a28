//! Infrastructure layer - Text encoding of lists
//!
//! This module converts between textual input and in-memory lists.

pub mod list_text;
