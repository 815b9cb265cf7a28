//! Shared constants
//!
//! Literals used across the domain, text codec and batch layers.

// =============================================================================
// Error messages
// =============================================================================

/// Message reported when the filtered list size is zero or odd
pub const EVEN_SIZE_MESSAGE: &str = "Provide Even Value Index";

// =============================================================================
// Text format
// =============================================================================

/// Tokens (compared case-insensitively) that denote an absent value
pub const NULL_TOKENS: [&str; 4] = ["null", "none", "-", "_"];

/// Token written for an absent value when formatting
pub const NULL_TOKEN: &str = "null";

/// Separator written between formatted values
pub const LIST_SEPARATOR: &str = ", ";

// =============================================================================
// Batch processing
// =============================================================================

/// Minimum batch length before work is spread across the rayon pool
#[cfg(not(test))]
pub const PARALLEL_THRESHOLD: usize = 64;

/// Minimum batch length (reduced so unit tests exercise the parallel path)
#[cfg(test)]
pub const PARALLEL_THRESHOLD: usize = 2;
