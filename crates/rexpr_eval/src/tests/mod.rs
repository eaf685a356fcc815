//! Operator dispatch suites, kept out of `operators.rs` for length.
