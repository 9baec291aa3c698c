//! Security utilities: strict allowlist-based input validation.
//!
//! Every external value that flows into a database query or an outbound
//! message MUST pass through one of these validators first.

pub mod input;
