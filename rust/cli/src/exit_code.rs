//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code, also used when a detector rejects the cards.
pub const ERROR: i32 = 2;
