//! Standard exit codes for the gate
//!
//! These exit codes follow Unix conventions.

#![allow(dead_code)]

/// Success - every manifest is valid
pub const SUCCESS: i32 = 0;

/// General error - unreadable or unparseable input
pub const ERROR: i32 = 1;

/// Validation error - at least one manifest failed the schema
pub const VALIDATION_ERROR: i32 = 2;
