//! Error types and error handling for the parser.
//!
//! This module defines the error types used by the lexing and parsing
//! phases. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and structural failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
