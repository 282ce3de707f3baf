//! Foundation types for the robotls toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions for cells and AST nodes
//! - [`Location`] - Parsed span or synthetic (library-provided) origin
//! - Domain constants (file extensions, table names, markers)
//!
//! This module has NO dependencies on other robotls modules.

pub mod constants;
mod position;

pub use position::{Location, Position, Span};
