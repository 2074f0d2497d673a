//! Stepcat - step definition catalog for BDD projects
//!
//! Stepcat scans Cucumber (Ruby) and SpecFlow (C#) step definition files and
//! builds a catalog of every Given/When/Then step, hook and transform, with
//! the comments and body that belong to each one.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Line scanner, multi-file catalog and project scan context
//! - `issues`: Diagnostic type definitions
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
