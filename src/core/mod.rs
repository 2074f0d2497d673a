//! Core extraction engine.
//!
//! - `scanner`: single-file step definition scanner (cursor, line classes,
//!   body balancing, name extraction)
//! - `catalog`: parallel multi-file scan, merged in file order, with stats
//! - `context`: config + discovery + lazily built catalog for one project
//! - `file_scanner`: discovery of step definition files on disk
//! - `step`: output records

pub mod catalog;
pub mod context;
pub mod file_scanner;
pub mod scanner;
pub mod step;

pub use catalog::{ByType, SourceFile, Stats, StepCatalog};
pub use context::ScanContext;
pub use scanner::{ATTRIBUTE_BODY_PLACEHOLDER, StepScanner};
pub use step::{StepDefinition, StepType};
