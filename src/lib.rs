//! mathsheet - printable arithmetic worksheets as XLSX
//!
//! Generates randomized addition, subtraction, multiplication and division
//! problems under numeric constraints, lays them out in a column-aligned grid
//! and writes them to a spreadsheet:
//! - Constrained generation (digit/result bounds, zero exclusion)
//! - Exact division, non-negative subtraction
//! - Column-major or row-major fill, `=` signs aligned per column
//! - Reproducible output from a seed
//!
//! # Usage
//!
//! ```no_run
//! use mathsheet::{build_worksheet, export, rng_from_seed, WorksheetConfig};
//!
//! let config = WorksheetConfig {
//!     operations: "+-".into(),
//!     count: 40,
//!     seed: Some(7),
//!     ..WorksheetConfig::default()
//! };
//! let sheet = build_worksheet(&config, rng_from_seed(config.seed))?;
//! let bytes = export::save_xlsx(&sheet)?;
//! # Ok::<(), mathsheet::MathsheetError>(())
//! ```

// Generation
pub mod config;
pub mod constraints;
pub mod error;
pub mod generator;
pub mod operation;
pub mod problem;

// Layout and output
pub mod cell_ref;
pub mod export;
pub mod layout;
pub mod page_setup;
pub mod reader;
pub mod worksheet;

pub use config::WorksheetConfig;
pub use constraints::Constraints;
pub use error::{MathsheetError, Result};
pub use generator::{generate, rng_from_seed, ProblemGenerator};
pub use layout::{layout, FillMode, Grid};
pub use operation::{parse_operations, Operation};
pub use problem::{make_problem_text, Problem};
pub use worksheet::{build_worksheet, generate_sheet, Worksheet};
