#![forbid(unsafe_code)]

//! Core conversion pipeline for jefit2hevy.
//!
//! Turns a JeFit workout export (a section-tagged text/CSV hybrid) into the
//! flat CSV import format Hevy expects:
//! - Section splitting and table building
//! - Left join of exercise logs onto workout sessions
//! - Packed set-log expansion with per-exercise set numbering
//! - Timezone-correct ISO-8601 timestamps
//! - Exercise name normalization via an external mapping

pub mod config;
pub mod convert;
pub mod error;
pub mod expand;
pub mod export;
pub mod join;
pub mod logging;
pub mod mapping;
pub mod sections;
pub mod table;
pub mod timefmt;

// Re-export commonly used types
pub use config::Config;
pub use convert::{convert_file, convert_str, ConversionReport};
pub use error::{Error, Result};
pub use expand::SetRecord;
pub use export::HevyRow;
pub use mapping::NameMap;
pub use table::Table;
pub use timefmt::parse_offset;
