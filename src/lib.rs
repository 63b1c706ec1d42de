//! Core library for the campaign-data command line application.
//!
//! The library turns a campaign planning workbook into the JSON document read
//! by the simulator. IO adapters live under [`io`], the output representation
//! in [`model`], the sheet join in [`build`], and the end-to-end pipeline in
//! [`convert`]. Cell coercion rules are kept apart in [`coerce`] so the
//! defaulting policy can be read in one place.

pub mod build;
pub mod coerce;
pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod model;
pub mod query;
pub mod schema;

pub use config::ConvertConfig;
pub use error::{Result, ToolError};
pub use model::CampaignDocument;
