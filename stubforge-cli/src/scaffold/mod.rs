//! Component scaffolding
//!
//! A [`ScaffoldRequest`] describes one run; the [`Materializer`] renders it
//! through a variant's stubs and is the only place files get written.

pub mod materializer;
pub mod request;

pub use materializer::{component_dir, ensure_directory, GeneratedFile, Materializer};
pub use request::{RequestDetails, ScaffoldRequest};
