//! Text rewriting for the navigation migration
//!
//! The source file is handled as one string. Every step is a regex
//! search/replace over that string; no syntax tree is ever built.

pub(crate) mod io;
pub mod models;
pub(crate) mod patterns;
pub mod pipeline;
pub(crate) mod steps;

pub use io::{migrate_file, read_source, write_source};
pub use models::*;
pub use pipeline::Rewriter;
