//! Command implementations for Notemerge CLI

pub mod apply;
pub mod completions;
pub mod helpers;
pub mod merge;
pub mod run;
