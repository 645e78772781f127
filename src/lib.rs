//! tabq - filter, sort, and aggregate tabular files from the command line

pub mod cli;
pub mod dataset;
pub mod engine;
pub mod expr;
pub mod reader;
pub mod render;
