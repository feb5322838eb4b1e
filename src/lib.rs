//! keyword-merge: merge keyword research exports into one scored table
//!
//! Joins a search console export, keyword planner exports and a manual
//! keyword list, scores every keyword and writes a sorted research CSV plus
//! a RankFalcon import file.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod merge;
pub mod pipeline;
pub mod score;
pub mod source;
pub mod utils;

pub use error::{KeywordError, Result};
