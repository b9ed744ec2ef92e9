//! CSS Lint Library
//!
//! Lints CSS stylesheets for style and correctness problems, and serves the
//! results to editors over the Language Server Protocol.

pub mod config;
pub mod css;
pub mod error;
pub mod logging;
#[cfg(test)]
pub mod test_utils;
