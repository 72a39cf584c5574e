//! Expose wiregen's internal API for use in unit testing. While it *could*
//! be useful, we do not recommend using this API in production code.
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod token;
