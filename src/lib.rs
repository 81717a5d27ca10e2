//! carmatch Library
//!
//! Identifies which catalog vehicle a noisy free-text description refers
//! to. Build a [`Session`] from a [`catalog::Catalog`] once, then call
//! [`Session::match_one`] per description.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod session;
pub mod utils;

pub use session::Session;
