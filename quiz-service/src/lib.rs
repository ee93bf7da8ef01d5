//! Quiz delivery service
//!
//! ## Current API
//!
//! - Serve a quiz question asset from object storage
//! - Check a submitted answer against the stored record
//! - Record which callers have been shown which quiz
//!
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod routes;
pub mod s3;
