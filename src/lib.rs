//! items-api - A small HTTP service for items stored in MongoDB
//!
//! Exposes two operations over a single document collection:
//! - `GET /items` lists every stored item
//! - `POST /items` creates an item, stamping its creation time on the server

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
