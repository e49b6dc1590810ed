//! Error types for items-api

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The database could not be reached at startup.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A read or write against the collection failed at request time.
    #[error("{0}")]
    Query(String),
}

impl Error {
    pub fn connection(msg: impl Into<String>) -> Self {
        Error::Connection(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Error::Query(msg.into())
    }
}
