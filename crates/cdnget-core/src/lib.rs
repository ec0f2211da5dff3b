pub mod config;
pub mod logging;

pub mod checksum;
pub mod credentials;
pub mod error;
pub mod fetch;
pub mod metadata;
pub mod package;
pub mod storage;
pub mod url_model;
pub mod verify;

pub use error::VerifyError;
