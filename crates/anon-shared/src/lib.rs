//! # Anon Shared
//!
//! Wire types shared by the API server and the submitter CLI.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
