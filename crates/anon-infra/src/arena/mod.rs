//! StarsArena REST API client.

mod client;

pub use client::{ArenaClient, ArenaConfig, ArenaConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
