//! # Anon Infrastructure
//!
//! Concrete implementations of the ports defined in `anon-core`:
//! the StarsArena HTTP client, the system clock and cool-down storage.

pub mod arena;
pub mod clock;
pub mod cooldown;

pub use arena::{ArenaClient, ArenaConfig, ArenaConfigError, DEFAULT_BASE_URL};
pub use clock::SystemClock;
pub use cooldown::{FileCooldownStore, InMemoryCooldownStore, run_countdown};
