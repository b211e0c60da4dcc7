//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod arena;
mod clock;
mod cooldown_store;

pub use arena::{ArenaApi, UpstreamReply};
pub use clock::{Clock, ManualClock};
pub use cooldown_store::{CooldownStore, StoreError};
