//! # Anon Core
//!
//! The domain layer of Arena Anonymous.
//! Request validation, the comment pipeline and the submission cool-down live
//! here as pure logic; network and storage sit behind the traits in [`ports`].

pub mod cooldown;
pub mod domain;
pub mod error;
pub mod ports;

pub use cooldown::{Cooldown, CooldownGate, CooldownState};
pub use error::{CooldownError, UpstreamError, ValidationError};
