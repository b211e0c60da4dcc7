//! Cool-down storage and the countdown ticker.

mod file;
mod memory;
mod ticker;

pub use file::FileCooldownStore;
pub use memory::InMemoryCooldownStore;
pub use ticker::run_countdown;
