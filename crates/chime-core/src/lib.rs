pub mod config;
pub mod error;
pub mod reminder;

pub use config::ChimeConfig;
pub use error::{ChimeError, Result};
pub use reminder::{Cycle, Device, Reminder, Settings};
