pub mod alert;
pub mod config;
pub mod error;
pub mod timestamp;

pub use alert::*;
pub use config::{Config, OutputFormat};
pub use error::*;
pub use timestamp::{CapTimestamp, ZoneDesignator};
