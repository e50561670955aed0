pub mod file_format;
pub mod log_setup;
pub mod parallel;
pub mod serde;

pub use log_setup::try_setup_logging;
