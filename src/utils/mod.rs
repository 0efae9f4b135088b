pub mod freq;
pub mod logging;
