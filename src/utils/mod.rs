//! # Utility Modules
//!
//! Supporting utilities shared by the packet layer.
//!
//! ## Components
//! - **Logging**: structured logging configuration

pub mod logging;

pub use logging::init_logging;
