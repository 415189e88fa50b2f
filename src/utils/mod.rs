//! # Utility Modules
//!
//! Supporting utilities shared by hosts embedding the codec.
//!
//! ## Components
//! - **Logging**: Structured logging configuration

pub mod logging;
