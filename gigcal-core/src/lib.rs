//! Core types for gigcal.
//!
//! This crate provides everything the gigcal CLI drives:
//! - [`Event`] and [`EventStore`] for the in-memory calendar
//! - [`codec`] for the line-oriented events file format
//! - [`GigcalConfig`](config::GigcalConfig) for the global configuration

pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod store;

pub use error::{GigcalError, GigcalResult};
pub use event::Event;
pub use store::EventStore;
