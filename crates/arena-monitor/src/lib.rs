//! Arena trading monitor.
//!
//! Wires the model registry, dashboard views and logging together behind a
//! small command-line front end:
//! - Resolve model identifiers to display identities
//! - Build dashboard snapshots from exported upstream records
//! - Dump the effective registry

pub mod app;
pub mod config;
pub mod error;

pub use app::{Application, ResolveOutput, SnapshotQuery};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
