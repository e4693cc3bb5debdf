//! # academsg Core Library
//!
//! Generates synthetic academic-communication messages (chat reminders,
//! emails, video-call invites, homework notices, deadline alerts) and
//! persists each one as an indexed JSON file. The CLI binary is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable rosters of professors and courses, plus the
//!   template list for every [`Category`]
//! - **Generator**: seedable random selection and placeholder rendering
//! - **Writer**: directory-scan indexed JSON persistence
//! - **Config**: optional TOML defaults for the command line
//!
//! ## Key Components
//!
//! - [`MessageGenerator`]: builds a [`MessageRecord`] for a category
//! - [`JsonWriter`]: writes records as `<category>_<index>.json`
//! - [`Config`]: configuration loading

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod record;
pub mod template;
pub mod writer;

pub use catalog::{Category, COURSES, PROFESSORS};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result};
pub use generator::{CategoryChoice, MessageGenerator};
pub use record::MessageRecord;
pub use template::{Placeholder, Template};
pub use writer::JsonWriter;
