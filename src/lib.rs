//! Generate static demo landing pages from per-client JSON descriptions.
//!
//! One invocation reads a single configuration file, derives a slug and a
//! color palette, renders the shared Liquid template pair with only the
//! non-empty content sections, copies locally referenced assets, and writes
//! the bundle to `sites/<slug>/`, wiping whatever an earlier build left
//! there first.

mod assets;
mod files;
mod html;
mod render;
mod template;

pub mod config;
pub mod error;
pub mod new;
pub mod sections;
pub mod site;
pub mod slug;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::site::{clean, generate};
