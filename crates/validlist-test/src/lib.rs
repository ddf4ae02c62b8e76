//! Shared test fixtures for validlist crates.
//!
//! Domain element types covering each capability level:
//!
//! - [`badge`] - equality only
//! - [`tier`] - ordered and printable
//! - [`reading`] - full numeric newtype
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! validlist-test = { workspace = true }
//! ```

pub mod badge;
pub mod reading;
pub mod tier;

pub use badge::Badge;
pub use reading::Reading;
pub use tier::Tier;
