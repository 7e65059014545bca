//! Digital Audio Interface (DAI) driver model
//!
//! Types and traits shared by every DAI kind: the configuration and property
//! records exchanged with the audio pipeline, the [`DaiDriver`] operation
//! table, and the trigger extension point.
//!
//! # Architecture Layers
//!
//! ```text
//! Audio pipeline / topology owner
//!         ↓
//! DAI driver model (this crate: DaiDriver, DaiConfig, TriggerHook)
//!         ↓
//! Concrete DAI drivers (dai-hda, ...)
//!         ↓
//! Link / DMA subsystem (external)
//! ```
//!
//! # Features
//!
//! - `std`: host-side helpers ([`mocks`])
//! - `defmt`: defmt derives and log output (hardware builds)
//! - `tracing`: log output through `tracing` (host builds)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod fmt;

pub mod driver;
pub mod error;
pub mod mocks;
pub mod trigger;
pub mod types;

pub use driver::DaiDriver;
pub use error::DaiError;
pub use trigger::{AckOnly, DaiState, LifecycleGate, TriggerContext, TriggerHook};
pub use types::{DaiConfig, DaiKind, DaiProperties, Direction, TriggerCmd};
