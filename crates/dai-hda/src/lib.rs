//! HDA-link DAI endpoint
//!
//! Control-plane driver for DAI endpoints attached to a High-Definition
//! Audio link on the audio DSP. The crate manages per-link stream
//! configuration (rate, channels, word size), reports link transfer
//! properties to the pipeline and dispatches trigger commands. Sample
//! transfer itself belongs to the link/DMA layer.
//!
//! # Components
//!
//! - [`InstanceStore`] - per-link configuration behind a critical section
//! - [`HdaDai`] - the [`dai::DaiDriver`] implementation over one store
//! - [`HdaDaiRegistry`] - every enumerated link, indexed by link number
//! - [`HdaParams`] - decoder for the protocol-specific parameter blob
//!
//! # Example
//!
//! ```
//! use dai::{DaiConfig, DaiDriver, DaiKind, Direction, TriggerCmd};
//! use dai_hda::{EndpointDescriptor, HdaDaiRegistry, HdaParams};
//!
//! let links: HdaDaiRegistry = HdaDaiRegistry::new(&[EndpointDescriptor::hda(0)]).unwrap();
//! links.probe_all().unwrap();
//!
//! let link = links.get(0).unwrap();
//! let params = HdaParams { link_dma_ch: 0, rate: 48_000, channels: 2 };
//! link.config_set(&DaiConfig::new(DaiKind::IntelHda, 0), &params.to_bytes(), Direction::Tx)
//!     .unwrap();
//! link.trigger(Direction::Tx, TriggerCmd::Start).unwrap();
//! ```

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
#![allow(clippy::doc_markdown)] // link names (HDA, DMA) in doc comments
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod params;
pub mod registry;
pub mod store;

pub use config::{EndpointDescriptor, DEFAULT_WORD_SIZE, HDA_PARAMS_LEN, MAX_HDA_LINKS};
pub use controller::HdaDai;
pub use params::HdaParams;
pub use registry::{HdaDaiRegistry, RegistryError};
pub use store::{ConfigUpdate, EndpointConfig, InstanceStore};
