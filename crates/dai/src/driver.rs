//! DAI driver API.
//!
//! The operation table a DAI driver exposes to the audio pipeline. Methods
//! take `&self`: drivers keep their mutable state behind a critical-section
//! mutex so one instance can be shared between a control task and a
//! reconfiguration path.

use crate::error::DaiError;
use crate::types::{DaiConfig, DaiProperties, Direction, TriggerCmd};

/// DAI driver trait.
pub trait DaiDriver {
    /// Readiness hook, called once before any other operation.
    fn probe(&self) -> Result<(), DaiError>;

    /// Teardown hook, called once after every other operation.
    fn remove(&self) -> Result<(), DaiError>;

    /// Apply `cfg` together with the kind-specific parameter blob.
    fn config_set(&self, cfg: &DaiConfig, bespoke: &[u8], dir: Direction)
        -> Result<(), DaiError>;

    /// Write the current configuration into `cfg`.
    ///
    /// # Errors
    ///
    /// [`DaiError::InvalidArgument`] when `cfg` is `None`.
    fn config_get(&self, cfg: Option<&mut DaiConfig>, dir: Direction) -> Result<(), DaiError>;

    /// Transfer properties for `stream_id` in direction `dir`.
    fn properties(&self, dir: Direction, stream_id: i32) -> DaiProperties;

    /// Issue a trigger command.
    fn trigger(&self, dir: Direction, cmd: TriggerCmd) -> Result<(), DaiError>;
}
