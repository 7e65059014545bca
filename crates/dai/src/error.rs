//! DAI driver error type.

use thiserror_no_std::Error;

use crate::trigger::DaiState;
use crate::types::TriggerCmd;

/// Errors returned by [`DaiDriver`](crate::DaiDriver) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiError {
    /// A required argument was absent (e.g. no output slot for `config_get`).
    #[error("invalid argument")]
    InvalidArgument,

    /// The protocol-specific parameter blob is shorter than its layout.
    #[error("parameter blob truncated: {len} bytes, {needed} required")]
    TruncatedBlob {
        /// Bytes supplied.
        len: usize,
        /// Bytes required by the layout.
        needed: usize,
    },

    /// Start requested before rate and channels were configured.
    #[error("endpoint not configured")]
    NotConfigured,

    /// Trigger command not allowed from the current lifecycle state.
    #[error("trigger {cmd:?} not allowed in state {state:?}")]
    InvalidTransition {
        /// State when the command arrived.
        state: DaiState,
        /// Rejected command.
        cmd: TriggerCmd,
    },
}
