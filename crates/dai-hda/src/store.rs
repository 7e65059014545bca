//! Per-endpoint instance store.
//!
//! Owns the mutable stream parameters of one HDA endpoint. Every access runs
//! inside a critical section, so a control task and a reconfiguration path
//! may share one store without external locking. No policy lives here: the
//! store never rejects a value.

use core::cell::Cell;

use dai::{DaiKind, DaiProperties};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::config::DEFAULT_WORD_SIZE;

/// Snapshot of an endpoint's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointConfig {
    /// Protocol family, fixed at construction.
    pub dai_kind: DaiKind,
    /// Physical link index, fixed at construction.
    pub endpoint_index: u32,
    /// Sample rate in Hz, 0 when unset.
    pub sample_rate_hz: u32,
    /// Channel count, 0 when unset.
    pub channel_count: u32,
    /// Always [`DEFAULT_WORD_SIZE`].
    pub word_size: u8,
}

impl EndpointConfig {
    /// Rate and channel count are both set.
    pub fn is_configured(&self) -> bool {
        self.sample_rate_hz != 0 && self.channel_count != 0
    }
}

/// Partial configuration; zero fields leave the stored value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigUpdate {
    /// New sample rate in Hz, or 0.
    pub sample_rate_hz: u32,
    /// New channel count, or 0.
    pub channel_count: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct StreamParams {
    rate: u32,
    channels: u32,
}

/// Instance store for one endpoint.
pub struct InstanceStore {
    endpoint_index: u32,
    dai_kind: DaiKind,
    params: Mutex<CriticalSectionRawMutex, Cell<StreamParams>>,
}

impl InstanceStore {
    /// Create a store with rate and channels unset.
    pub const fn new(endpoint_index: u32, dai_kind: DaiKind) -> Self {
        Self {
            endpoint_index,
            dai_kind,
            params: Mutex::new(Cell::new(StreamParams {
                rate: 0,
                channels: 0,
            })),
        }
    }

    /// Physical link index.
    pub fn endpoint_index(&self) -> u32 {
        self.endpoint_index
    }

    /// Protocol family.
    pub fn dai_kind(&self) -> DaiKind {
        self.dai_kind
    }

    /// Current configuration.
    pub fn config(&self) -> EndpointConfig {
        let p = self.params.lock(Cell::get);
        EndpointConfig {
            dai_kind: self.dai_kind,
            endpoint_index: self.endpoint_index,
            sample_rate_hz: p.rate,
            channel_count: p.channels,
            word_size: DEFAULT_WORD_SIZE,
        }
    }

    /// Merge the non-zero fields of `update` into the stored configuration.
    pub fn apply(&self, update: ConfigUpdate) {
        self.params.lock(|cell| {
            let mut p = cell.get();
            if update.channel_count != 0 {
                p.channels = update.channel_count;
            }
            if update.sample_rate_hz != 0 {
                p.rate = update.sample_rate_hz;
            }
            cell.set(p);
        });
    }

    /// Transfer properties derived from the current configuration.
    ///
    /// The HDA link owns FIFO, handshake and stream assignment, so every
    /// field reads zero until the link layer supplies real values.
    pub fn properties(&self) -> DaiProperties {
        self.params.lock(|_| DaiProperties {
            fifo_address: 0,
            dma_hs_id: 0,
            stream_id: 0,
        })
    }
}
