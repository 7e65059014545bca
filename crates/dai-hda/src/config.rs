//! HDA endpoint configuration and bring-up constants
//!
//! Values here are reported to the audio pipeline as-is; pipeline code
//! compares `DEFAULT_WORD_SIZE` bit-for-bit.

use dai::DaiKind;

/// Word size reported for every HDA endpoint, in bits.
pub const DEFAULT_WORD_SIZE: u8 = 16;

/// Length of the HDA protocol-specific parameter blob, in bytes.
pub const HDA_PARAMS_LEN: usize = 16;

/// Number of HDA links a registry is sized for by default.
pub const MAX_HDA_LINKS: usize = 8;

/// One enumerated hardware instance, as supplied at bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointDescriptor {
    /// Physical link instance index.
    pub index: u32,
    /// Protocol family fixed for the instance's lifetime.
    pub kind: DaiKind,
}

impl EndpointDescriptor {
    /// HDA-link instance at `index`.
    pub const fn hda(index: u32) -> Self {
        Self {
            index,
            kind: DaiKind::IntelHda,
        }
    }
}
