//! HDA protocol-specific parameter blob.
//!
//! Layout, four little-endian `u32` words:
//!
//! | Offset | Field         |
//! |--------|---------------|
//! | 0      | reserved      |
//! | 4      | `link_dma_ch` |
//! | 8      | `rate`        |
//! | 12     | `channels`    |

use core::ops::Range;

use dai::DaiError;

use crate::config::HDA_PARAMS_LEN;
use crate::store::ConfigUpdate;

const LINK_DMA_CH: Range<usize> = 4..8;
const RATE: Range<usize> = 8..12;
const CHANNELS: Range<usize> = 12..16;

/// Decoded HDA parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HdaParams {
    /// Link DMA channel chosen by the host. Informational only.
    pub link_dma_ch: u32,
    /// Sample rate in Hz, 0 leaves the stored rate unchanged.
    pub rate: u32,
    /// Channel count, 0 leaves the stored count unchanged.
    pub channels: u32,
}

impl HdaParams {
    /// Decode the first [`HDA_PARAMS_LEN`] bytes of `blob`. Trailing bytes
    /// are ignored.
    ///
    /// # Errors
    ///
    /// [`DaiError::TruncatedBlob`] when `blob` is shorter than the layout.
    pub fn decode(blob: &[u8]) -> Result<Self, DaiError> {
        let truncated = DaiError::TruncatedBlob {
            len: blob.len(),
            needed: HDA_PARAMS_LEN,
        };
        let words = blob.get(..HDA_PARAMS_LEN).ok_or(truncated)?;

        Ok(Self {
            link_dma_ch: word(words, LINK_DMA_CH).ok_or(truncated)?,
            rate: word(words, RATE).ok_or(truncated)?,
            channels: word(words, CHANNELS).ok_or(truncated)?,
        })
    }

    /// Encode into the wire layout, reserved word zero.
    pub fn to_bytes(&self) -> [u8; HDA_PARAMS_LEN] {
        let mut out = [0u8; HDA_PARAMS_LEN];
        for (range, value) in [
            (LINK_DMA_CH, self.link_dma_ch),
            (RATE, self.rate),
            (CHANNELS, self.channels),
        ] {
            if let Some(dst) = out.get_mut(range) {
                dst.copy_from_slice(&value.to_le_bytes());
            }
        }
        out
    }
}

impl From<HdaParams> for ConfigUpdate {
    fn from(p: HdaParams) -> Self {
        ConfigUpdate {
            sample_rate_hz: p.rate,
            channel_count: p.channels,
        }
    }
}

fn word(bytes: &[u8], range: Range<usize>) -> Option<u32> {
    let raw: [u8; 4] = bytes.get(range)?.try_into().ok()?;
    Some(u32::from_le_bytes(raw))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_little_endian_words() {
        let blob = [
            0xAA, 0xAA, 0xAA, 0xAA, // reserved
            0x03, 0x00, 0x00, 0x00, // link_dma_ch = 3
            0x80, 0xBB, 0x00, 0x00, // rate = 48000
            0x02, 0x00, 0x00, 0x00, // channels = 2
        ];
        let p = HdaParams::decode(&blob).unwrap();
        assert_eq!(p.link_dma_ch, 3);
        assert_eq!(p.rate, 48_000);
        assert_eq!(p.channels, 2);
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut blob = [0u8; 20];
        blob[8] = 0x44;
        blob[9] = 0xAC;
        blob[19] = 0xFF;
        assert_eq!(HdaParams::decode(&blob).unwrap().rate, 44_100);
    }

    #[test]
    fn short_blob_is_rejected() {
        assert_eq!(
            HdaParams::decode(&[0u8; 12]),
            Err(DaiError::TruncatedBlob { len: 12, needed: 16 })
        );
    }

    #[test]
    fn to_bytes_matches_layout() {
        let p = HdaParams {
            link_dma_ch: 1,
            rate: 96_000,
            channels: 8,
        };
        let b = p.to_bytes();
        assert_eq!(&b[..4], &[0, 0, 0, 0]);
        assert_eq!(HdaParams::decode(&b).unwrap(), p);
    }

    #[test]
    fn update_takes_rate_and_channels_only() {
        let u = ConfigUpdate::from(HdaParams {
            link_dma_ch: 7,
            rate: 16_000,
            channels: 1,
        });
        assert_eq!(u.sample_rate_hz, 16_000);
        assert_eq!(u.channel_count, 1);
    }
}
