//! DAI vocabulary shared by every interface kind.

/// Protocol family of a DAI endpoint.
///
/// Discriminants follow the DAI driver model numbering so that values
/// received from topology can be mapped with [`DaiKind::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DaiKind {
    /// Generic I2S controller.
    LegacyI2s = 0,
    /// Intel SSP port.
    IntelSsp = 1,
    /// Intel digital microphone interface.
    IntelDmic = 2,
    /// Intel High-Definition Audio link.
    IntelHda = 3,
    /// Intel audio link hub (SoundWire).
    IntelAlh = 4,
    /// NXP i.MX SAI.
    ImxSai = 5,
    /// NXP i.MX ESAI.
    ImxEsai = 6,
}

impl DaiKind {
    /// Map a raw topology value to a kind, `None` for unknown values.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::LegacyI2s),
            1 => Some(Self::IntelSsp),
            2 => Some(Self::IntelDmic),
            3 => Some(Self::IntelHda),
            4 => Some(Self::IntelAlh),
            5 => Some(Self::ImxSai),
            6 => Some(Self::ImxEsai),
            _ => None,
        }
    }

    /// Short display name used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LegacyI2s => "i2s",
            Self::IntelSsp => "ssp",
            Self::IntelDmic => "dmic",
            Self::IntelHda => "hda",
            Self::IntelAlh => "alh",
            Self::ImxSai => "sai",
            Self::ImxEsai => "esai",
        }
    }
}

/// Data direction of a DAI operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Playback: memory to link.
    Tx,
    /// Capture: link to memory.
    Rx,
}

impl Direction {
    /// Both directions, in slot order.
    pub const ALL: [Direction; 2] = [Direction::Tx, Direction::Rx];

    /// Slot used by per-direction tables.
    pub const fn slot(self) -> usize {
        match self {
            Self::Tx => 0,
            Self::Rx => 1,
        }
    }
}

/// Trigger command issued by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerCmd {
    /// Start data transfer.
    Start,
    /// Prepare for a start.
    PreStart,
    /// Stop data transfer.
    Stop,
    /// Pause data transfer, keeping the stream prepared.
    Pause,
    /// Stream stopped, tear down link resources.
    PostStop,
    /// Prepare to resume after a pause.
    PreRelease,
    /// Drop pending data and return to the configured state.
    Drop,
    /// Data copy request while running.
    Copy,
}

impl TriggerCmd {
    /// Every defined command.
    pub const ALL: [TriggerCmd; 8] = [
        TriggerCmd::Start,
        TriggerCmd::PreStart,
        TriggerCmd::Stop,
        TriggerCmd::Pause,
        TriggerCmd::PostStop,
        TriggerCmd::PreRelease,
        TriggerCmd::Drop,
        TriggerCmd::Copy,
    ];
}

/// Full DAI configuration as exchanged with the audio pipeline.
///
/// `kind` and `dai_index` identify the endpoint. Fields an interface kind
/// does not use are reported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DaiConfig {
    /// Protocol family.
    pub kind: DaiKind,
    /// Physical instance index.
    pub dai_index: u32,
    /// Sample rate in Hz, 0 when unset.
    pub rate: u32,
    /// Channel count, 0 when unset.
    pub channels: u32,
    /// Sample container width in bits.
    pub word_size: u8,
    /// Frame format bits.
    pub format: u16,
    /// Kind-specific option flags.
    pub options: u8,
    /// Transfer block size in bytes.
    pub block_size: u32,
    /// Link configuration word.
    pub link_config: u16,
}

impl DaiConfig {
    /// Empty configuration addressed to `kind`/`dai_index`.
    pub const fn new(kind: DaiKind, dai_index: u32) -> Self {
        Self {
            kind,
            dai_index,
            rate: 0,
            channels: 0,
            word_size: 0,
            format: 0,
            options: 0,
            block_size: 0,
            link_config: 0,
        }
    }
}

/// Link-layer transfer properties consumed by the DMA subsystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DaiProperties {
    /// FIFO register address the DMA engine targets.
    pub fifo_address: u32,
    /// DMA handshake id.
    pub dma_hs_id: u32,
    /// Link stream id.
    pub stream_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dai_kind_raw_round_trips_every_variant() {
        for raw in 0u8..=6 {
            let kind = DaiKind::from_raw(raw);
            assert_eq!(kind.map(|k| k as u8), Some(raw));
        }
        assert_eq!(DaiKind::from_raw(7), None);
    }

    #[test]
    fn hda_kind_name() {
        assert_eq!(DaiKind::IntelHda.name(), "hda");
    }

    #[test]
    fn direction_slots_are_distinct() {
        assert_eq!(Direction::Tx.slot(), 0);
        assert_eq!(Direction::Rx.slot(), 1);
    }

    #[test]
    fn new_config_is_zeroed_apart_from_identity() {
        let cfg = DaiConfig::new(DaiKind::IntelHda, 3);
        assert_eq!(cfg.kind, DaiKind::IntelHda);
        assert_eq!(cfg.dai_index, 3);
        assert_eq!(cfg.rate, 0);
        assert_eq!(cfg.channels, 0);
        assert_eq!(cfg.word_size, 0);
    }

    #[test]
    fn default_properties_are_zero() {
        let p = DaiProperties::default();
        assert_eq!(p.fifo_address, 0);
        assert_eq!(p.dma_hs_id, 0);
        assert_eq!(p.stream_id, 0);
    }
}
