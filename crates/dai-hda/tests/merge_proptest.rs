//! Property-based tests for configuration merging.
//! A stored field always equals the last non-zero value applied to it.

use dai::{DaiConfig, DaiDriver, DaiKind, Direction};
use dai_hda::{ConfigUpdate, EndpointDescriptor, HdaDai, HdaParams, InstanceStore};
use proptest::prelude::*;

/// Zero roughly a third of the time so the "unchanged" path is exercised.
fn field() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), 1u32..=u32::MAX, 8_000u32..=192_000u32]
}

proptest! {
    #[test]
    fn store_field_is_last_non_zero(updates in proptest::collection::vec((field(), field()), 0..32)) {
        let store = InstanceStore::new(0, DaiKind::IntelHda);
        for &(rate, channels) in &updates {
            store.apply(ConfigUpdate { sample_rate_hz: rate, channel_count: channels });
        }
        let last_rate = updates.iter().rev().map(|u| u.0).find(|&r| r != 0).unwrap_or(0);
        let last_channels = updates.iter().rev().map(|u| u.1).find(|&c| c != 0).unwrap_or(0);

        let cfg = store.config();
        prop_assert_eq!(cfg.sample_rate_hz, last_rate);
        prop_assert_eq!(cfg.channel_count, last_channels);
        prop_assert_eq!(cfg.endpoint_index, 0);
        prop_assert_eq!(cfg.dai_kind, DaiKind::IntelHda);
    }

    #[test]
    fn properties_are_pure(rate in field(), channels in field(), stream_id in any::<i32>()) {
        let dai = HdaDai::new(EndpointDescriptor::hda(0));
        dai.store().apply(ConfigUpdate { sample_rate_hz: rate, channel_count: channels });
        let before = dai.store().config();
        let a = dai.properties(Direction::Tx, stream_id);
        let b = dai.properties(Direction::Tx, stream_id);
        prop_assert_eq!(a, b);
        prop_assert_eq!(dai.store().config(), before);
    }

    #[test]
    fn config_set_blob_merges_like_apply(rate in field(), channels in field(), link in any::<u32>()) {
        let dai = HdaDai::new(EndpointDescriptor::hda(2));
        dai.store().apply(ConfigUpdate { sample_rate_hz: 48_000, channel_count: 2 });

        let blob = HdaParams { link_dma_ch: link, rate, channels }.to_bytes();
        prop_assert!(dai.config_set(&DaiConfig::new(DaiKind::IntelHda, 2), &blob, Direction::Tx).is_ok());

        let cfg = dai.config(Direction::Tx);
        prop_assert_eq!(cfg.rate, if rate == 0 { 48_000 } else { rate });
        prop_assert_eq!(cfg.channels, if channels == 0 { 2 } else { channels });
    }
}
