//! HDA-link DAI controller.
//!
//! `HdaDai` is the operational surface over one [`InstanceStore`]: lifecycle
//! hooks, configuration exchange, property reporting and trigger dispatch.
//! It performs no hardware access; link bring-up and stream start/stop are
//! owned by the link/DMA layer, reachable through the [`TriggerHook`].
//!
//! Configuration addressed to a different DAI kind is accepted and ignored.
//! Callers cannot use the result of [`config_set`](DaiDriver::config_set)
//! to detect a kind mismatch.

use core::sync::atomic::{AtomicBool, Ordering};

use dai::{
    AckOnly, DaiConfig, DaiDriver, DaiError, DaiKind, DaiProperties, Direction, TriggerCmd,
    TriggerContext, TriggerHook,
};

use crate::config::EndpointDescriptor;
use crate::params::HdaParams;
use crate::store::{ConfigUpdate, InstanceStore};

/// DAI controller for one HDA link instance.
pub struct HdaDai<H = AckOnly> {
    store: InstanceStore,
    hook: H,
    probed: AtomicBool,
}

impl HdaDai<AckOnly> {
    /// Controller with the acknowledge-only trigger hook.
    pub const fn new(desc: EndpointDescriptor) -> Self {
        Self::with_hook(desc, AckOnly)
    }
}

impl<H: TriggerHook> HdaDai<H> {
    /// Controller dispatching trigger commands to `hook`.
    pub const fn with_hook(desc: EndpointDescriptor, hook: H) -> Self {
        Self {
            store: InstanceStore::new(desc.index, desc.kind),
            hook,
            probed: AtomicBool::new(false),
        }
    }

    /// Physical link index.
    pub fn index(&self) -> u32 {
        self.store.endpoint_index()
    }

    /// Protocol family.
    pub fn kind(&self) -> DaiKind {
        self.store.dai_kind()
    }

    /// Backing instance store.
    pub fn store(&self) -> &InstanceStore {
        &self.store
    }

    /// Installed trigger hook.
    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// `probe` has run and `remove` has not run since.
    pub fn is_probed(&self) -> bool {
        self.probed.load(Ordering::Acquire)
    }

    /// Configuration snapshot as reported by `config_get`.
    ///
    /// The HDA endpoint keeps one configuration for both directions.
    pub fn config(&self, _dir: Direction) -> DaiConfig {
        let ep = self.store.config();
        DaiConfig {
            rate: ep.sample_rate_hz,
            channels: ep.channel_count,
            word_size: ep.word_size,
            ..DaiConfig::new(ep.dai_kind, ep.endpoint_index)
        }
    }

    /// Apply already-decoded HDA parameters.
    pub fn apply_params(&self, params: HdaParams) {
        debug!(
            "hda{}: rate {} channels {} link dma {}",
            self.index(),
            params.rate,
            params.channels,
            params.link_dma_ch
        );
        self.store.apply(ConfigUpdate::from(params));
    }
}

impl<H: TriggerHook> DaiDriver for HdaDai<H> {
    fn probe(&self) -> Result<(), DaiError> {
        debug!("hda{}: probe", self.index());
        self.probed.store(true, Ordering::Release);
        Ok(())
    }

    fn remove(&self) -> Result<(), DaiError> {
        debug!("hda{}: remove", self.index());
        self.probed.store(false, Ordering::Release);
        Ok(())
    }

    fn config_set(
        &self,
        cfg: &DaiConfig,
        bespoke: &[u8],
        _dir: Direction,
    ) -> Result<(), DaiError> {
        if cfg.kind != self.kind() {
            trace!("hda{}: ignoring {} config", self.index(), cfg.kind.name());
            return Ok(());
        }
        let params = HdaParams::decode(bespoke)?;
        self.apply_params(params);
        Ok(())
    }

    fn config_get(&self, cfg: Option<&mut DaiConfig>, dir: Direction) -> Result<(), DaiError> {
        let out = cfg.ok_or(DaiError::InvalidArgument)?;
        *out = self.config(dir);
        Ok(())
    }

    fn properties(&self, _dir: Direction, _stream_id: i32) -> DaiProperties {
        self.store.properties()
    }

    fn trigger(&self, dir: Direction, cmd: TriggerCmd) -> Result<(), DaiError> {
        debug!("hda{} {:?}: cmd {:?}", self.index(), dir, cmd);
        let ctx = TriggerContext {
            kind: self.kind(),
            dai_index: self.index(),
            dir,
            configured: self.store.config().is_configured(),
        };
        self.hook.on_trigger(&ctx, cmd)
    }
}
