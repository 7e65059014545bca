//! Trigger extension point.
//!
//! A DAI controller acknowledges trigger commands itself and hands them to a
//! [`TriggerHook`]. The link/DMA layer that actually starts and stops data
//! flow plugs in here without changing the controller's public contract.
//!
//! Two hooks ship with the crate:
//!
//! - [`AckOnly`] accepts every command in any order. This is the default.
//! - [`LifecycleGate`] tracks the nominal per-direction lifecycle and rejects
//!   out-of-order commands. Opt-in: it changes observable behaviour.
//!
//! ```text
//! Unconfigured ──(rate+channels set)──► Configured
//! Configured ──PreStart──► Prepared ──Start──► Running
//! Configured ─────────────Start──────────────► Running
//! Running ──Pause──► Paused ──PreRelease──► Prepared
//! Running | Paused | Prepared ──Stop──► Stopped ──Start──► Running
//! Prepared | Paused | Stopped ──Drop──► Configured
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::error::DaiError;
use crate::types::{DaiKind, Direction, TriggerCmd};

/// What a hook knows about the endpoint a command is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerContext {
    /// Endpoint protocol family.
    pub kind: DaiKind,
    /// Endpoint instance index.
    pub dai_index: u32,
    /// Direction the command targets.
    pub dir: Direction,
    /// Rate and channel count are both set.
    pub configured: bool,
}

/// Link start/stop strategy invoked by a DAI controller on every trigger.
pub trait TriggerHook {
    /// Handle `cmd`. An `Err` is returned to the pipeline unchanged.
    fn on_trigger(&self, ctx: &TriggerContext, cmd: TriggerCmd) -> Result<(), DaiError>;
}

impl<T: TriggerHook + ?Sized> TriggerHook for &T {
    fn on_trigger(&self, ctx: &TriggerContext, cmd: TriggerCmd) -> Result<(), DaiError> {
        (**self).on_trigger(ctx, cmd)
    }
}

/// Acknowledge-only hook: every command succeeds, nothing changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AckOnly;

impl TriggerHook for AckOnly {
    fn on_trigger(&self, _ctx: &TriggerContext, _cmd: TriggerCmd) -> Result<(), DaiError> {
        Ok(())
    }
}

/// Nominal lifecycle of one direction of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiState {
    /// Rate or channel count still unset.
    Unconfigured,
    /// Configured, no stream prepared.
    Configured,
    /// Ready to start.
    Prepared,
    /// Transferring data.
    Running,
    /// Paused, stream kept.
    Paused,
    /// Stopped after running.
    Stopped,
}

impl DaiState {
    /// Next state after `cmd`, or the reason it is rejected.
    ///
    /// `configured` lifts `Unconfigured` to `Configured` before the command
    /// is evaluated, so configuration applied through `config_set` needs no
    /// separate notification.
    pub fn next(self, configured: bool, cmd: TriggerCmd) -> Result<DaiState, DaiError> {
        use DaiState::{Configured, Paused, Prepared, Running, Stopped, Unconfigured};

        let state = match self {
            Unconfigured if configured => Configured,
            other => other,
        };

        match (state, cmd) {
            (Unconfigured, TriggerCmd::Start | TriggerCmd::PreStart) => {
                Err(DaiError::NotConfigured)
            }
            (Configured | Stopped, TriggerCmd::PreStart) => Ok(Prepared),
            (Configured | Prepared | Stopped, TriggerCmd::Start) => Ok(Running),
            (Running, TriggerCmd::Pause) => Ok(Paused),
            (Paused, TriggerCmd::PreRelease) => Ok(Prepared),
            (Running | Paused | Prepared, TriggerCmd::Stop) => Ok(Stopped),
            (Stopped, TriggerCmd::PostStop) => Ok(Stopped),
            (Prepared | Paused | Stopped, TriggerCmd::Drop) => Ok(Configured),
            (Running, TriggerCmd::Copy) => Ok(Running),
            (state, cmd) => Err(DaiError::InvalidTransition { state, cmd }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PerDirection {
    tx: DaiState,
    rx: DaiState,
}

impl PerDirection {
    const fn new() -> Self {
        Self {
            tx: DaiState::Unconfigured,
            rx: DaiState::Unconfigured,
        }
    }

    fn get(self, dir: Direction) -> DaiState {
        match dir {
            Direction::Tx => self.tx,
            Direction::Rx => self.rx,
        }
    }

    fn set(&mut self, dir: Direction, state: DaiState) {
        match dir {
            Direction::Tx => self.tx = state,
            Direction::Rx => self.rx = state,
        }
    }
}

/// Hook enforcing the nominal lifecycle per direction.
///
/// A rejected command leaves the state untouched.
pub struct LifecycleGate {
    states: Mutex<CriticalSectionRawMutex, Cell<PerDirection>>,
}

impl LifecycleGate {
    /// Both directions start `Unconfigured`.
    pub const fn new() -> Self {
        Self {
            states: Mutex::new(Cell::new(PerDirection::new())),
        }
    }

    /// Current state of direction `dir`.
    pub fn state(&self, dir: Direction) -> DaiState {
        self.states.lock(|s| s.get().get(dir))
    }

    /// Return both directions to `Unconfigured`.
    pub fn reset(&self) {
        self.states.lock(|s| s.set(PerDirection::new()));
    }
}

impl Default for LifecycleGate {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerHook for LifecycleGate {
    fn on_trigger(&self, ctx: &TriggerContext, cmd: TriggerCmd) -> Result<(), DaiError> {
        self.states.lock(|cell| {
            let mut states = cell.get();
            let current = states.get(ctx.dir);
            match current.next(ctx.configured, cmd) {
                Ok(next) => {
                    trace!("dai {} {:?}: {:?} -> {:?}", ctx.dai_index, ctx.dir, current, next);
                    states.set(ctx.dir, next);
                    cell.set(states);
                    Ok(())
                }
                Err(e) => {
                    warn!("dai {} {:?}: {:?} rejected in {:?}", ctx.dai_index, ctx.dir, cmd, current);
                    Err(e)
                }
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ctx(configured: bool) -> TriggerContext {
        TriggerContext {
            kind: DaiKind::IntelHda,
            dai_index: 0,
            dir: Direction::Tx,
            configured,
        }
    }

    #[test]
    fn ack_only_accepts_every_command_unconfigured() {
        for cmd in TriggerCmd::ALL {
            assert_eq!(AckOnly.on_trigger(&ctx(false), cmd), Ok(()));
        }
    }

    #[test]
    fn start_before_configuration_is_rejected() {
        assert_eq!(
            DaiState::Unconfigured.next(false, TriggerCmd::Start),
            Err(DaiError::NotConfigured)
        );
    }

    #[test]
    fn configuration_lifts_unconfigured() {
        assert_eq!(
            DaiState::Unconfigured.next(true, TriggerCmd::PreStart),
            Ok(DaiState::Prepared)
        );
    }

    #[test]
    fn pause_requires_running() {
        assert_eq!(
            DaiState::Prepared.next(true, TriggerCmd::Pause),
            Err(DaiError::InvalidTransition {
                state: DaiState::Prepared,
                cmd: TriggerCmd::Pause,
            })
        );
    }

    #[test]
    fn nominal_sequence_is_accepted() {
        let gate = LifecycleGate::new();
        let c = ctx(true);
        for cmd in [
            TriggerCmd::PreStart,
            TriggerCmd::Start,
            TriggerCmd::Copy,
            TriggerCmd::Pause,
            TriggerCmd::PreRelease,
            TriggerCmd::Start,
            TriggerCmd::Stop,
            TriggerCmd::PostStop,
        ] {
            gate.on_trigger(&c, cmd).unwrap();
        }
        assert_eq!(gate.state(Direction::Tx), DaiState::Stopped);
        assert_eq!(gate.state(Direction::Rx), DaiState::Unconfigured);
    }

    #[test]
    fn rejected_command_keeps_state() {
        let gate = LifecycleGate::new();
        let c = ctx(true);
        gate.on_trigger(&c, TriggerCmd::Start).unwrap();
        assert!(gate.on_trigger(&c, TriggerCmd::PreRelease).is_err());
        assert_eq!(gate.state(Direction::Tx), DaiState::Running);
    }

    #[test]
    fn reset_returns_to_unconfigured() {
        let gate = LifecycleGate::new();
        gate.on_trigger(&ctx(true), TriggerCmd::Start).unwrap();
        gate.reset();
        assert_eq!(gate.state(Direction::Tx), DaiState::Unconfigured);
    }
}
