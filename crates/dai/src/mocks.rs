//! Mock trigger hook for host-side tests
//!
//! Records every command it sees so tests can assert what the controller
//! forwarded, and can be told to reject one command.

#![cfg(any(test, feature = "std"))]

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::error::DaiError;
use crate::trigger::{DaiState, TriggerContext, TriggerHook};
use crate::types::{Direction, TriggerCmd};

/// Maximum number of commands kept; later ones are dropped.
pub const RECORD_CAPACITY: usize = 64;

/// Recording hook.
pub struct RecordingHook {
    seen: Mutex<CriticalSectionRawMutex, RefCell<heapless::Vec<(Direction, TriggerCmd), RECORD_CAPACITY>>>,
    reject: Option<TriggerCmd>,
}

impl RecordingHook {
    /// Hook that accepts everything.
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(RefCell::new(heapless::Vec::new())),
            reject: None,
        }
    }

    /// Hook that rejects `cmd` with `InvalidTransition` and accepts the rest.
    pub fn rejecting(cmd: TriggerCmd) -> Self {
        Self {
            reject: Some(cmd),
            ..Self::new()
        }
    }

    /// Commands seen so far, oldest first.
    pub fn seen(&self) -> heapless::Vec<(Direction, TriggerCmd), RECORD_CAPACITY> {
        self.seen.lock(|s| s.borrow().clone())
    }

    /// Number of commands seen.
    pub fn count(&self) -> usize {
        self.seen.lock(|s| s.borrow().len())
    }
}

impl Default for RecordingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerHook for RecordingHook {
    fn on_trigger(&self, ctx: &TriggerContext, cmd: TriggerCmd) -> Result<(), DaiError> {
        self.seen.lock(|s| {
            let _ = s.borrow_mut().push((ctx.dir, cmd));
        });
        if self.reject == Some(cmd) {
            return Err(DaiError::InvalidTransition {
                state: DaiState::Unconfigured,
                cmd,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DaiKind;

    fn ctx() -> TriggerContext {
        TriggerContext {
            kind: DaiKind::IntelHda,
            dai_index: 1,
            dir: Direction::Rx,
            configured: false,
        }
    }

    #[test]
    fn records_in_order() {
        let hook = RecordingHook::new();
        let _ = hook.on_trigger(&ctx(), TriggerCmd::Start);
        let _ = hook.on_trigger(&ctx(), TriggerCmd::Stop);
        assert_eq!(
            hook.seen().as_slice(),
            &[(Direction::Rx, TriggerCmd::Start), (Direction::Rx, TriggerCmd::Stop)]
        );
    }

    #[test]
    fn rejecting_hook_still_records() {
        let hook = RecordingHook::rejecting(TriggerCmd::Pause);
        assert!(hook.on_trigger(&ctx(), TriggerCmd::Pause).is_err());
        assert_eq!(hook.count(), 1);
    }
}
