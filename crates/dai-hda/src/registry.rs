//! Endpoint registry.
//!
//! One [`HdaDai`] per enumerated HDA link, built once at bring-up from the
//! descriptors the enumeration layer supplies and looked up by link index.
//! Storage is a fixed-capacity `heapless::Vec`; nothing is allocated.

use dai::{AckOnly, DaiDriver, DaiError, TriggerHook};
use thiserror_no_std::Error;

use crate::config::{EndpointDescriptor, MAX_HDA_LINKS};
use crate::controller::HdaDai;

/// Bring-up errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Two descriptors named the same link index.
    #[error("duplicate endpoint index {0}")]
    DuplicateIndex(u32),

    /// More descriptors than the registry can hold.
    #[error("registry full ({capacity} endpoints)")]
    Full {
        /// Registry capacity.
        capacity: usize,
    },
}

/// Registry of HDA endpoints.
pub struct HdaDaiRegistry<H = AckOnly, const N: usize = { MAX_HDA_LINKS }> {
    endpoints: heapless::Vec<HdaDai<H>, N>,
}

impl<const N: usize> HdaDaiRegistry<AckOnly, N> {
    /// Build with the acknowledge-only hook on every endpoint.
    pub fn new(descriptors: &[EndpointDescriptor]) -> Result<Self, RegistryError> {
        Self::with_hooks(descriptors, |_| AckOnly)
    }
}

impl<H: TriggerHook, const N: usize> HdaDaiRegistry<H, N> {
    /// Build one controller per descriptor, asking `make_hook` for each
    /// endpoint's trigger hook.
    pub fn with_hooks<F>(
        descriptors: &[EndpointDescriptor],
        mut make_hook: F,
    ) -> Result<Self, RegistryError>
    where
        F: FnMut(&EndpointDescriptor) -> H,
    {
        let mut endpoints: heapless::Vec<HdaDai<H>, N> = heapless::Vec::new();
        for desc in descriptors {
            if endpoints.iter().any(|ep| ep.index() == desc.index) {
                warn!("hda{}: duplicate endpoint descriptor", desc.index);
                return Err(RegistryError::DuplicateIndex(desc.index));
            }
            let dai = HdaDai::with_hook(*desc, make_hook(desc));
            if endpoints.push(dai).is_err() {
                return Err(RegistryError::Full { capacity: N });
            }
            debug!("hda{}: registered", desc.index);
        }
        Ok(Self { endpoints })
    }

    /// Endpoint for link `index`.
    pub fn get(&self, index: u32) -> Option<&HdaDai<H>> {
        self.endpoints.iter().find(|ep| ep.index() == index)
    }

    /// Endpoints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &HdaDai<H>> {
        self.endpoints.iter()
    }

    /// Number of endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// No endpoints registered.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Probe every endpoint, stopping at the first failure.
    pub fn probe_all(&self) -> Result<(), DaiError> {
        self.endpoints.iter().try_for_each(|ep| ep.probe())
    }

    /// Remove every endpoint in reverse registration order.
    pub fn remove_all(&self) -> Result<(), DaiError> {
        self.endpoints.iter().rev().try_for_each(|ep| ep.remove())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_index() {
        let reg: HdaDaiRegistry = HdaDaiRegistry::new(&[
            EndpointDescriptor::hda(2),
            EndpointDescriptor::hda(0),
        ])
        .unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(0).map(HdaDai::index), Some(0));
        assert_eq!(reg.get(2).map(HdaDai::index), Some(2));
        assert!(reg.get(1).is_none());
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let res: Result<HdaDaiRegistry, _> = HdaDaiRegistry::new(&[
            EndpointDescriptor::hda(1),
            EndpointDescriptor::hda(1),
        ]);
        assert_eq!(res.err(), Some(RegistryError::DuplicateIndex(1)));
    }

    #[test]
    fn overflow_is_rejected() {
        let res = HdaDaiRegistry::<AckOnly, 1>::new(&[
            EndpointDescriptor::hda(0),
            EndpointDescriptor::hda(1),
        ]);
        assert_eq!(res.err(), Some(RegistryError::Full { capacity: 1 }));
    }

    #[test]
    fn empty_registry() {
        let reg: HdaDaiRegistry = HdaDaiRegistry::new(&[]).unwrap();
        assert!(reg.is_empty());
        assert_eq!(reg.probe_all(), Ok(()));
    }
}
