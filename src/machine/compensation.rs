//! Scoped suspension of bed-leveling compensation.

use super::Compensation;

/// Disables compensation for as long as it lives.
///
/// On drop the previous enabled/disabled state is written back exactly once,
/// whichever way the run ends.
pub struct CompensationSuspended<'a, C: Compensation> {
    layer: &'a mut C,
    was_enabled: bool,
}

impl<'a, C: Compensation> CompensationSuspended<'a, C> {
    /// Save the current state and disable compensation.
    pub fn new(layer: &'a mut C) -> Self {
        let was_enabled = layer.is_enabled();
        layer.set_enabled(false);
        debug!("compensation suspended (was enabled: {})", was_enabled);
        Self { layer, was_enabled }
    }

    /// State that will be restored.
    #[inline]
    pub fn was_enabled(&self) -> bool {
        self.was_enabled
    }
}

impl<C: Compensation> Drop for CompensationSuspended<'_, C> {
    fn drop(&mut self) {
        self.layer.set_enabled(self.was_enabled);
        debug!("compensation restored (enabled: {})", self.was_enabled);
    }
}

/// Stand-in for machines without bed leveling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompensation;

impl Compensation for NoCompensation {
    fn is_enabled(&self) -> bool {
        false
    }

    fn set_enabled(&mut self, _enabled: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flag {
        enabled: bool,
        writes: heapless::Vec<bool, 8>,
    }

    impl Compensation for Flag {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            let _ = self.writes.push(enabled);
        }
    }

    #[test]
    fn test_restores_enabled_state() {
        let mut flag = Flag {
            enabled: true,
            ..Default::default()
        };
        {
            let guard = CompensationSuspended::new(&mut flag);
            assert!(guard.was_enabled());
        }
        assert!(flag.enabled);
        assert_eq!(flag.writes.as_slice(), &[false, true]);
    }

    #[test]
    fn test_restores_disabled_state() {
        let mut flag = Flag::default();
        drop(CompensationSuspended::new(&mut flag));
        assert!(!flag.enabled);
        assert_eq!(flag.writes.as_slice(), &[false, false]);
    }
}
