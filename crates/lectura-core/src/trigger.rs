use crate::config::EffectConfig;

/// Deterministic "every Nth reveal" gate.
///
/// `count` always stays in `[0, interval)`. A call returns `true` exactly
/// when the post-increment count wraps back to zero.
#[derive(Clone, Debug, Default)]
pub struct TriggerCounter {
    count: u32,
}

impl TriggerCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn on_reveal(&mut self, config: &EffectConfig) -> bool {
        if !config.enabled() {
            self.count = 0;
            return false;
        }
        let interval = config.trigger_interval().max(1);
        self.count = (self.count + 1) % interval;
        let fire = self.count == 0;
        log::debug!(
            "[trigger] count={} interval={} fire={}",
            self.count,
            interval,
            fire
        );
        fire
    }
}
