use super::node::NodeStatus;

/// The counter wraps here; one full swing of the oscillation
const PULSE_PERIOD: u32 = 60;
const PULSE_AMPLITUDE: f32 = 0.15;
const PULSE_FREQUENCY: f32 = 0.2;

/// Free-running tick counter behind the malicious-node throb.
///
/// Runs on its own short timer, independent of the reveal schedule, and
/// only ever feeds the renderer a scale factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulseClock {
    tick: u32,
}

impl PulseClock {
    pub fn new() -> Self {
        PulseClock::default()
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Step the counter, wrapping modulo the period
    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % PULSE_PERIOD;
    }

    /// Current sinusoidal scale for a throbbing node
    pub fn scale(&self) -> f32 {
        1.0 + PULSE_AMPLITUDE * (PULSE_FREQUENCY * self.tick as f32).sin()
    }

    /// Scale to render a node at: revealed targets throb, everything else
    /// stays at unit scale
    pub fn scale_for(&self, status: NodeStatus) -> f32 {
        if status.is_malicious() {
            self.scale()
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_at_period() {
        let mut clock = PulseClock::new();
        for _ in 0..PULSE_PERIOD {
            clock.advance();
        }
        assert_eq!(clock.tick(), 0);

        clock.advance();
        assert_eq!(clock.tick(), 1);
    }

    #[test]
    fn test_scale_stays_in_band() {
        let mut clock = PulseClock::new();
        for _ in 0..PULSE_PERIOD {
            let s = clock.scale();
            assert!(s >= 1.0 - PULSE_AMPLITUDE - 1e-6);
            assert!(s <= 1.0 + PULSE_AMPLITUDE + 1e-6);
            clock.advance();
        }
    }

    #[test]
    fn test_clean_nodes_do_not_throb() {
        let mut clock = PulseClock::new();
        clock.advance();
        clock.advance();
        clock.advance();

        assert_eq!(clock.scale_for(NodeStatus::Clean), 1.0);
        assert_eq!(clock.scale_for(NodeStatus::Identified), clock.scale());
        assert_eq!(clock.scale_for(NodeStatus::Unidentified), clock.scale());
    }

    #[test]
    fn test_fresh_clock_is_unit_scale() {
        let clock = PulseClock::new();
        assert_eq!(clock.scale(), 1.0);
    }
}
