//! A lamp bouncing back and forth across a row of lanes.
//!
//! One bit of the pattern is lit at a time. It walks toward the top lane,
//! reverses at the end, walks back down, and reverses again — the classic
//! chaser running across two LED8 PMODs in the reference design.

use glint_common::Frequency;

use crate::divider::ClockDivider;
use crate::error::LogicError;
use crate::Synchronous;

/// A one-hot lamp pattern stepping across `lanes` positions.
#[derive(Debug, Clone)]
pub struct Chaser {
    divider: ClockDivider,
    lanes: u32,
    pattern: u32,
    upward: bool,
}

impl Chaser {
    /// Builds a chaser stepping at `step` under `clock` across `lanes`
    /// positions (2 to 32). The lamp starts in lane 0, moving upward.
    pub fn new(clock: Frequency, step: Frequency, lanes: u32) -> Result<Self, LogicError> {
        if !(2..=32).contains(&lanes) {
            return Err(LogicError::InvalidLaneCount(lanes));
        }
        let divider = ClockDivider::from_rate(clock, step).map_err(LogicError::InvalidRate)?;
        Ok(Self {
            divider,
            lanes,
            pattern: 1,
            upward: true,
        })
    }

    /// The number of lanes.
    pub fn lanes(&self) -> u32 {
        self.lanes
    }

    /// Ticks between lamp movements.
    pub fn step_interval(&self) -> u64 {
        self.divider.interval()
    }

    fn top(&self) -> u32 {
        1 << (self.lanes - 1)
    }

    fn step(&mut self) {
        if self.upward {
            if self.pattern == self.top() {
                self.pattern >>= 1;
                self.upward = false;
            } else {
                self.pattern <<= 1;
            }
        } else if self.pattern == 1 {
            self.pattern <<= 1;
            self.upward = true;
        } else {
            self.pattern >>= 1;
        }
    }
}

impl Synchronous for Chaser {
    type Input = ();
    /// The lane lines; bit i drives lane i.
    type Output = u32;

    fn tick(&mut self, _input: ()) -> u32 {
        if self.divider.tick() {
            self.step();
        }
        self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A chaser that steps on every tick, for pattern-sequence tests.
    fn fast_chaser(lanes: u32) -> Chaser {
        Chaser::new(Frequency::from_hz(2.0), Frequency::from_hz(1.0), lanes).unwrap()
    }

    #[test]
    fn bounces_across_four_lanes() {
        let mut c = fast_chaser(4);
        let seen: Vec<u32> = (0..10).map(|_| c.tick(())).collect();
        assert_eq!(
            seen,
            vec![
                0b0010, 0b0100, 0b1000, // up
                0b0100, 0b0010, 0b0001, // down
                0b0010, 0b0100, 0b1000, // up again
                0b0100,
            ]
        );
    }

    #[test]
    fn exactly_one_lamp_lit() {
        let mut c = fast_chaser(16);
        for _ in 0..100 {
            assert_eq!(c.tick(()).count_ones(), 1);
        }
    }

    #[test]
    fn full_sweep_period() {
        // Across n lanes a full out-and-back takes 2(n - 1) steps.
        let mut c = fast_chaser(16);
        let seq: Vec<u32> = (0..90).map(|_| c.tick(())).collect();
        assert_eq!(seq[..30], seq[30..60]);
        assert_eq!(seq[30..60], seq[60..90]);
    }

    #[test]
    fn thirty_two_lanes_reach_the_top() {
        let mut c = fast_chaser(32);
        let mut best = 0u32;
        for _ in 0..64 {
            best = best.max(c.tick(()));
        }
        assert_eq!(best, 1 << 31);
    }

    #[test]
    fn respects_step_interval() {
        let mut c =
            Chaser::new(Frequency::from_mhz(12.0), Frequency::from_hz(25.0), 16).unwrap();
        assert_eq!(c.step_interval(), 240_000);
        for _ in 0..239_999 {
            assert_eq!(c.tick(()), 1);
        }
        assert_eq!(c.tick(()), 2);
    }

    #[test]
    fn rejects_bad_lane_counts() {
        let clock = Frequency::from_hz(100.0);
        let step = Frequency::from_hz(1.0);
        assert!(matches!(
            Chaser::new(clock, step, 1).unwrap_err(),
            LogicError::InvalidLaneCount(1)
        ));
        assert!(matches!(
            Chaser::new(clock, step, 33).unwrap_err(),
            LogicError::InvalidLaneCount(33)
        ));
    }
}
