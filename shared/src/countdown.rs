use serde::{Serialize, Deserialize};

/// One-second-tick reservation countdown shown after the jackpot.
/// Decrements to zero and holds there, never going negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_secs: u32,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self { remaining_secs: secs }
    }

    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Renders the remaining time as zero-padded MM:SS.
    pub fn format(&self) -> String {
        format_time(self.remaining_secs)
    }
}

pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COUNTDOWN_INITIAL_SECS;

    #[test]
    fn test_initial_format() {
        let countdown = Countdown::new(COUNTDOWN_INITIAL_SECS);
        assert_eq!(countdown.format(), "14:59");
    }

    #[test]
    fn test_counts_down_and_holds_at_zero() {
        let mut countdown = Countdown::new(COUNTDOWN_INITIAL_SECS);
        for _ in 0..COUNTDOWN_INITIAL_SECS {
            assert!(!countdown.is_elapsed());
            countdown.tick();
        }
        assert_eq!(countdown.remaining_secs(), 0);
        assert_eq!(countdown.format(), "00:00");

        // Extra ticks must not wrap below zero.
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(countdown.is_elapsed());
    }

    #[test]
    fn test_format_time_padding() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(899), "14:59");
    }
}
