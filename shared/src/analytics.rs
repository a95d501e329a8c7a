use serde::{Serialize, Deserialize};

use crate::constants::PROMO_CODE;

/// Named analytics events emitted by the slot machine. Delivery is the
/// frontend's concern and is always fire-and-forget; these only define the
/// wire names and payloads the trackers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackedEvent {
    SpinAttempted { spin_number: u32 },
    JackpotReached { spins_to_win: u32 },
    PromoCodeCopied,
    CtaClicked,
}

impl TrackedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackedEvent::SpinAttempted { .. } => "slot_spin",
            TrackedEvent::JackpotReached { .. } => "slot_jackpot",
            TrackedEvent::PromoCodeCopied => "promo_code_copied",
            TrackedEvent::CtaClicked => "cta_click",
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            TrackedEvent::SpinAttempted { spin_number } => {
                vec![("spin_number", spin_number.to_string())]
            }
            TrackedEvent::JackpotReached { spins_to_win } => {
                vec![("spins_to_win", spins_to_win.to_string())]
            }
            TrackedEvent::PromoCodeCopied => vec![("code", PROMO_CODE.to_string())],
            TrackedEvent::CtaClicked => vec![("button", "claim_bonus".to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_stable() {
        assert_eq!(TrackedEvent::SpinAttempted { spin_number: 1 }.name(), "slot_spin");
        assert_eq!(TrackedEvent::JackpotReached { spins_to_win: 5 }.name(), "slot_jackpot");
        assert_eq!(TrackedEvent::PromoCodeCopied.name(), "promo_code_copied");
        assert_eq!(TrackedEvent::CtaClicked.name(), "cta_click");
    }

    #[test]
    fn test_copied_event_carries_the_fixed_code() {
        let params = TrackedEvent::PromoCodeCopied.params();
        assert_eq!(params, vec![("code", PROMO_CODE.to_string())]);
    }
}
