use serde::{Serialize, Deserialize};

use crate::analytics::TrackedEvent;
use crate::constants::{
    COUNTDOWN_INITIAL_SECS, REEL_STOP_DELAYS_MS, REEL_STOP_VIBRATION, SETTLE_DELAY_MS,
    SPIN_VIBRATION, WINNING_ATTEMPT, WIN_VIBRATION,
};
use crate::countdown::Countdown;

pub const REEL_COUNT: usize = 3;

/// Closed set of reel symbols. Rendering is an exhaustive match in the
/// frontend, so adding a symbol here is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Seven,
    Diamond,
    Bar,
    Cherry,
    Coin,
    Crown,
}

pub const SYMBOLS: [Symbol; 6] = [
    Symbol::Seven,
    Symbol::Diamond,
    Symbol::Bar,
    Symbol::Cherry,
    Symbol::Coin,
    Symbol::Crown,
];

pub const JACKPOT_SYMBOL: Symbol = Symbol::Seven;

/// Fixed rotation of losing triples, indexed by attempt number. None of
/// these may ever equal the jackpot triple.
pub const LOSING_COMBOS: [[Symbol; 3]; 5] = [
    [Symbol::Diamond, Symbol::Bar, Symbol::Cherry],
    [Symbol::Cherry, Symbol::Coin, Symbol::Diamond],
    [Symbol::Bar, Symbol::Diamond, Symbol::Coin],
    [Symbol::Coin, Symbol::Cherry, Symbol::Bar],
    [Symbol::Diamond, Symbol::Cherry, Symbol::Coin],
];

/// Decides the triple shown for a given attempt (counted from 1). Pure and
/// deterministic; the rapid symbol cycling while the reels spin is cosmetic
/// and never feeds into this.
pub fn decide_outcome(attempt: u32) -> [Symbol; 3] {
    debug_assert!(attempt >= 1, "attempts are counted from 1");
    if attempt >= WINNING_ATTEMPT {
        [JACKPOT_SYMBOL; 3]
    } else {
        LOSING_COMBOS[(attempt as usize - 1) % LOSING_COMBOS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Spinning,
    /// Terminal for the session; there is no way back to Idle.
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Spin,
    ReelStop,
    Win,
}

/// Everything that can drive the machine: user actions and timer firings
/// alike go through the same dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEvent {
    SpinRequested,
    ReelStopped(usize),
    SettleElapsed,
    CountdownTick,
    CopyCodeRequested,
    ClaimRequested,
}

/// Side effects requested by a transition, described as data so the frontend
/// can execute them and tests can assert on them without wall-clock waits.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotCommand {
    /// Start the reel animation toward `outcome`; the caller schedules one
    /// stop timer per reel with the given delays.
    SpinReels {
        outcome: [Symbol; 3],
        stop_delays_ms: [u32; 3],
    },
    /// Schedule the post-spin settle pause; `SettleElapsed` comes back when
    /// it fires.
    ScheduleSettle { delay_ms: u32 },
    PlaySound(Sound),
    Vibrate(&'static [u32]),
    ShakeFrame,
    Track(TrackedEvent),
    Celebrate,
    StartCountdown,
    CopyPromoCode,
    NavigateToClaim,
}

/// The scripted-outcome state machine. Owns the attempt counter, the
/// per-spin reel bookkeeping and the won-state countdown; all timers live
/// with the caller and report back as events.
#[derive(Debug, Clone)]
pub struct SlotMachine {
    phase: GamePhase,
    attempt: u32,
    outcome: [Symbol; 3],
    reels_stopped: [bool; REEL_COUNT],
    settle_scheduled: bool,
    countdown: Countdown,
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotMachine {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            attempt: 0,
            outcome: [JACKPOT_SYMBOL; 3],
            reels_stopped: [false; REEL_COUNT],
            settle_scheduled: false,
            countdown: Countdown::new(COUNTDOWN_INITIAL_SECS),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of spins requested so far; the attempt currently playing out.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Attempt number for the status line: the attempt playing out while the
    /// reels spin, otherwise the upcoming one, capped at the winning attempt.
    pub fn display_attempt(&self) -> u32 {
        match self.phase {
            GamePhase::Spinning => self.attempt,
            _ => (self.attempt + 1).min(WINNING_ATTEMPT),
        }
    }

    pub fn outcome(&self) -> [Symbol; 3] {
        self.outcome
    }

    pub fn reel_stopped(&self, reel: usize) -> bool {
        self.reels_stopped.get(reel).copied().unwrap_or(false)
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    /// Single dispatch entry point. Returns the side effects the transition
    /// asks for; an ignored event returns none and changes nothing.
    pub fn handle(&mut self, event: SlotEvent) -> Vec<SlotCommand> {
        match event {
            SlotEvent::SpinRequested => self.on_spin_requested(),
            SlotEvent::ReelStopped(reel) => self.on_reel_stopped(reel),
            SlotEvent::SettleElapsed => self.on_settle_elapsed(),
            SlotEvent::CountdownTick => {
                if self.phase == GamePhase::Won {
                    self.countdown.tick();
                }
                Vec::new()
            }
            SlotEvent::CopyCodeRequested => {
                if self.phase == GamePhase::Won {
                    vec![
                        SlotCommand::CopyPromoCode,
                        SlotCommand::Track(TrackedEvent::PromoCodeCopied),
                    ]
                } else {
                    Vec::new()
                }
            }
            SlotEvent::ClaimRequested => {
                if self.phase == GamePhase::Won {
                    vec![
                        SlotCommand::Track(TrackedEvent::CtaClicked),
                        SlotCommand::NavigateToClaim,
                    ]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn on_spin_requested(&mut self) -> Vec<SlotCommand> {
        if self.phase != GamePhase::Idle {
            return Vec::new();
        }
        self.attempt += 1;
        self.outcome = decide_outcome(self.attempt);
        self.reels_stopped = [false; REEL_COUNT];
        self.settle_scheduled = false;
        self.phase = GamePhase::Spinning;
        log::debug!("spin {} started, outcome {:?}", self.attempt, self.outcome);
        vec![
            SlotCommand::Track(TrackedEvent::SpinAttempted {
                spin_number: self.attempt,
            }),
            SlotCommand::PlaySound(Sound::Spin),
            SlotCommand::Vibrate(SPIN_VIBRATION),
            SlotCommand::SpinReels {
                outcome: self.outcome,
                stop_delays_ms: REEL_STOP_DELAYS_MS,
            },
        ]
    }

    fn on_reel_stopped(&mut self, reel: usize) -> Vec<SlotCommand> {
        if self.phase != GamePhase::Spinning || reel >= REEL_COUNT || self.reels_stopped[reel] {
            return Vec::new();
        }
        self.reels_stopped[reel] = true;
        let mut commands = vec![
            SlotCommand::PlaySound(Sound::ReelStop),
            SlotCommand::Vibrate(REEL_STOP_VIBRATION),
            SlotCommand::ShakeFrame,
        ];
        if self.reels_stopped.iter().all(|&stopped| stopped) && !self.settle_scheduled {
            // Latched: a spurious extra signal cannot re-schedule.
            self.settle_scheduled = true;
            commands.push(SlotCommand::ScheduleSettle {
                delay_ms: SETTLE_DELAY_MS,
            });
        }
        commands
    }

    fn on_settle_elapsed(&mut self) -> Vec<SlotCommand> {
        if self.phase != GamePhase::Spinning || !self.settle_scheduled {
            return Vec::new();
        }
        if self.attempt >= WINNING_ATTEMPT {
            self.phase = GamePhase::Won;
            self.countdown = Countdown::new(COUNTDOWN_INITIAL_SECS);
            log::debug!("jackpot on attempt {}", self.attempt);
            vec![
                SlotCommand::Track(TrackedEvent::JackpotReached {
                    spins_to_win: self.attempt,
                }),
                SlotCommand::PlaySound(Sound::Win),
                SlotCommand::Vibrate(WIN_VIBRATION),
                SlotCommand::Celebrate,
                SlotCommand::StartCountdown,
            ]
        } else {
            self.phase = GamePhase::Idle;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROMO_CODE;

    fn is_jackpot(triple: [Symbol; 3]) -> bool {
        triple.iter().all(|&s| s == JACKPOT_SYMBOL)
    }

    /// Drives one full spin through reel stops and the settle pause.
    fn play_spin(machine: &mut SlotMachine) {
        machine.handle(SlotEvent::SpinRequested);
        for reel in 0..REEL_COUNT {
            machine.handle(SlotEvent::ReelStopped(reel));
        }
        machine.handle(SlotEvent::SettleElapsed);
    }

    #[test]
    fn test_losing_combos_never_jackpot() {
        for combo in LOSING_COMBOS {
            assert!(!is_jackpot(combo), "losing combo {combo:?} is a jackpot");
        }
    }

    #[test]
    fn test_decide_outcome_loses_before_threshold() {
        for attempt in 1..crate::constants::WINNING_ATTEMPT {
            let outcome = decide_outcome(attempt);
            assert!(!is_jackpot(outcome), "attempt {attempt} must not win");
            assert_eq!(outcome, LOSING_COMBOS[(attempt as usize - 1) % LOSING_COMBOS.len()]);
        }
    }

    #[test]
    fn test_decide_outcome_wins_on_threshold() {
        assert!(is_jackpot(decide_outcome(crate::constants::WINNING_ATTEMPT)));
    }

    #[test]
    fn test_first_four_attempts_distinct_then_jackpot() {
        let mut machine = SlotMachine::new();
        let mut seen = Vec::new();
        for attempt in 1..=4 {
            play_spin(&mut machine);
            assert_eq!(machine.attempt(), attempt);
            assert_eq!(machine.phase(), GamePhase::Idle);
            assert!(!is_jackpot(machine.outcome()));
            assert!(!seen.contains(&machine.outcome()), "combo repeated early");
            seen.push(machine.outcome());
        }
        play_spin(&mut machine);
        assert_eq!(machine.attempt(), 5);
        assert_eq!(machine.phase(), GamePhase::Won);
        assert!(is_jackpot(machine.outcome()));
    }

    #[test]
    fn test_spin_starts_reels_with_increasing_delays() {
        let mut machine = SlotMachine::new();
        let commands = machine.handle(SlotEvent::SpinRequested);
        let spin = commands.iter().find_map(|cmd| match cmd {
            SlotCommand::SpinReels { stop_delays_ms, .. } => Some(*stop_delays_ms),
            _ => None,
        });
        let delays = spin.expect("spin must start the reels");
        assert!(delays[0] < delays[1] && delays[1] < delays[2]);
    }

    #[test]
    fn test_spin_ignored_while_spinning() {
        let mut machine = SlotMachine::new();
        machine.handle(SlotEvent::SpinRequested);
        assert_eq!(machine.attempt(), 1);
        let commands = machine.handle(SlotEvent::SpinRequested);
        assert!(commands.is_empty());
        assert_eq!(machine.attempt(), 1, "attempt counter must not move");
    }

    #[test]
    fn test_spin_ignored_after_win() {
        let mut machine = SlotMachine::new();
        for _ in 0..5 {
            play_spin(&mut machine);
        }
        assert_eq!(machine.phase(), GamePhase::Won);
        let commands = machine.handle(SlotEvent::SpinRequested);
        assert!(commands.is_empty());
        assert_eq!(machine.attempt(), 5);
        assert_eq!(machine.phase(), GamePhase::Won, "won is terminal");
    }

    #[test]
    fn test_settle_scheduled_once_after_third_reel() {
        let mut machine = SlotMachine::new();
        machine.handle(SlotEvent::SpinRequested);

        let settles = |commands: &[SlotCommand]| {
            commands
                .iter()
                .filter(|cmd| matches!(cmd, SlotCommand::ScheduleSettle { .. }))
                .count()
        };

        assert_eq!(settles(&machine.handle(SlotEvent::ReelStopped(0))), 0);
        assert_eq!(settles(&machine.handle(SlotEvent::ReelStopped(1))), 0);
        assert_eq!(settles(&machine.handle(SlotEvent::ReelStopped(2))), 1);

        // A spurious fourth signal (duplicate or out of range) is inert.
        assert!(machine.handle(SlotEvent::ReelStopped(2)).is_empty());
        assert!(machine.handle(SlotEvent::ReelStopped(3)).is_empty());
    }

    #[test]
    fn test_duplicate_reel_signal_does_not_resolve_early() {
        let mut machine = SlotMachine::new();
        machine.handle(SlotEvent::SpinRequested);
        machine.handle(SlotEvent::ReelStopped(0));
        machine.handle(SlotEvent::ReelStopped(0));
        machine.handle(SlotEvent::ReelStopped(1));
        // Only two distinct reels have reported; settle must not fire yet.
        assert!(machine.handle(SlotEvent::SettleElapsed).is_empty());
        assert_eq!(machine.phase(), GamePhase::Spinning);
    }

    #[test]
    fn test_settle_before_schedule_is_ignored() {
        let mut machine = SlotMachine::new();
        machine.handle(SlotEvent::SpinRequested);
        assert!(machine.handle(SlotEvent::SettleElapsed).is_empty());
        assert_eq!(machine.phase(), GamePhase::Spinning);
    }

    #[test]
    fn test_won_only_on_winning_attempt() {
        let mut machine = SlotMachine::new();
        for attempt in 1..=5 {
            play_spin(&mut machine);
            if attempt < 5 {
                assert_eq!(machine.phase(), GamePhase::Idle, "attempt {attempt}");
            } else {
                assert_eq!(machine.phase(), GamePhase::Won);
            }
        }
    }

    #[test]
    fn test_win_emits_celebration_and_countdown() {
        let mut machine = SlotMachine::new();
        for _ in 0..4 {
            play_spin(&mut machine);
        }
        machine.handle(SlotEvent::SpinRequested);
        for reel in 0..REEL_COUNT {
            machine.handle(SlotEvent::ReelStopped(reel));
        }
        let commands = machine.handle(SlotEvent::SettleElapsed);
        assert!(commands.contains(&SlotCommand::Celebrate));
        assert!(commands.contains(&SlotCommand::StartCountdown));
        assert!(commands.contains(&SlotCommand::Track(TrackedEvent::JackpotReached {
            spins_to_win: 5
        })));
    }

    #[test]
    fn test_status_line_shows_upcoming_attempt_when_idle() {
        let mut machine = SlotMachine::new();
        assert_eq!(machine.display_attempt(), 1);

        machine.handle(SlotEvent::SpinRequested);
        assert_eq!(machine.display_attempt(), 1, "spinning shows the live attempt");
        for reel in 0..REEL_COUNT {
            machine.handle(SlotEvent::ReelStopped(reel));
        }
        machine.handle(SlotEvent::SettleElapsed);
        assert_eq!(machine.display_attempt(), 2, "idle shows the upcoming attempt");

        for _ in 0..3 {
            play_spin(&mut machine);
        }
        assert_eq!(machine.attempt(), 4);
        assert_eq!(machine.display_attempt(), 5);

        play_spin(&mut machine);
        assert_eq!(machine.phase(), GamePhase::Won);
        assert_eq!(machine.display_attempt(), 5, "capped at the winning attempt");
    }

    #[test]
    fn test_countdown_ticks_only_when_won() {
        let mut machine = SlotMachine::new();
        machine.handle(SlotEvent::CountdownTick);
        assert_eq!(machine.countdown().format(), "14:59");

        for _ in 0..5 {
            play_spin(&mut machine);
        }
        machine.handle(SlotEvent::CountdownTick);
        assert_eq!(machine.countdown().format(), "14:58");
    }

    #[test]
    fn test_copy_and_claim_gated_on_won() {
        let mut machine = SlotMachine::new();
        assert!(machine.handle(SlotEvent::CopyCodeRequested).is_empty());
        assert!(machine.handle(SlotEvent::ClaimRequested).is_empty());

        for _ in 0..5 {
            play_spin(&mut machine);
        }
        let copy = machine.handle(SlotEvent::CopyCodeRequested);
        assert!(copy.contains(&SlotCommand::CopyPromoCode));
        assert!(copy.contains(&SlotCommand::Track(TrackedEvent::PromoCodeCopied)));
        // The tracked payload always carries the fixed literal.
        assert_eq!(
            TrackedEvent::PromoCodeCopied.params(),
            vec![("code", PROMO_CODE.to_string())]
        );

        let claim = machine.handle(SlotEvent::ClaimRequested);
        assert!(claim.contains(&SlotCommand::NavigateToClaim));
    }
}
