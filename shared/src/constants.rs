/// The promo code revealed on the winning spin. Never changes at runtime.
pub const PROMO_CODE: &str = "OVERRIDE777";

/// The attempt number that is guaranteed to produce the jackpot.
pub const WINNING_ATTEMPT: u32 = 5;

/// Per-reel stop delays, strictly increasing so the reels settle left to right.
pub const REEL_STOP_DELAYS_MS: [u32; 3] = [1200, 1800, 2400];

/// How fast a spinning reel cycles its cosmetic symbol.
pub const SYMBOL_CYCLE_INTERVAL_MS: u32 = 60;

/// Pause after the last reel stops before the win/retry branch resolves,
/// so the settle animation can play.
pub const SETTLE_DELAY_MS: u32 = 400;

/// Countdown shown in the won state: 14:59.
pub const COUNTDOWN_INITIAL_SECS: u32 = 14 * 60 + 59;

/// How long the "copied" confirmation stays visible.
pub const COPIED_FLASH_MS: u32 = 2000;

pub const SPIN_VIBRATION: &[u32] = &[50];
pub const REEL_STOP_VIBRATION: &[u32] = &[30];
pub const WIN_VIBRATION: &[u32] = &[100, 50, 100, 50, 200];
