pub mod confetti;
pub mod language_switcher;
pub mod live_feed;
pub mod particles;
pub mod slot_machine;
