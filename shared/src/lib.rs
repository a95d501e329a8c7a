pub mod analytics;
pub mod constants;
pub mod countdown;
pub mod decor;
pub mod outbound;
pub mod slot_machine;
