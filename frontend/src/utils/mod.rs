pub mod time;
pub mod timers;
