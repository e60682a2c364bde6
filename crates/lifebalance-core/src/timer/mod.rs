mod engine;
mod tick;

pub use engine::{TimerDefaults, TimerEngine, TimerMode};
pub use tick::TickHandle;
