use log::info;

pub const DEFAULT_TIME_LIMIT_SECS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u64),
    Expired,
}

/// Whole-quiz countdown. Driven from outside: the UI loop calls `tick` once
/// for every second that has elapsed.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    pub fn new(limit_secs: u64) -> Self {
        Self {
            remaining: limit_secs,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.remaining == 0 {
            return Tick::Expired;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            info!("quiz time limit reached");
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}
