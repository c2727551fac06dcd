//! Shared constants for Proctor components.

/// Number of questions presented per quiz
pub const QUESTIONS_PER_QUIZ: usize = 7;

/// Total reported with every result (fixed, not derived from submission size)
pub const QUIZ_TOTAL: u32 = 7;

/// Minimum score required to pass
pub const PASS_MARK: u32 = 5;

/// Default HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Default location of the passcode counter file
pub const DEFAULT_COUNTER_PATH: &str = "database/passcode_counter.txt";

/// Default Redis connection URL (only used by the Redis counter backend)
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Passcode format
pub mod passcode {
    /// Leading marker of every passcode
    pub const PREFIX: &str = "LW";

    /// Trailing marker of every passcode
    pub const SUFFIX: &str = "P";

    /// Minimum digit width; wider counter values are not truncated
    pub const MIN_DIGITS: usize = 3;

    /// Largest counter value ever issued. Fifteen digits stays exact as a
    /// Lua number inside Redis scripts.
    pub const MAX_COUNTER: u64 = 999_999_999_999_999;
}

/// Redis key names
pub mod redis_keys {
    /// Passcode issuance counter
    pub const PASSCODE_COUNTER: &str = "proctor:passcode_counter";
}
