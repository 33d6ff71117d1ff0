#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current time in unix epoch seconds
    fn now_unix(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
