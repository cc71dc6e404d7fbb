/// Crawl state definitions for tracking the lifecycle of one crawl run
use std::fmt;

/// Represents the current state of a crawl run
///
/// ```text
/// Idle -> Running -> Completed
///                 -> Exhausted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlState {
    /// Frontier seeded, nothing fetched yet
    Idle,

    /// The breadth-first loop is processing the frontier
    Running,

    // ===== Terminal States =====
    /// The target recipe count was reached
    Completed,

    /// The frontier emptied before the target count was reached
    Exhausted,
}

impl CrawlState {
    /// Returns true if this is a terminal state (the run is over)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Exhausted)
    }

    /// Returns true if the transition from this state to `next` is allowed
    pub fn can_transition_to(&self, next: CrawlState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Exhausted)
        )
    }

    /// Short lowercase label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
