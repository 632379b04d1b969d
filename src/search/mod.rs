pub mod coverage;
pub mod engine;
pub mod traversal;

pub use coverage::compute_coverage;
pub use engine::{SearchSummary, TeamSearch};
pub use traversal::{arrangement_count, EnumerationMode, TeamEnumerator};

/// Members per team.
pub const TEAM_SIZE: usize = 6;
/// Minimum distinct advantages for a team to be recorded.
pub const COVERAGE_THRESHOLD: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub team_size: usize,
    pub coverage_threshold: usize,
    /// Permutations reproduces every ordering of each team; Combinations visits each team once.
    pub mode: EnumerationMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            team_size: TEAM_SIZE,
            coverage_threshold: COVERAGE_THRESHOLD,
            mode: EnumerationMode::Permutations,
        }
    }
}
