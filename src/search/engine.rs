use tracing::{debug, info};

use crate::data::creature::Roster;
use crate::data::type_chart::TypeAdvantageIndex;
use crate::error::Result;
use crate::output::{RecordSink, SearchContext, TeamRecord};
use crate::search::coverage::compute_coverage;
use crate::search::traversal::{arrangement_count, TeamEnumerator};
use crate::search::SearchConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Complete teams whose coverage was computed.
    pub evaluated: u64,
    /// Teams that met the threshold and were appended to the sink.
    pub emitted: u64,
}

/// Exhaustive team search over a read-only roster and type chart.
#[derive(Debug, Clone)]
pub struct TeamSearch<'a> {
    roster: &'a Roster,
    index: &'a TypeAdvantageIndex,
    config: SearchConfig,
}

impl<'a> TeamSearch<'a> {
    pub fn new(roster: &'a Roster, index: &'a TypeAdvantageIndex) -> Self {
        Self::with_config(roster, index, SearchConfig::default())
    }

    pub fn with_config(
        roster: &'a Roster,
        index: &'a TypeAdvantageIndex,
        config: SearchConfig,
    ) -> Self {
        Self {
            roster,
            index,
            config,
        }
    }

    /// Leaf evaluations a full run performs.
    pub fn expected_evaluations(&self) -> u128 {
        arrangement_count(self.roster.len(), self.config.team_size, self.config.mode)
    }

    /// Walk every candidate team, appending each one that meets the coverage
    /// threshold to the context's sink. The first lookup or write error aborts
    /// the walk; records already appended stay in the sink.
    pub fn run<S: RecordSink>(&self, ctx: &mut SearchContext<S>) -> Result<SearchSummary> {
        let span = ctx.span().clone();
        let _entered = span.enter();
        debug!(
            roster = self.roster.len(),
            team_size = self.config.team_size,
            threshold = self.config.coverage_threshold,
            mode = ?self.config.mode,
            expected = %self.expected_evaluations(),
            "starting team search"
        );

        let mut summary = SearchSummary::default();
        let mut enumerator =
            TeamEnumerator::new(self.roster.len(), self.config.team_size, self.config.mode);
        while let Some(team) = enumerator.next_team() {
            summary.evaluated += 1;
            if let Some(record) = self.evaluate(team)? {
                info!(team = ?record.battle_team, num_advantages = record.num_advantages, "successful combo");
                ctx.emit(&record)?;
                summary.emitted += 1;
            }
        }

        debug!(
            evaluated = summary.evaluated,
            emitted = summary.emitted,
            "team search complete"
        );
        Ok(summary)
    }

    /// Score one team. `Some` only when its coverage meets the threshold.
    pub fn evaluate(&self, team: &[usize]) -> Result<Option<TeamRecord>> {
        let covered = compute_coverage(team, self.roster, self.index)?;
        if covered.len() < self.config.coverage_threshold {
            return Ok(None);
        }
        Ok(Some(TeamRecord {
            battle_team: self.roster.names(team),
            num_advantages: covered.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::creature::Creature;
    use crate::error::TeamError;
    use crate::search::EnumerationMode;

    /// Six single-typed creatures. Each type gets its own disjoint slice of
    /// targets, so a full team's coverage is the sum of the counts.
    fn fixture(advantages_per_type: [usize; 6]) -> (Roster, TypeAdvantageIndex) {
        let pool: Vec<String> = (0..40).map(|i| format!("V{i}")).collect();
        let mut offset = 0;
        let mut entries = Vec::new();
        for (slot, &count) in advantages_per_type.iter().enumerate() {
            let targets: Vec<&str> = pool[offset..offset + count].iter().map(String::as_str).collect();
            offset += count;
            entries.push((format!("T{slot}"), targets));
        }
        let index = TypeAdvantageIndex::from_entries(
            entries.iter().map(|(name, targets)| (name.as_str(), targets.iter().copied())),
        )
        .expect("index");
        let roster = Roster::from_creatures(
            (0..6)
                .map(|i| Creature::new(&format!("C{i}"), &format!("T{i}"), None))
                .collect(),
        )
        .expect("roster");
        (roster, index)
    }

    fn combinations() -> SearchConfig {
        SearchConfig {
            mode: EnumerationMode::Combinations,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn fourteen_advantages_is_not_emitted() {
        let (roster, index) = fixture([3, 3, 2, 2, 2, 2]);
        let search = TeamSearch::with_config(&roster, &index, combinations());
        let mut ctx = SearchContext::new(Vec::new());
        let summary = search.run(&mut ctx).expect("search runs");
        assert_eq!(summary, SearchSummary { evaluated: 1, emitted: 0 });
        assert!(ctx.sink().is_empty());
    }

    #[test]
    fn fifteen_advantages_is_emitted() {
        let (roster, index) = fixture([3, 3, 3, 2, 2, 2]);
        let search = TeamSearch::with_config(&roster, &index, combinations());
        let mut ctx = SearchContext::new(Vec::new());
        let summary = search.run(&mut ctx).expect("search runs");
        assert_eq!(summary, SearchSummary { evaluated: 1, emitted: 1 });
        let records = ctx.into_sink();
        assert_eq!(records[0].battle_team, ["C0", "C1", "C2", "C3", "C4", "C5"]);
        assert_eq!(records[0].num_advantages, 15);
    }

    #[test]
    fn permutations_emit_every_ordering() {
        let (roster, index) = fixture([3, 3, 3, 2, 2, 2]);
        let search = TeamSearch::new(&roster, &index);
        assert_eq!(search.expected_evaluations(), 720);
        let mut ctx = SearchContext::new(Vec::new());
        let summary = search.run(&mut ctx).expect("search runs");
        assert_eq!(summary, SearchSummary { evaluated: 720, emitted: 720 });
        let records = ctx.into_sink();
        assert_eq!(records[1].battle_team, ["C0", "C1", "C2", "C3", "C5", "C4"]);
        assert!(records.iter().all(|r| r.num_advantages == 15));
    }

    /// Accepts `limit` records, then fails every append.
    struct FailingSink {
        limit: usize,
        attempts: usize,
        accepted: Vec<TeamRecord>,
    }

    impl RecordSink for FailingSink {
        fn append(&mut self, record: &TeamRecord) -> Result<()> {
            self.attempts += 1;
            if self.accepted.len() >= self.limit {
                return Err(TeamError::Io {
                    path: "file.txt".to_string(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.accepted.push(record.clone());
            Ok(())
        }
    }

    #[test]
    fn append_failure_aborts_the_run() {
        let (roster, index) = fixture([3, 3, 3, 2, 2, 2]);
        let search = TeamSearch::new(&roster, &index);
        let mut ctx = SearchContext::new(FailingSink {
            limit: 1,
            attempts: 0,
            accepted: Vec::new(),
        });
        let err = search.run(&mut ctx).unwrap_err();
        assert!(matches!(err, TeamError::Io { .. }));
        let sink = ctx.into_sink();
        assert_eq!(sink.attempts, 2);
        assert_eq!(sink.accepted.len(), 1);
        assert_eq!(sink.accepted[0].battle_team, ["C0", "C1", "C2", "C3", "C4", "C5"]);
    }

    #[test]
    fn unknown_type_aborts_the_run() {
        let (base, index) = fixture([3, 3, 3, 2, 2, 2]);
        let mut creatures = base.creatures().to_vec();
        creatures[5].type_2 = Some("Shadow".to_string());
        let roster = Roster::from_creatures(creatures).expect("roster");
        let search = TeamSearch::new(&roster, &index);
        let mut ctx = SearchContext::new(Vec::new());
        let err = search.run(&mut ctx).unwrap_err();
        assert!(matches!(err, TeamError::UnknownType { .. }));
        assert!(ctx.sink().is_empty());
    }
}
