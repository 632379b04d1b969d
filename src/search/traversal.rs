//! Iterative depth-first enumeration of candidate teams.
//!
//! Keeps one cursor per filled slot instead of recursing, so the walk visits
//! teams in exactly the order a recursive "try every unused creature in
//! roster order" search would, with bounded memory and no call-stack growth.

/// Which candidate teams are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumerationMode {
    /// Every ordering of every subset: n!/(n-k)! teams.
    #[default]
    Permutations,
    /// Every subset once, members in roster order: n!/(k!(n-k)!) teams.
    Combinations,
}

#[derive(Debug, Clone)]
pub struct TeamEnumerator {
    roster_len: usize,
    team_size: usize,
    mode: EnumerationMode,
    team: Vec<usize>,
    /// `cursors[d]` is the next roster index to try for slot `d`.
    cursors: Vec<usize>,
    used: Vec<bool>,
}

impl TeamEnumerator {
    pub fn new(roster_len: usize, team_size: usize, mode: EnumerationMode) -> Self {
        // A zero-size team has nothing to enumerate; start exhausted.
        let cursors = if team_size == 0 { Vec::new() } else { vec![0] };
        Self {
            roster_len,
            team_size,
            mode,
            team: Vec::with_capacity(team_size),
            cursors,
            used: vec![false; roster_len],
        }
    }

    /// The team currently under construction (complete right after [Self::next_team]).
    pub fn current(&self) -> &[usize] {
        &self.team
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Advance to the next complete team, as roster indices in construction order.
    pub fn next_team(&mut self) -> Option<&[usize]> {
        if self.team.len() == self.team_size {
            self.release_last();
        }

        loop {
            let start = *self.cursors.last()?;
            let Some(candidate) = (start..self.roster_len).find(|&index| !self.used[index]) else {
                self.cursors.pop();
                self.release_last();
                continue;
            };

            if let Some(cursor) = self.cursors.last_mut() {
                *cursor = candidate + 1;
            }
            self.team.push(candidate);
            self.used[candidate] = true;

            if self.team.len() == self.team_size {
                return Some(&self.team);
            }
            let next_start = match self.mode {
                EnumerationMode::Permutations => 0,
                EnumerationMode::Combinations => candidate + 1,
            };
            self.cursors.push(next_start);
        }
    }

    fn release_last(&mut self) {
        if let Some(last) = self.team.pop() {
            self.used[last] = false;
        }
    }
}

/// Number of teams [TeamEnumerator] yields for a roster of `n`. Saturates at `u128::MAX`.
pub fn arrangement_count(n: usize, k: usize, mode: EnumerationMode) -> u128 {
    if k == 0 || k > n {
        return 0;
    }
    let n = n as u128;
    let k = k as u128;
    let permutations = (0..k).fold(1u128, |acc, i| acc.saturating_mul(n - i));
    match mode {
        EnumerationMode::Permutations => permutations,
        EnumerationMode::Combinations => {
            // Multiplicative form keeps intermediates exact: C(n, i+1) = C(n, i) * (n-i) / (i+1).
            (0..k).fold(1u128, |acc, i| acc.saturating_mul(n - i) / (i + 1))
        }
    }
}
