//! Per-team scores and turn rotation math.

/// Per-team integer scores, index = team id.
///
/// Scores are clamped at zero when a penalty lands; clamping happens at the
/// point of mutation so a negative total can never be observed.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    scores: Vec<i32>,
}

impl ScoreBoard {
    pub fn new(num_teams: usize) -> Self {
        Self {
            scores: vec![0; num_teams],
        }
    }

    pub fn num_teams(&self) -> usize {
        self.scores.len()
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn score(&self, team: usize) -> i32 {
        self.scores.get(team).copied().unwrap_or(0)
    }

    /// Award one point for a correct guess.
    pub fn award(&mut self, team: usize) {
        if let Some(s) = self.scores.get_mut(team) {
            *s += 1;
        }
    }

    /// Apply a pass penalty (zero or negative), clamped at a floor of 0.
    pub fn apply_penalty(&mut self, team: usize, penalty: i32) {
        if let Some(s) = self.scores.get_mut(team) {
            *s = (*s + penalty).max(0);
        }
    }

    /// Reset all teams to zero, keeping the team count.
    pub fn reset(&mut self) {
        self.scores.fill(0);
    }

    /// Winning teams: every team holding the maximum score. Ties are
    /// reported as a set, never broken arbitrarily.
    pub fn winners(&self) -> (i32, Vec<usize>) {
        let best = self.scores.iter().copied().max().unwrap_or(0);
        let teams = self
            .scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == best)
            .map(|(i, _)| i)
            .collect();
        (best, teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_clamps_at_zero() {
        let mut board = ScoreBoard::new(2);
        board.apply_penalty(0, -1);
        assert_eq!(board.score(0), 0);

        board.award(0);
        board.apply_penalty(0, -1);
        assert_eq!(board.score(0), 0);
    }

    #[test]
    fn zero_penalty_leaves_score_alone() {
        let mut board = ScoreBoard::new(1);
        board.award(0);
        board.apply_penalty(0, 0);
        assert_eq!(board.score(0), 1);
    }

    #[test]
    fn out_of_range_team_is_ignored() {
        let mut board = ScoreBoard::new(2);
        board.award(5);
        assert_eq!(board.scores(), &[0, 0]);
    }

    #[test]
    fn winners_reports_ties_as_a_set() {
        let mut board = ScoreBoard::new(3);
        for _ in 0..5 {
            board.award(0);
            board.award(1);
        }
        for _ in 0..3 {
            board.award(2);
        }

        let (best, teams) = board.winners();
        assert_eq!(best, 5);
        assert_eq!(teams, vec![0, 1]);
    }

    #[test]
    fn single_winner() {
        let mut board = ScoreBoard::new(2);
        board.award(1);
        let (best, teams) = board.winners();
        assert_eq!(best, 1);
        assert_eq!(teams, vec![1]);
    }
}
