//! Running score with a session high score

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreManager {
    current: u64,
    high: u64,
}

impl ScoreManager {
    /// Start with a previously saved high score
    pub fn with_high_score(high: u64) -> Self {
        Self { current: 0, high }
    }

    pub fn add_score(&mut self, points: u64) {
        self.current += points;
        self.high = self.high.max(self.current);
    }

    /// Raise the high score to a run's final score if it beats it
    pub fn record_final(&mut self, score: u64) {
        self.high = self.high.max(score);
    }

    /// Clear the current score; the high score is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn high(&self) -> u64 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_follows_current() {
        let mut scores = ScoreManager::with_high_score(15);
        scores.add_score(10);
        assert_eq!(scores.high(), 15);
        scores.add_score(10);
        assert_eq!(scores.high(), 20);
        scores.reset();
        assert_eq!(scores.current(), 0);
        assert_eq!(scores.high(), 20);
        scores.record_final(5);
        assert_eq!(scores.high(), 20);
    }
}
