//! Progress carried from one round to the next

use crate::wordlists::SelectError;

/// Level, score and streak of a player's run
///
/// A `Session` is a plain value: rounds take one in and hand back the updated
/// copy, nothing mutates it behind the owner's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    level: u32,
    score: u64,
    streak: u32,
    best_streak: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            level: 1,
            score: 0,
            streak: 0,
            best_streak: 0,
        }
    }
}

impl Session {
    /// Fresh session starting at `level`
    ///
    /// # Errors
    /// Returns `SelectError::InvalidLevel` for level 0.
    pub fn starting_at(level: u32) -> Result<Self, SelectError> {
        if level == 0 {
            return Err(SelectError::InvalidLevel(level));
        }
        Ok(Self {
            level,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Session after winning a round worth `points`
    #[must_use]
    pub const fn after_win(self, points: u64) -> Self {
        let streak = self.streak + 1;
        Self {
            score: self.score + points,
            streak,
            best_streak: if streak > self.best_streak {
                streak
            } else {
                self.best_streak
            },
            ..self
        }
    }

    /// Session after losing a round
    #[must_use]
    pub const fn after_loss(self) -> Self {
        Self { streak: 0, ..self }
    }

    /// Session moved to the next level, or `None` once `max_level` is reached
    #[must_use]
    pub const fn next_level(self, max_level: u32) -> Option<Self> {
        if self.level < max_level {
            Some(Self {
                level: self.level + 1,
                ..self
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_level_one() {
        let session = Session::default();
        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
    }

    #[test]
    fn starting_level_zero_is_rejected() {
        assert_eq!(Session::starting_at(0), Err(SelectError::InvalidLevel(0)));
        assert_eq!(Session::starting_at(42).unwrap().level(), 42);
    }

    #[test]
    fn wins_accumulate_and_loss_resets_streak() {
        let session = Session::default().after_win(6).after_win(4);
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 2);

        let session = session.after_loss();
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 0);
        assert_eq!(session.best_streak(), 2);
    }

    #[test]
    fn next_level_stops_at_max() {
        let session = Session::starting_at(99).unwrap();
        let last = session.next_level(100).unwrap();
        assert_eq!(last.level(), 100);
        assert!(last.next_level(100).is_none());
    }
}
