//! Running score for one session.

/// Score state tracked by the engine. `points` never decreases within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub points: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}

impl ScoreState {
    /// Credit a kill worth `points`.
    pub fn credit_kill(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
        self.enemies_destroyed += 1;
    }

    pub fn record_shot(&mut self) {
        self.shots_fired += 1;
    }
}
