use bevy::prelude::*;

/// Which side of the court a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn add(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Emitted once per ball exit, after the score has been updated.
#[derive(Event, Debug, Clone, Copy)]
pub struct GoalEvent {
    pub scorer: Side,
}

pub fn log_goals(mut goals: EventReader<GoalEvent>, score: Res<Score>) {
    for goal in goals.read() {
        info!(
            "goal for {:?}; score {}-{}",
            goal.scorer, score.player, score.opponent
        );
    }
}
