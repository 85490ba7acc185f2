use serde::{Deserialize, Serialize};

use super::angle::normalize_angle;

/// Discrete narrative stage selected by the island's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stage {
    One,
    Two,
    Three,
    Four,
}

impl Stage {
    pub fn number(self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
            Stage::Three => 3,
            Stage::Four => 4,
        }
    }
}

impl TryFrom<u8> for Stage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Stage::One),
            2 => Ok(Stage::Two),
            3 => Ok(Stage::Three),
            4 => Ok(Stage::Four),
            other => Err(format!("stage must be 1..=4, got {other}")),
        }
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> u8 {
        stage.number()
    }
}

/// Inclusive angular window (normalized radians) that snaps to a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageWindow {
    pub min: f32,
    pub max: f32,
    pub stage: Stage,
}

impl StageWindow {
    pub fn contains(&self, normalized: f32) -> bool {
        normalized >= self.min && normalized <= self.max
    }
}

/// Evaluated in order, first match wins. Gaps between windows map to no stage.
pub const STAGE_WINDOWS: [StageWindow; 4] = [
    StageWindow { min: 5.45, max: 5.85, stage: Stage::Four },
    StageWindow { min: 0.85, max: 1.30, stage: Stage::Three },
    StageWindow { min: 2.40, max: 2.60, stage: Stage::Two },
    StageWindow { min: 4.25, max: 4.75, stage: Stage::One },
];

/// Classify an already normalized angle.
pub fn classify(normalized: f32) -> Option<Stage> {
    STAGE_WINDOWS
        .iter()
        .find(|window| window.contains(normalized))
        .map(|window| window.stage)
}

/// Classify any angle, normalizing it first.
pub fn stage_for_angle(angle: f32) -> Option<Stage> {
    classify(normalize_angle(angle))
}
