use log::debug;

use super::stage::Stage;

/// Callbacks the rotation controller uses to talk to whatever hosts it.
///
/// The host owns the rotating flag; the controller only requests transitions
/// and reads the current value back.
pub trait IslandHost {
    fn is_rotating(&self) -> bool;
    fn set_is_rotating(&mut self, rotating: bool);
    fn set_current_stage(&mut self, stage: Option<Stage>);
}

/// Host state of the home scene: rotating flag and last reported stage.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    is_rotating: bool,
    current_stage: Option<Stage>,
    stage_changes: u32,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_stage(&self) -> Option<Stage> {
        self.current_stage
    }

    /// Number of times the reported stage actually changed.
    pub fn stage_changes(&self) -> u32 {
        self.stage_changes
    }
}

impl IslandHost for HomeState {
    fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    fn set_is_rotating(&mut self, rotating: bool) {
        self.is_rotating = rotating;
    }

    fn set_current_stage(&mut self, stage: Option<Stage>) {
        if self.current_stage != stage {
            debug!(
                "Stage changed: {:?} -> {:?}",
                self.current_stage.map(Stage::number),
                stage.map(Stage::number)
            );
            self.stage_changes += 1;
        }
        self.current_stage = stage;
    }
}
