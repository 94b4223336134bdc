use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Marker component for the FPS overlay text.
#[derive(Component)]
pub struct FpsText;

/// Leave the loading phase once the scene is on screen.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_spawned {
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
