//! Bevy systems shared by the windowed viewer and the headless runner

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

use crate::simulation::render::RenderData;
use crate::simulation::scenario::Scenario;

/// Circles of the most recent frame, recorded before its physics step
#[derive(Resource, Default)]
pub(crate) struct Frame(pub Vec<RenderData>);

/// Register the per-frame loop in `schedule`: draw every body, then step
pub(crate) fn add_simulation_loop(app: &mut App, schedule: impl ScheduleLabel) {
    app.init_resource::<Frame>()
        .add_systems(schedule, (record_frame_system, physics_step_system).chain());
}

/// Log scales and bodies once the log subscriber is installed
pub(crate) fn log_scenario_system(scenario: Res<Scenario>) {
    scenario.log_summary();
}

pub(crate) fn record_frame_system(scenario: Res<Scenario>, mut frame: ResMut<Frame>) {
    scenario.render(&mut frame.0);
}

/// Advance the scenario by one frame; a failed step stops the app
pub(crate) fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>, mut halted: Local<bool>) {
    if *halted {
        return;
    }
    if let Err(err) = scenario.step() {
        error!("physics step failed at frame {}: {err}", scenario.system.frame);
        *halted = true;
        exit.send(AppExit::error());
    }
}
