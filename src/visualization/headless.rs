//! Run a scenario for a fixed number of frames without opening a window

use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use super::systems::{log_scenario_system, physics_step_system};

#[derive(Resource)]
struct StepBudget {
    remaining: u64,
}

/// Step `scenario` `steps` times as fast as possible, then log its final
/// state and exit. Returns how the app exited and the number of completed
/// steps; a failed step ends the run early with `AppExit::Error`
pub fn run_headless(scenario: Scenario, steps: u64) -> (AppExit, u64) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(scenario)
        .insert_resource(StepBudget { remaining: steps })
        .add_systems(Startup, log_scenario_system)
        .add_systems(Update, (physics_step_system.run_if(steps_remaining), countdown_system).chain());

    app.finish();
    app.cleanup();

    loop {
        app.update();
        if let Some(exit) = app.should_exit() {
            let frame = app.world().resource::<Scenario>().system.frame;
            return (exit, frame);
        }
    }
}

fn steps_remaining(budget: Res<StepBudget>) -> bool {
    budget.remaining > 0
}

fn countdown_system(scenario: Res<Scenario>, mut budget: ResMut<StepBudget>, mut exit: EventWriter<AppExit>, mut done: Local<bool>) {
    if *done {
        return;
    }
    budget.remaining = budget.remaining.saturating_sub(1);
    if budget.remaining == 0 {
        scenario.log_state();
        *done = true;
        exit.send(AppExit::Success);
    }
}
