use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::params::Viewport;
use crate::simulation::render::RenderData;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyColor;
use super::systems::{add_simulation_loop, log_scenario_system, Frame};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Open a window of the scenario's size and run until it is closed or
/// Escape is pressed. Each fixed step records the bodies and then advances
/// the physics, `frame_rate_cap` times per second; the window shows the
/// latest recorded frame
pub fn run_2d(scenario: Scenario) -> AppExit {
    let viewport = scenario.viewport.clone();

    let mut app = App::new();
    app
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: viewport.title.clone(),
                resolution: WindowResolution::new(viewport.width as f32, viewport.height as f32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(viewport.frame_rate_cap as f64))
        .insert_resource(scenario)
        .add_systems(Startup, (log_scenario_system, setup_bodies_system))
        .add_systems(Update, (exit_on_escape_system, apply_frame_system));
    add_simulation_loop(&mut app, FixedUpdate);
    app.run()
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies().iter().enumerate() {
        let circle = body.render_data();
        let center = to_world(&circle, &scenario.viewport);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(circle.radius as f32))),
                material: materials.add(ColorMaterial::from(to_bevy_color(circle.color))),
                // later bodies are drawn on top
                transform: Transform::from_xyz(center.x, center.y, i as f32),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn exit_on_escape_system(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

/// Move and recolor the circle meshes to match the recorded frame
fn apply_frame_system(
    scenario: Res<Scenario>,
    frame: Res<Frame>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&BodyIndex, &mut Transform, &Handle<ColorMaterial>)>,
) {
    if !frame.is_changed() {
        return;
    }

    for (BodyIndex(i), mut transform, handle) in &mut query {
        let Some(circle) = frame.0.get(*i) else {
            continue;
        };
        let center = to_world(circle, &scenario.viewport);
        transform.translation.x = center.x;
        transform.translation.y = center.y;

        let color = to_bevy_color(circle.color);
        if let Some(material) = materials.get_mut(handle) {
            if material.color != color {
                material.color = color;
            }
        }
    }
}

/// Map a circle's top-left anchor in window pixels (y down, origin at the
/// top-left corner) to the Bevy world position of its center (y up, origin
/// at the window center)
fn to_world(circle: &RenderData, viewport: &Viewport) -> Vec2 {
    let center = circle.center();
    let origin = viewport.half_extent();
    Vec2::new((center.x - origin.x) as f32, (origin.y - center.y) as f32)
}

fn to_bevy_color(color: BodyColor) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{BodyId, NVec2};

    fn viewport() -> Viewport {
        Viewport { width: 1500, height: 800, title: String::new(), frame_rate_cap: 90 }
    }

    #[test]
    fn window_center_maps_to_world_origin() {
        let circle = RenderData {
            id: BodyId(0),
            position: NVec2::new(740.0, 390.0),
            radius: 10.0,
            color: BodyColor::rgb(255, 255, 0),
        };
        assert_eq!(to_world(&circle, &viewport()), Vec2::ZERO);
    }

    #[test]
    fn screen_y_points_down_world_y_points_up() {
        let circle = RenderData {
            id: BodyId(1),
            position: NVec2::new(0.0, 0.0),
            radius: 0.0,
            color: BodyColor::rgb(0, 0, 255),
        };
        assert_eq!(to_world(&circle, &viewport()), Vec2::new(-750.0, 400.0));
    }

    #[test]
    fn odd_window_keeps_scenario_origin_at_world_origin() {
        let odd = Viewport { width: 1501, height: 801, title: String::new(), frame_rate_cap: 90 };
        let circle = RenderData {
            id: BodyId(2),
            position: odd.half_extent() - NVec2::new(4.0, 4.0),
            radius: 4.0,
            color: BodyColor::rgb(255, 0, 0),
        };
        assert_eq!(to_world(&circle, &odd), Vec2::ZERO);
    }
}
