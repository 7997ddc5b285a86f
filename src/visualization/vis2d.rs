//! Bevy 2D front end for the gravity toy.
//!
//! All I/O lives here: the window, the circle meshes, the HUD text, and
//! the mapping from raw key events to engine commands. Physics runs on the
//! `FixedUpdate` schedule at the scenario's tick rate so velocity stays
//! pixels-per-tick regardless of the display refresh rate.
//!
//! Key bindings:
//! - Space        toggle time freeze
//! - Left Shift   advance one tick (usable frame-by-frame while frozen)
//! - Right Shift  restart the simulation
//! - Up / Down    raise / lower the gravity multiplier while held
//! - Escape       quit

use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use log::error;

use crate::simulation::engine::Command as SimCommand;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Index of the body this entity renders, into the engine's registry.
#[derive(Component)]
struct BodyIndex(pub usize);

/// Marker for the HUD multiplier readout.
#[derive(Component)]
struct MultiplierText;

/// Fired after a restart so the body entities get rebuilt.
#[derive(Event)]
struct SimulationReset;

pub fn run_2d(scenario: Scenario) {
    let (width, height) = scenario.window_size();
    let tick_rate = scenario.tick_rate();

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(Time::<Fixed>::from_hz(tick_rate))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planets and Gravity".into(),
                resolution: (width, height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_event::<SimulationReset>()
        .add_systems(Startup, setup_system)
        .add_systems(FixedUpdate, tick_system)
        .add_systems(
            Update,
            (
                input_system,
                respawn_bodies_system.after(input_system),
                sync_transforms_system,
                hud_text_system,
            ),
        )
        .run();
}

/// Screen coordinates (origin top-left, y down) to Bevy world space
/// (origin center, y up). The z slot keeps later bodies drawn on top.
fn to_world(scenario: &Scenario, p: NVec2, z: f32) -> Vec3 {
    let (width, height) = scenario.window_size();
    Vec3::new(
        p.x as f32 - width / 2.0,
        height / 2.0 - p.y as f32,
        z,
    )
}

fn spawn_body_entities(
    commands: &mut Commands,
    scenario: &Scenario,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    for (i, body) in scenario.engine.registry.bodies().iter().enumerate() {
        let [r, g, b] = body.color;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::rgb(r, g, b))),
                transform: Transform::from_translation(to_world(
                    scenario,
                    body.center(),
                    i as f32,
                )),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn setup_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    spawn_body_entities(&mut commands, &scenario, &mut meshes, &mut materials);

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 30.0,
                color: Color::BLACK,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        MultiplierText,
    ));
}

/// Edge-triggered key events. Held-key handling lives in the fixed tick so
/// the multiplier step stays per-tick.
fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut reset_events: EventWriter<SimulationReset>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.engine.handle(SimCommand::PauseToggle);
    }
    if keys.just_pressed(KeyCode::ShiftLeft) {
        scenario.engine.handle(SimCommand::SingleStep);
    }
    if keys.just_pressed(KeyCode::ShiftRight) {
        match scenario.reset() {
            Ok(()) => {
                reset_events.send(SimulationReset);
            }
            // The config was validated at startup, so this is unreachable in
            // practice; keep the old run alive rather than crash.
            Err(err) => error!("restart failed: {err}"),
        }
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit);
    }
}

/// One fixed-rate tick: held-key multiplier adjustment, then the physics
/// step (gated by the pause/single-step state inside the engine).
fn tick_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    let step = scenario.multiplier_step();
    if keys.pressed(KeyCode::ArrowUp) {
        scenario.engine.nudge_multiplier(step);
    }
    if keys.pressed(KeyCode::ArrowDown) {
        scenario.engine.nudge_multiplier(-step);
    }

    scenario.engine.tick();
}

/// Rebuild the body entities after a restart.
fn respawn_bodies_system(
    mut commands: Commands,
    mut reset_events: EventReader<SimulationReset>,
    existing: Query<Entity, With<BodyIndex>>,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if reset_events.read().last().is_none() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    spawn_body_entities(&mut commands, &scenario, &mut meshes, &mut materials);
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(body) = scenario.engine.registry.get(*i) {
            transform.translation = to_world(&scenario, body.center(), *i as f32);
        }
    }
}

fn hud_text_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<MultiplierText>>) {
    for mut text in &mut query {
        text.sections[0].value = format!(
            "Gravity multiplier: {}",
            scenario.engine.ctx.display_multiplier()
        );
    }
}
