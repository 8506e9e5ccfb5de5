use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;

use crate::simulation::engine::step;
use crate::simulation::scenario::Scenario;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 110.0;

/// Bevy 3D viewer: steps the scenario once per frame and mirrors every body
/// into a sphere entity. Space spawns a new random body.
pub fn run_3d(scenario: Scenario) {
    println!(
        "run_3d: starting Bevy 3D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (physics_step_3d, handle_spawn_key, spawn_body_visuals, sync_transforms_3d),
        )
        .run();
}

/// Startup system: spawn camera, light, and the container wireframe
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Simple 3D camera looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 25.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Basic point light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2_000_000.0,
            range: 500.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(40.0, 60.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_container_edges(&mut commands, &mut meshes, &mut materials, &scenario);
}

/// Per-frame physics integration: one fixed step of h0
fn physics_step_3d(mut scenario: ResMut<Scenario>) {
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    let dt = parameters.h0;
    step(system, forces, dt);
}

/// Space bar appends one random body from the population ranges
fn handle_spawn_key(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.spawn_random_body();
    }
}

/// Spawn a sphere entity for every body that does not have one yet.
///
/// Runs every frame so runtime spawns get their visuals too; `spawned`
/// remembers how far into the body list we already are.
fn spawn_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
    mut spawned: Local<usize>,
) {
    let bodies = &scenario.system.bodies;

    for (i, b) in bodies.iter().enumerate().skip(*spawned) {
        let c = b.color;

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(b.radius() as f32).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(c[0], c[1], c[2]),
                    ..Default::default()
                }),
                transform: Transform::from_xyz(b.x.x as f32, b.x.y as f32, b.x.z as f32),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    *spawned = bodies.len();
}

/// Mirror simulation positions into entity transforms
fn sync_transforms_3d(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation = Vec3::new(b.x.x as f32, b.x.y as f32, b.x.z as f32);
        }
    }
}

// =========================================================================================
// Container wireframe: 12 thin boxes along the cube edges
// =========================================================================================

fn spawn_container_edges(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scenario: &Scenario,
) {
    let h = scenario.system.container.half_extent as f32;
    let centre = scenario.system.container.centre;
    let centre = Vec3::new(centre.x as f32, centre.y as f32, centre.z as f32);

    let edge_len = 2.0 * h;
    let thickness = 0.05 * h;

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.4, 0.4),
        unlit: true,
        ..Default::default()
    });

    // Edges parallel to x, then y, then z; each set sits on four corners of
    // the two faces perpendicular to it
    let x_mesh = meshes.add(Cuboid::new(edge_len, thickness, thickness).mesh());
    let y_mesh = meshes.add(Cuboid::new(thickness, edge_len, thickness).mesh());
    let z_mesh = meshes.add(Cuboid::new(thickness, thickness, edge_len).mesh());

    for sy in [-h, h] {
        for sz in [-h, h] {
            commands.spawn(PbrBundle {
                mesh: x_mesh.clone(),
                material: material.clone(),
                transform: Transform::from_translation(centre + Vec3::new(0.0, sy, sz)),
                ..Default::default()
            });
        }
    }
    for sx in [-h, h] {
        for sz in [-h, h] {
            commands.spawn(PbrBundle {
                mesh: y_mesh.clone(),
                material: material.clone(),
                transform: Transform::from_translation(centre + Vec3::new(sx, 0.0, sz)),
                ..Default::default()
            });
        }
    }
    for sx in [-h, h] {
        for sy in [-h, h] {
            commands.spawn(PbrBundle {
                mesh: z_mesh.clone(),
                material: material.clone(),
                transform: Transform::from_translation(centre + Vec3::new(sx, sy, 0.0)),
                ..Default::default()
            });
        }
    }
}
