use bevy::prelude::*;

use crate::gameplay::{Ball, Court, Paddle};

const DASH_SIZE: f32 = 5.0;
const DASH_SPACING: f32 = 15.0;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Give every newly spawned paddle a white quad of its own size.
pub fn attach_paddle_sprites(
    mut commands: Commands,
    court: Res<Court>,
    paddles: Query<(Entity, &Paddle), Added<Paddle>>,
) {
    for (entity, paddle) in &paddles {
        let world = court.to_world(paddle.pos + paddle.size * 0.5);
        commands.entity(entity).insert((
            Sprite {
                color: Color::WHITE,
                custom_size: Some(paddle.size),
                ..default()
            },
            Transform::from_translation(world.extend(0.0)),
        ));
    }
}

/// Give every newly spawned ball a filled circle mesh.
pub fn attach_ball_mesh(
    mut commands: Commands,
    court: Res<Court>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    balls: Query<(Entity, &Ball), Added<Ball>>,
) {
    for (entity, ball) in &balls {
        let world = court.to_world(ball.pos);
        commands.entity(entity).insert((
            Mesh2d(meshes.add(Circle::new(ball.radius))),
            MeshMaterial2d(materials.add(Color::WHITE)),
            Transform::from_translation(world.extend(0.0)),
        ));
    }
}

/// Static dashed line down the middle of the court. Decoration only.
pub fn spawn_center_line(mut commands: Commands, court: Res<Court>) {
    let x = (court.width + DASH_SIZE) * 0.5;
    let mut y = 0.0;
    while y < court.height {
        let world = court.to_world(Vec2::new(x, y + DASH_SIZE * 0.5));
        commands.spawn((
            Name::new("CenterLineDash"),
            Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::splat(DASH_SIZE)),
                ..default()
            },
            Transform::from_translation(world.extend(0.0)),
        ));
        y += DASH_SPACING;
    }
}
