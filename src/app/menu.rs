use bevy::prelude::*;

use super::state::AppState;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Menu), spawn_menu_ui)
            .add_systems(
                Update,
                handle_menu_input.run_if(in_state(AppState::Menu)),
            )
            .add_systems(OnExit(AppState::Menu), despawn_menu_ui);
    }
}

fn handle_menu_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        info!(target: "menu", "starting play");
        next_state.set(AppState::Play);
    }
}

#[derive(Component)]
struct MenuUiRoot;

fn spawn_menu_ui(mut commands: Commands) {
    commands
        .spawn((
            MenuUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(32.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("PongChamp"),
                TextFont {
                    font_size: 50.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                Text::new("Press Space to play"),
                TextFont {
                    font_size: 25.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn despawn_menu_ui(mut commands: Commands, q_root: Query<Entity, With<MenuUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
