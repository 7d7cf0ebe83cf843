use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use pong_champ::{AppState, Ball, GameConfig, GameplayPlugin, MenuPlugin, Paddle, Score};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(GameConfig::default());
    app.init_state::<AppState>();
    app.add_plugins((MenuPlugin, GameplayPlugin));
    // Pin the fixed clock so wall time cannot sneak simulation ticks into
    // update(); tests drive ticks explicitly where they need them.
    app.insert_resource(Time::<Fixed>::from_seconds(1e9));
    app
}

fn current_state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn press_space(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
}

fn paddle_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query::<&Paddle>();
    q.iter(app.world()).count()
}

fn ball_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query::<&Ball>();
    q.iter(app.world()).count()
}

#[test]
fn menu_is_inert_without_input() {
    let mut app = headless_app();
    app.update();
    app.update();
    assert_eq!(current_state(&app), AppState::Menu);
    assert_eq!(paddle_count(&mut app), 0, "no entities before play starts");
    assert_eq!(*app.world().resource::<Score>(), Score::default());
}

#[test]
fn space_transitions_on_the_next_update() {
    let mut app = headless_app();
    app.update();
    press_space(&mut app);
    app.update();
    // The transition is requested this frame and applied on the next one.
    assert_eq!(current_state(&app), AppState::Menu);
    app.update();
    assert_eq!(current_state(&app), AppState::Play);
}

#[test]
fn entering_play_spawns_the_court() {
    let mut app = headless_app();
    app.update();
    press_space(&mut app);
    app.update();
    app.update();
    assert_eq!(current_state(&app), AppState::Play);
    assert_eq!(paddle_count(&mut app), 2);
    assert_eq!(ball_count(&mut app), 1);
    assert_eq!(*app.world().resource::<Score>(), Score::default());
}

#[test]
fn play_is_terminal() {
    let mut app = headless_app();
    app.update();
    press_space(&mut app);
    app.update();
    app.update();
    assert_eq!(current_state(&app), AppState::Play);

    // More presses change nothing: same scene, no duplicate entities.
    press_space(&mut app);
    app.update();
    app.update();
    assert_eq!(current_state(&app), AppState::Play);
    assert_eq!(paddle_count(&mut app), 2);
    assert_eq!(ball_count(&mut app), 1);
}
