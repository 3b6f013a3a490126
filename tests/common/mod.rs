#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use brickfall_posts::fetch::{ApiEnvelope, FetchError, Post, PostsSource};
use brickfall_posts::app::AppStatePlugin;
use brickfall_posts::interaction::input::lane_input::LaneInputPlugin;
use brickfall_posts::minigame::{MinigamePlugin, MinigameRng};
use brickfall_posts::rendering::game_over::GameOverOverlayPlugin;
use brickfall_posts::{ActivePostsSource, BrickfallPlugin, GameConfig};

/// Defaults with no random bricks and a light confetti load.
pub fn quiet_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.minigame.spawn_chance = 0.0;
    cfg.confetti.pieces = 12;
    cfg
}

/// Headless app: every update advances virtual time by one minigame tick (100ms).
pub fn headless_app(source: impl PostsSource, cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(cfg)
        .insert_resource(ActivePostsSource::new(source))
        .insert_resource(MinigameRng::seeded(42))
        .add_plugins(BrickfallPlugin);
    app
}

/// Page stays in Loading: no fetch plugin, only the minigame, its input and overlay.
pub fn minigame_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(cfg)
        .insert_resource(MinigameRng::seeded(42))
        .add_plugins((
            AppStatePlugin,
            LaneInputPlugin,
            MinigamePlugin,
            GameOverOverlayPlugin,
        ));
    app
}

/// Updates until `pred` holds; false if it never did within `max_updates`.
pub fn run_until(app: &mut App, max_updates: usize, mut pred: impl FnMut(&mut World) -> bool) -> bool {
    for _ in 0..max_updates {
        app.update();
        if pred(app.world_mut()) {
            return true;
        }
        // fetch tasks run on the IO pool; give them a moment
        std::thread::sleep(Duration::from_millis(1));
    }
    false
}

pub fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

pub fn page_state(world: &World) -> brickfall_posts::AppState {
    *world.resource::<State<brickfall_posts::AppState>>().get()
}

pub fn game_state(world: &World) -> brickfall_posts::MinigameState {
    *world.resource::<State<brickfall_posts::MinigameState>>().get()
}

pub fn post(id: i64, title: &str, body: &str) -> Post {
    Post {
        id: id.into(),
        title: title.into(),
        body: body.into(),
    }
}

/// Answers immediately with a fixed result; counts calls.
pub struct CannedSource {
    pub response: Mutex<Option<Result<ApiEnvelope, FetchError>>>,
    pub calls: Arc<AtomicUsize>,
}

impl CannedSource {
    pub fn new(response: Result<ApiEnvelope, FetchError>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: Mutex::new(Some(response)),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl PostsSource for CannedSource {
    fn fetch(&self) -> Result<ApiEnvelope, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .ok()
            .and_then(|mut r| r.take())
            .unwrap_or_else(|| Err(transport_failure()))
    }

    fn describe(&self) -> String {
        "canned".into()
    }
}

/// A real connection-refused error: GET against a port that was just released.
pub fn transport_failure() -> FetchError {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|addr| addr.port())
        .expect("bind ephemeral port");
    let err = reqwest::blocking::get(format!("http://127.0.0.1:{port}/api/external"))
        .expect_err("nothing listens on a released port");
    FetchError::Transport(err)
}
