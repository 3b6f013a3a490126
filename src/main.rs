use std::path::PathBuf;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use brickfall_posts::app::ConfigWarnings;
use brickfall_posts::fetch::{ActivePostsSource, FilePostsSource, HttpPostsSource};
use brickfall_posts::{BrickfallPlugin, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "brickfall_posts", about = "Post grid with a falling-brick game while it loads")]
struct Cli {
    /// RON config file
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
    /// Full URL of the posts endpoint (overrides api.base_url + api.path)
    #[arg(long)]
    endpoint: Option<String>,
    /// Read the API envelope from a JSON file instead of the network
    #[arg(long, conflicts_with = "endpoint")]
    posts_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration (fall back to defaults if missing)
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);
    let warnings = load_err
        .map(|e| format!("{}: {e}; using defaults", cli.config.display()))
        .into_iter()
        .collect::<Vec<_>>();

    let source = match (&cli.posts_file, &cli.endpoint) {
        (Some(path), _) => ActivePostsSource::new(FilePostsSource::new(path)),
        (None, Some(url)) => ActivePostsSource::new(HttpPostsSource::new(url.clone(), cfg.api.timeout())),
        (None, None) => ActivePostsSource::new(HttpPostsSource::new(cfg.api.endpoint(), cfg.api.timeout())),
    };

    let level = cfg.log.level.parse::<Level>().unwrap_or(Level::INFO);

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigWarnings(warnings))
        .insert_resource(source)
        .insert_resource(ClearColor(Color::WHITE))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: cfg.log.filter.clone(),
                    ..default()
                }),
        )
        .add_systems(Startup, spawn_camera)
        .add_plugins(BrickfallPlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("UiCamera")));
}
