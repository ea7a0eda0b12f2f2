//! Lane Runner entry point
//!
//! Runs a headless session: an autopilot plays the chosen game for a number of
//! fixed ticks while events flow into the game context and frames into a
//! statistics renderer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use lane_runner::consts::SIM_DT;
use lane_runner::framework::Game;
use lane_runner::framework::demo::{self, DemoScene};
use lane_runner::persistence::{FileStore, MemoryStore, Persistence, unix_now};
use lane_runner::renderer::{self, FrameStats, Renderer};
use lane_runner::highscores::format_date;
use lane_runner::sim::{
    self, ClassicState, Difficulty, FixedTimestep, GamePhase, GameTime, RunState,
};
use lane_runner::{GameContext, TickInput, autopilot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameKind {
    /// Three-lane car runner
    Car,
    /// Classic vertical runner
    Classic,
    /// Entity framework demo scene
    Framework,
}

#[derive(Parser)]
#[command(name = "lane-runner")]
#[command(about = "Headless autopilot session for the arcade runners")]
struct Cli {
    #[arg(long, value_enum, default_value_t = GameKind::Car)]
    game: GameKind,
    /// easy, medium or hard (defaults to the saved setting)
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// Fixed ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Where scores, saves and settings live
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Keep everything in memory; nothing is written
    #[arg(long)]
    no_save: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

/// Frame time the fake display delivers (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Ticks to linger on the game over screen before restarting
const RESTART_DELAY: u64 = 60;

/// One of the three games, driven tick by tick
enum Session {
    Car(RunState),
    Classic(ClassicState),
    Framework {
        game: Game,
        scene: DemoScene,
        time: GameTime,
        steps: u64,
    },
}

impl Session {
    fn new(kind: GameKind, difficulty: Difficulty, seed: u64) -> Self {
        match kind {
            GameKind::Car => Session::Car(RunState::new(difficulty, seed)),
            GameKind::Classic => Session::Classic(ClassicState::new(seed)),
            GameKind::Framework => {
                let mut game = Game::new();
                let scene = demo::build_scene(&mut game);
                Session::Framework {
                    game,
                    scene,
                    time: GameTime::default(),
                    steps: 0,
                }
            }
        }
    }

    /// Advance one fixed tick; `idle` counts ticks spent off the playing phase
    fn tick(&mut self, idle: &mut u64) -> Vec<lane_runner::GameEvent> {
        match self {
            Session::Car(state) => {
                let input = gate_restart(autopilot::car_runner(state), state.phase, idle);
                sim::tick(state, &input);
                state.drain_events()
            }
            Session::Classic(state) => {
                let input = gate_restart(autopilot::classic_runner(state), state.phase, idle);
                sim::classic::tick(state, &input);
                state.drain_events()
            }
            Session::Framework {
                game,
                scene,
                time,
                steps,
            } => {
                let controls = demo::autopilot(*steps);
                demo::animate_player(game, scene, controls);
                time.update(SIM_DT);
                game.step(time, controls);
                *steps += 1;
                game.drain_events()
            }
        }
    }

    fn frame(&self) -> renderer::Frame {
        match self {
            Session::Car(state) => renderer::car_runner_frame(state),
            Session::Classic(state) => renderer::classic_runner_frame(state),
            Session::Framework { game, .. } => renderer::framework_frame(game),
        }
    }
}

/// Hold the start command until the game over screen has shown for a while
fn gate_restart(mut input: TickInput, phase: GamePhase, idle: &mut u64) -> TickInput {
    match phase {
        GamePhase::GameOver => {
            *idle += 1;
            input.start = *idle > RESTART_DELAY;
        }
        _ => *idle = 0,
    }
    input
}

fn run<P: Persistence>(cli: &Cli, store: P) {
    let mut ctx = GameContext::new(store);
    let difficulty = cli.difficulty.unwrap_or(ctx.settings.difficulty);
    let seed = cli.seed.unwrap_or_else(unix_now);
    log::info!("Starting {:?} session: {} ticks, seed {seed}", cli.game, cli.ticks);

    let mut session = Session::new(cli.game, difficulty, seed);
    let mut timestep = FixedTimestep::default();
    let mut renderer = FrameStats::default();
    let mut idle = 0;
    let mut ticks = 0;
    let mut tones = 0;

    ctx.click();
    while ticks < cli.ticks {
        let steps = timestep.accumulate(FRAME_DT);
        for _ in 0..steps {
            if ticks >= cli.ticks {
                break;
            }
            let events = session.tick(&mut idle);
            ctx.handle(&events);
            ticks += 1;
        }
        tones += ctx.audio.drain_tones().len();
        renderer.render(&session.frame());
    }

    let play_secs = (ticks as f32 * timestep.dt()) as u64;
    ctx.finish_session(play_secs);
    ctx.save_settings();

    let hud = renderer.last_hud;
    log::info!(
        "Session over: {} runs recorded, score {} (best {}), distance {}m, lives {}",
        ctx.runs_recorded(),
        hud.score,
        ctx.scores.high(),
        hud.distance,
        hud.lives
    );
    log::info!(
        "{} frames, {} draw items, {tones} tones, {play_secs}s simulated",
        renderer.frames,
        renderer.items
    );
    if let Some(top) = ctx.high_scores.entries.first() {
        log::info!(
            "Leaderboard top: {} ({}m, {})",
            top.score,
            top.distance,
            format_date(top.timestamp, unix_now())
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.no_save {
        run(&cli, MemoryStore::default());
    } else {
        let store = cli
            .data_dir
            .clone()
            .map(FileStore::new)
            .unwrap_or_default();
        log::info!("Data directory: {}", store.base_dir().display());
        run(&cli, store);
    }
}
