//! Ghost Chase entry point
//!
//! Hosts the lobby screen and drives the fixed-rate simulation loop. The
//! frame loop is the single owner of the game state; the launcher handle
//! gates session starts and carries results (including faults) back to the
//! lobby without ever crashing the window.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use ghost_chase::consts::*;
use ghost_chase::input;
use ghost_chase::launcher::{Launcher, RunResult};
use ghost_chase::render::{self, Assets};
use ghost_chase::sim::{step, GameState, TickInput, Winner};

/// One running match and its fixed-step clock
struct Session {
    state: GameState,
    /// Simulation timestamp, advanced by the fixed step so the sim stays
    /// deterministic regardless of render frame pacing
    clock_ms: u64,
    accumulator: f32,
}

impl Session {
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed, 0),
            clock_ms: 0,
            accumulator: 0.0,
        }
    }

    /// Run as many fixed steps as the elapsed frame time covers.
    ///
    /// 60 steps/s during play, 30 on the terminal screen. One-shot inputs
    /// fire on the first substep only.
    fn advance(&mut self, input: TickInput, frame_dt: f32) {
        const MAX_SUBSTEPS: u32 = 8;

        let hz = if self.state.over { TERMINAL_HZ } else { SIM_HZ };
        let step_secs = 1.0 / hz as f32;
        let step_ms = 1000 / hz as u64;

        self.accumulator += frame_dt.min(0.1);
        let mut input = input;
        let mut substeps = 0;
        while self.accumulator >= step_secs && substeps < MAX_SUBSTEPS {
            self.clock_ms += step_ms;
            step(&mut self.state, &input, self.clock_ms);
            self.accumulator -= step_secs;
            substeps += 1;
            // Edge-triggered actions must not repeat across substeps
            input.toggle_light = false;
            input.restart = false;
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Ghost Chase".to_owned(),
        window_width: FIELD_WIDTH as i32,
        window_height: FIELD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown simulation panic".to_string()
    }
}

fn draw_lobby(last_result: &Option<RunResult>) {
    clear_background(Color::new(0.18, 0.18, 0.18, 1.0));

    let center = |text: &str, y: f32, size: u16, color: Color| {
        let dims = measure_text(text, None, size, 1.0);
        draw_text(text, FIELD_WIDTH / 2.0 - dims.width / 2.0, y, size as f32, color);
    };

    center("GHOST CHASE", 150.0, 64, ORANGE);
    center("A game of hunters and ghosts", 190.0, 24, LIGHTGRAY);

    center("Hunter: arrow keys to move, L for the light", 280.0, 22, WHITE);
    center("Ghost: WASD to move, stay out of the light", 310.0, 22, WHITE);

    center("Press ENTER to play, ESC to quit", 400.0, 28, ORANGE);

    match last_result {
        Some(RunResult::Ok(Some(Winner::Hunter))) => {
            center("Last match: the hunter won", 460.0, 22, LIGHTGRAY);
        }
        Some(RunResult::Ok(Some(Winner::Ghost))) => {
            center("Last match: the ghost won", 460.0, 22, LIGHTGRAY);
        }
        Some(RunResult::Failure(message)) => {
            center(&format!("Something went wrong: {message}"), 460.0, 22, RED);
        }
        _ => {}
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Ghost Chase starting");

    let assets = Assets::load().await;
    let mut launcher = Launcher::new();
    let mut session: Option<Session> = None;
    let mut last_result: Option<RunResult> = None;

    loop {
        match session.take() {
            None => {
                if is_key_pressed(KeyCode::Escape) {
                    break;
                }
                if is_key_pressed(KeyCode::Enter) && launcher.begin().is_ok() {
                    let seed = time_seed();
                    log::info!("starting session with seed {seed}");
                    session = Some(Session::new(seed));
                }
                draw_lobby(&last_result);
            }
            Some(mut current) => {
                // Quit is cooperative: checked once per frame at input poll
                let input = input::poll();
                if input.quit {
                    let winner = if current.state.over {
                        current.state.winner
                    } else {
                        None
                    };
                    launcher.finish(RunResult::Ok(winner));
                    last_result = launcher.take_result();
                } else {
                    let frame_dt = get_frame_time();
                    let outcome = catch_unwind(AssertUnwindSafe(|| {
                        current.advance(input, frame_dt);
                        render::draw(&current.state, &assets);
                    }));

                    match outcome {
                        Ok(()) => session = Some(current),
                        Err(payload) => {
                            let message = panic_message(payload);
                            launcher.finish(RunResult::Failure(message));
                            last_result = launcher.take_result();
                        }
                    }
                }
            }
        }

        next_frame().await;
    }

    log::info!("Ghost Chase shutting down");
}
