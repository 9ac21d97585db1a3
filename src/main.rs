//! Flappy Bird entry point
//!
//! In the browser: wires the canvas, the frame loop, the spawn timer and input
//! into the simulation. Natively: runs the game headless and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_bird::GameConfig;
    use flappy_bird::error::StartupError;
    use flappy_bird::input::{JumpSource, classify_key};
    use flappy_bird::renderer::canvas::SpriteSheet;
    use flappy_bird::renderer::{CanvasSurface, draw_frame};
    use flappy_bird::sim::{GameEvent, World, jump, seeded_rng, spawn_pair, tick};
    use rand_pcg::Pcg32;

    /// Canvas element id
    const BOARD_ID: &str = "board";

    /// Game instance holding all state
    struct Game {
        world: World,
        rng: Pcg32,
        surface: CanvasSurface,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64, surface: CanvasSurface) -> Self {
            Self {
                world: World::new(config),
                rng: seeded_rng(seed),
                surface,
            }
        }

        /// Animation frame: step, then redraw if anything moved
        fn frame(&mut self) {
            if tick(&mut self.world) {
                draw_frame(&self.world, &mut self.surface);
            }
            self.log_events();
        }

        /// Spawn timer fired
        fn spawn(&mut self) {
            spawn_pair(&mut self.world, &mut self.rng);
            self.log_events();
        }

        fn jump(&mut self, source: JumpSource) {
            log::debug!("Jump ({:?})", source);
            jump(&mut self.world);
            self.log_events();
        }

        fn log_events(&mut self) {
            for event in self.world.drain_events() {
                match event {
                    GameEvent::Crashed(cause) => {
                        log::info!("Game over ({:?}), score {}", cause, self.world.score())
                    }
                    GameEvent::Reset => log::info!("Game restarted"),
                    GameEvent::Passed { score } => log::debug!("Score: {}", score),
                    GameEvent::Spawned { gap_top_y } => log::debug!("Pipes spawned at {:.1}", gap_top_y),
                }
            }
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        log::info!("Flappy Bird starting...");

        let window = web_sys::window().ok_or(StartupError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(StartupError::MissingGlobal("document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(BOARD_ID)
            .ok_or(StartupError::MissingElement(BOARD_ID))?
            .dyn_into()
            .map_err(|_| StartupError::NotACanvas(BOARD_ID))?;

        let config = GameConfig::load()?;
        let spawn_interval_ms = config.spawn_interval_ms;

        let sprites = SpriteSheet::load().await?;
        let surface = CanvasSurface::new(&canvas, config.board_width, config.board_height, sprites)?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed, surface)));
        log::info!("Game initialized with seed: {}", seed);

        // Show the bird before the first frame lands
        {
            let mut g = game.borrow_mut();
            let Game { world, surface, .. } = &mut *g;
            draw_frame(world, surface);
        }

        setup_input_handlers(&window, &canvas, game.clone())?;
        setup_spawn_timer(&window, game.clone(), spawn_interval_ms)?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Bird running!");
        Ok(())
    }

    fn js_error(e: JsValue) -> StartupError {
        StartupError::Js(format!("{:?}", e))
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), StartupError> {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(source) = classify_key(&event.code()) {
                    game.borrow_mut().jump(source);
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().jump(JumpSource::Mouse);
            });
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            closure.forget();
        }

        // Touch start; not passive so the page doesn't scroll or zoom
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().jump(JumpSource::Touch);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                    &options,
                )
                .map_err(js_error)?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_spawn_timer(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
        interval_ms: u32,
    ) -> Result<(), StartupError> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().spawn();
        });
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                i32::try_from(interval_ms).unwrap_or(i32::MAX),
            )
            .map_err(js_error)?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();

        // Always re-arm, even when the game is over, so a restart picks up
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::process::ExitCode;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use flappy_bird::GameConfig;
    use flappy_bird::headless::{self, HeadlessOptions};

    /// Run Flappy Bird headless and print a JSON summary
    #[derive(Debug, Parser)]
    #[command(version, about)]
    struct Cli {
        /// Frames to simulate (60 per second)
        #[arg(long, default_value_t = 3600)]
        frames: u64,
        /// Seed for pipe placement (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Never flap; the bird just falls
        #[arg(long)]
        no_autopilot: bool,
        /// Stop after the first crash instead of restarting
        #[arg(long)]
        no_restart: bool,
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();
        log::info!("Flappy Bird (native) starting...");
        log::info!("Browser build: run with `trunk serve`; this binary runs headless");

        let config = match GameConfig::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };

        let seed = cli.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        let options = HeadlessOptions {
            frames: cli.frames,
            seed,
            autopilot: !cli.no_autopilot,
            restart: !cli.no_restart,
        };

        let summary = headless::run(config, &options);
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to encode summary: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
