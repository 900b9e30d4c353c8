//! Kibel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use kibel::audio::AudioManager;
    use kibel::consts::*;
    use kibel::input::{InputMode, PointerMotion};
    use kibel::platform::LocalStorage;
    use kibel::sim::{Body, GameState};
    use kibel::{Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorage>,
        audio: AudioManager,
        settings: Settings,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
        last_time: f64,
        pointer_locked: bool,
        desktop: bool,
    }

    impl Game {
        /// Convert a client x coordinate to logical screen pixels
        fn to_screen_x(&self, client_x: f32) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            let width = rect.width().max(1.0) as f32;
            (client_x - rect.left() as f32) * SCREEN_WIDTH / width
        }

        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let events = self.session.frame(dt);
            self.audio.play_events(&events);
            self.draw();
            self.update_hud();
        }

        fn draw(&self) {
            let ctx = &self.ctx;
            let state: &GameState = &self.session.state;

            ctx.set_fill_style_str("#00ccff");
            ctx.fill_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
            ctx.set_fill_style_str("#3a9d23");
            ctx.fill_rect(0.0, 16.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);

            let bomber = state.bomber.aabb();
            ctx.set_fill_style_str(if state.bomber.smiling { "#ffd400" } else { "#e0e0e0" });
            ctx.fill_rect(
                bomber.min.x as f64,
                bomber.min.y as f64,
                bomber.width() as f64,
                bomber.height() as f64,
            );

            ctx.set_fill_style_str("#202020");
            for (_, bomb) in state.bombs.iter_alive() {
                let b = bomb.aabb();
                ctx.fill_rect(b.min.x as f64, b.min.y as f64, b.width() as f64, b.height() as f64);
            }

            if state.bucket.visible {
                let half_w = (BUCKET_WIDTH / 2.0) as f64;
                let half_h = (BUCKET_HEIGHT / 2.0) as f64;
                let pos = state.bucket.pos;
                ctx.set_fill_style_str("#8b5a2b");
                ctx.fill_rect(
                    pos.x as f64 - half_w,
                    pos.y as f64 - half_h,
                    BUCKET_WIDTH as f64,
                    BUCKET_HEIGHT as f64,
                );
                let water = state.bucket.aabb();
                ctx.set_fill_style_str("#1e64c8");
                ctx.fill_rect(
                    water.min.x as f64 + 2.0,
                    water.min.y as f64,
                    water.width() as f64 - 4.0,
                    water.height() as f64 - 2.0,
                );
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_muted();
            self.settings.save(&mut LocalStorage);
            self.audio.apply_settings(&self.settings);
            log::info!("Sound {}", if muted { "off" } else { "on" });
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let state = &self.session.state;

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&state.score().to_string()));
            }
            if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
                el.set_text_content(Some(&state.high_score().to_string()));
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let class = if state.game_over { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    // JS binding for pointer lock
    #[wasm_bindgen(inline_js = "
        export function request_pointer_lock() {
            const canvas = document.getElementById('canvas');
            if (canvas && canvas.requestPointerLock) {
                const result = canvas.requestPointerLock();
                if (result && result.catch) {
                    result.catch(e => console.warn('Pointer lock failed:', e));
                }
            }
        }
    ")]
    extern "C" {
        fn request_pointer_lock();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Kibel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        ctx.set_image_smoothing_enabled(false);

        let desktop = window.navigator().max_touch_points() == 0;
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(SCREEN_WIDTH as f64) as f32;

        let storage = LocalStorage;
        let settings = Settings::load(&storage);
        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(
            storage,
            settings.preset.tuning(),
            seed,
            InputMode::for_device(desktop),
            viewport_width,
        );
        session.input = session.input.clone().with_pointer_divisor(settings.pointer_divisor);

        let audio = AudioManager::new(&settings);
        let preset_name = settings.preset.as_str();
        let game = Rc::new(RefCell::new(Game {
            session,
            audio,
            settings,
            ctx,
            canvas: canvas.clone(),
            last_time: 0.0,
            pointer_locked: false,
            desktop,
        }));

        log::info!(
            "Game initialized with seed {} ({}, {} balance)",
            seed,
            if desktop { "pointer lock" } else { "swipe" },
            preset_name
        );

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Kibel running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Pointer lock change handler
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let locked = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.pointer_lock_element())
                    .is_some();
                log::info!("Pointer lock {}", if locked { "acquired" } else { "released" });
                game.borrow_mut().pointer_locked = locked;
            });
            let _ = document.add_event_listener_with_callback(
                "pointerlockchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Mouse down - request pointer lock and start the round
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                let x = g.to_screen_x(event.client_x() as f32);
                g.session.pointer_down(x);
                let wants_lock = g.desktop && !g.pointer_locked;
                drop(g);
                if wants_lock {
                    request_pointer_lock();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - relative movement while locked
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let motion = PointerMotion {
                    movement_x: event.movement_x() as f32,
                    x: g.to_screen_x(event.client_x() as f32),
                    locked: g.pointer_locked,
                    from_click: false,
                };
                g.session.pointer_move(&motion);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.pointer_up();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    g.audio.resume();
                    let x = g.to_screen_x(touch.client_x() as f32);
                    g.session.pointer_down(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let motion = PointerMotion {
                        x: g.to_screen_x(touch.client_x() as f32),
                        ..Default::default()
                    };
                    g.session.pointer_move(&motion);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "m" | "M" => game.borrow_mut().toggle_mute(),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().session.pointer_up();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game.borrow_mut().frame(time);
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kibel (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    // kibel [seed] [classic|gentle]
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(1);
    let preset = args
        .next()
        .and_then(|s| kibel::tuning::TuningPreset::from_str(&s))
        .unwrap_or_default();
    log::info!("Autopilot: seed {}, {} balance", seed, preset.as_str());
    autopilot::run(seed, preset.tuning());
}

/// Headless demo: a speed-limited bucket chases the lowest bomb until it
/// can no longer keep up
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use kibel::input::InputMode;
    use kibel::platform::MemoryStorage;
    use kibel::sim::{GameEvent, RoundState};
    use kibel::{Session, Tuning};

    const DT: f32 = 1.0 / 60.0;
    /// Bucket speed cap (px/s)
    const MAX_BUCKET_SPEED: f32 = 110.0;
    const MAX_FRAMES: u32 = 60 * 60 * 30;

    pub fn run(seed: u64, tuning: Tuning) {
        let mut session = Session::new(
            MemoryStorage::new(),
            tuning,
            seed,
            InputMode::PointerLock,
            1024.0,
        );

        for _ in 0..MAX_FRAMES {
            if session.state.round == RoundState::Idle && !session.state.game_over {
                session.start_round();
            }

            let bucket_x = session.state.bucket.pos.x;
            let target = session
                .state
                .bombs
                .iter_alive()
                .map(|(_, b)| b)
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|b| b.pos.x + kibel::consts::BOMB_SIZE / 2.0);
            if let Some(x) = target {
                let step = (x - bucket_x).clamp(-MAX_BUCKET_SPEED * DT, MAX_BUCKET_SPEED * DT);
                session.set_bucket_target(bucket_x + step);
            }

            for event in session.frame(DT) {
                match event {
                    GameEvent::RoundCleared { difficulty } => {
                        log::info!("Cleared, next difficulty {}", difficulty)
                    }
                    GameEvent::LifeLost { lives } => log::info!("Missed! {} lives left", lives),
                    GameEvent::ExtraLife { lives } => log::info!("Extra life, {} lives", lives),
                    _ => {}
                }
            }

            if session.state.game_over {
                break;
            }
        }

        let state = &session.state;
        println!(
            "seed {}: score {} after {} rounds (best {})",
            seed,
            state.score(),
            state.rounds_cleared,
            state.high_score()
        );
    }
}
