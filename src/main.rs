//! Eras Catch entry point
//!
//! Native: headless runner that plays a game (optionally under autopilot)
//! and prints the final snapshot as JSON.
//! Web: browser host wiring keyboard/touch input and the animation frame
//! loop to the simulation; drawing is left to page script.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, TouchEvent};

    use eras_catch::sim::{Arcade, Direction, Snapshot, TickInput, autopilot};

    /// Browser-side game instance
    struct Game {
        arcade: Arcade,
        /// Host run flag (the Start/Pause button)
        running: bool,
        left: bool,
        right: bool,
        /// Held on-screen arrow button
        touch_dir: Direction,
        autopilot: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                arcade: Arcade::new(seed),
                running: false,
                left: false,
                right: false,
                touch_dir: Direction::None,
                autopilot: false,
            }
        }

        /// Start/pause; after a finished game this means "reset then run"
        fn toggle_running(&mut self) {
            if self.arcade.state().phase.is_terminal() {
                self.arcade.reset();
                self.running = true;
            } else {
                self.running = !self.running;
            }
        }

        fn reset(&mut self) {
            self.arcade.reset();
            self.running = false;
        }

        fn direction(&self) -> Direction {
            if self.autopilot {
                return autopilot::steer(self.arcade.state());
            }
            Direction::from_keys(
                self.left || self.touch_dir == Direction::Left,
                self.right || self.touch_dir == Direction::Right,
            )
        }

        fn update(&mut self) -> Snapshot {
            let input = TickInput::new(self.direction(), self.running);
            let snap = self.arcade.tick(&input);
            if snap.phase.is_terminal() {
                self.running = false;
            }
            snap
        }
    }

    fn set_text(document: &web_sys::Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Update HUD elements in DOM and hand the snapshot to page script
    fn present(snap: &Snapshot) {
        let Some(window) = web_sys::window() else { return };
        if let Some(document) = window.document() {
            set_text(&document, "hud-score", &snap.score.to_string());
            set_text(&document, "hud-lives", &"❤".repeat(snap.lives as usize));
            set_text(&document, "hud-level", &snap.level.to_string());
            set_text(&document, "hud-era", snap.era);
            set_text(
                &document,
                "hud-meter",
                &format!("{:.0}%", snap.proposal_meter),
            );
        }

        let hook = js_sys::Reflect::get(&window, &JsValue::from_str("renderArcade"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if let Some(hook) = hook {
            match snap.to_json() {
                Ok(json) => {
                    if let Err(e) = hook.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                        log::warn!("renderArcade failed: {:?}", e);
                    }
                }
                Err(e) => log::error!("Snapshot serialization failed: {}", e),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }

        log::info!("Eras Catch starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_touch_buttons(game.clone());
        request_animation_frame(game);

        log::info!("Eras Catch running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.left = true,
                    "ArrowRight" | "d" | "D" => g.right = true,
                    " " => {
                        event.prevent_default();
                        g.toggle_running();
                    }
                    "r" | "R" => g.reset(),
                    "i" | "I" => {
                        g.autopilot = !g.autopilot;
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "ArrowLeft" | "a" | "A" => g.left = false,
                "ArrowRight" | "d" | "D" => g.right = false,
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// On-screen buttons for touch devices: hold to steer, tap to start/pause
    fn setup_touch_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for (id, dir) in [("touch-left", Direction::Left), ("touch-right", Direction::Right)] {
            let Some(button) = document.get_element_by_id(id) else {
                continue;
            };
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut().touch_dir = dir;
                });
                let _ = button
                    .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().touch_dir = Direction::None;
            });
            let _ =
                button.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(button) = document.get_element_by_id("touch-toggle") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().toggle_running();
            });
            let _ =
                button.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let snap = game.borrow_mut().update();
            present(&snap);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use eras_catch::Settings;
    use eras_catch::sim::{Arcade, Direction, TickInput, autopilot};

    env_logger::init();
    log::info!("Eras Catch (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{} ({}), using defaults", e, path);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut arcade = Arcade::from_settings(&settings);
    let mut snap = arcade.snapshot();

    for n in 1..=settings.demo_ticks {
        let direction = if settings.autopilot {
            autopilot::steer(arcade.state())
        } else {
            Direction::None
        };
        snap = arcade.tick(&TickInput::running(direction));

        if settings.report_every > 0 && n % settings.report_every == 0 {
            log::info!(
                "tick {}: score {} lives {} level {} ({}) meter {:.0}%",
                n,
                snap.score,
                snap.lives,
                snap.level,
                snap.era,
                snap.proposal_meter
            );
        }
        if snap.phase.is_terminal() {
            log::info!("Finished after {} ticks: {:?}", n, snap.phase);
            break;
        }
    }

    match snap.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Snapshot serialization failed: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
