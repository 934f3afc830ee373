//! Catchball entry point
//!
//! Wires DOM events into the sim on wasm; native builds run a logged smoke
//! pass over the same logic.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, MouseEvent};

    use catchball::effects::{DomConfetti, EffectsRenderer};
    use catchball::sim::{GameState, PlayArea, capture, pointer_move};

    /// Page instance holding game state and the effects renderer
    struct Page {
        state: GameState,
        effects: DomConfetti,
    }

    impl Page {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                effects: DomConfetti,
            }
        }
    }

    thread_local! {
        /// Listener registrations live here for the page lifetime; replacing
        /// or clearing the slot detaches them (see `InputBindings::drop`).
        static BINDINGS: RefCell<Option<InputBindings>> = const { RefCell::new(None) };
    }

    /// Read the play area dimensions and origin from the live layout.
    /// Returns the rect origin alongside so pointer events can be converted
    /// to area-local coordinates.
    fn measure(area: &Element) -> (PlayArea, f32, f32) {
        let rect = area.get_bounding_client_rect();
        (
            PlayArea::new(rect.width() as f32, rect.height() as f32),
            rect.left() as f32,
            rect.top() as f32,
        )
    }

    /// Push the ball position to its DOM element
    fn render_ball(state: &GameState) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("ball") {
            let pos = state.ball_pos();
            let _ = el.set_attribute("style", &format!("left:{:.1}px;top:{:.1}px", pos.x, pos.y));
        }
    }

    /// Push score and level to the HUD
    fn render_hud(state: &GameState) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("hud-score") {
            el.set_text_content(Some(&state.score().to_string()));
        }
        if let Some(el) = document.get_element_by_id("hud-level") {
            el.set_text_content(Some(&state.level().to_string()));
        }
    }

    /// Swap the theme class on the document body
    fn render_theme(state: &GameState) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = document.body() {
            let classes = body.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(state.theme().css_class());
        }
    }

    fn render_all(state: &GameState) {
        render_ball(state);
        render_hud(state);
        render_theme(state);
    }

    /// Event listeners scoped to the page surface.
    ///
    /// Dropping this value removes every listener from its element, so
    /// deregistration happens on any release path.
    struct InputBindings {
        area: Element,
        ball: Element,
        toggle: Element,
        on_pointer: Closure<dyn FnMut(MouseEvent)>,
        on_capture: Closure<dyn FnMut(MouseEvent)>,
        on_toggle: Closure<dyn FnMut(MouseEvent)>,
    }

    impl InputBindings {
        fn attach(
            area: Element,
            ball: Element,
            toggle: Element,
            page: Rc<RefCell<Page>>,
        ) -> Result<Self, JsValue> {
            // Pointer move: feed one sample to the avoidance engine
            let on_pointer = {
                let page = page.clone();
                let area = area.clone();
                Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    let (play_area, left, top) = measure(&area);
                    let pointer = Vec2::new(
                        event.client_x() as f32 - left,
                        event.client_y() as f32 - top,
                    );
                    let mut p = page.borrow_mut();
                    let ball = p.state.ball_pos();
                    let level = p.state.level();
                    if let Some(new_pos) = pointer_move(pointer, ball, level, &play_area) {
                        p.state.set_ball_pos(new_pos);
                        render_ball(&p.state);
                    }
                })
            };
            area.add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())?;

            // Ball click: capture, confetti, relocate
            let on_capture = {
                let page = page.clone();
                let area = area.clone();
                Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    event.stop_propagation();
                    let (play_area, _, _) = measure(&area);
                    let mut p = page.borrow_mut();
                    match capture(&mut p.state, &play_area) {
                        Some(outcome) => {
                            p.effects.burst(&outcome.burst);
                            if outcome.leveled_up {
                                log::info!(
                                    "Capture! score {} - level up to {}",
                                    outcome.score,
                                    outcome.level
                                );
                            } else {
                                log::info!("Capture! score {}", outcome.score);
                            }
                            render_ball(&p.state);
                            render_hud(&p.state);
                        }
                        None => log::warn!("Capture ignored: play area not measured yet"),
                    }
                })
            };
            ball.add_event_listener_with_callback("click", on_capture.as_ref().unchecked_ref())?;

            // Theme switch
            let on_toggle = {
                let page = page.clone();
                Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut p = page.borrow_mut();
                    p.state.toggle_theme();
                    render_theme(&p.state);
                })
            };
            toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;

            Ok(Self {
                area,
                ball,
                toggle,
                on_pointer,
                on_capture,
                on_toggle,
            })
        }
    }

    impl Drop for InputBindings {
        fn drop(&mut self) {
            let _ = self
                .area
                .remove_event_listener_with_callback("mousemove", self.on_pointer.as_ref().unchecked_ref());
            let _ = self
                .ball
                .remove_event_listener_with_callback("click", self.on_capture.as_ref().unchecked_ref());
            let _ = self
                .toggle
                .remove_event_listener_with_callback("click", self.on_toggle.as_ref().unchecked_ref());
        }
    }

    /// Detach all event listeners (host teardown hook)
    pub fn release_surface() {
        BINDINGS.with(|b| b.borrow_mut().take());
        log::info!("Input listeners released");
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Catchball starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let (Some(area), Some(ball), Some(toggle)) = (
            document.get_element_by_id("play-area"),
            document.get_element_by_id("ball"),
            document.get_element_by_id("theme-toggle"),
        ) else {
            log::error!("Page markup is missing the game elements; notice stays static");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let page = Rc::new(RefCell::new(Page::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        render_all(&page.borrow().state);

        match InputBindings::attach(area, ball, toggle, page) {
            Ok(bindings) => BINDINGS.with(|b| *b.borrow_mut() = Some(bindings)),
            Err(e) => {
                log::error!("Failed to attach input listeners: {:?}", e);
                return;
            }
        }

        log::info!("Catchball running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

/// Host teardown hook: detaches every registered event listener
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn shutdown() {
    wasm_page::release_surface();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Catchball (native) starting...");
    log::info!("Native mode has no page - run with `trunk serve` for the web version");

    println!("\nRunning avoidance smoke run...");
    smoke_run();
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use catchball::effects::{EffectsRenderer, NullEffects};
    use catchball::sim::{GameState, PlayArea, capture, pointer_move};
    use glam::Vec2;

    let area = PlayArea::new(400.0, 400.0);
    let mut state = GameState::new(42);
    let effects = NullEffects;

    // Walk the pointer toward the ball until the avoidance radius trips
    let mut pointer = Vec2::new(320.0, 210.0);
    let mut fled = false;
    for _ in 0..40 {
        if let Some(new_pos) = pointer_move(pointer, state.ball_pos(), state.level(), &area) {
            state.set_ball_pos(new_pos);
            fled = true;
            break;
        }
        pointer.x -= 5.0;
    }
    assert!(fled, "pointer sweep should trigger a flee");
    println!("✓ Ball fled to {:?}", state.ball_pos());

    for _ in 0..5 {
        let outcome = capture(&mut state, &area).expect("valid area");
        effects.burst(&outcome.burst);
    }
    assert_eq!(state.score(), 5);
    assert_eq!(state.level(), 2);
    println!("✓ Five captures: score 5, level 2");

    let json = serde_json::to_string_pretty(&state).expect("state serializes");
    println!("\nFinal state:\n{json}");
}
