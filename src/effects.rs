//! Fire-and-forget celebration effects
//!
//! The sim hands the shell a [`ConfettiBurst`]; whoever renders it must
//! never feed anything back into game state. On wasm the burst is a pile of
//! absolutely-positioned divs animated by CSS and swept up on a timer.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Confetti burst parameters, fixed for every capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Horizontal scatter of launch positions, in percent of the viewport
    pub spread: f32,
    /// Launch origin as a fraction of viewport height (0 = top)
    pub origin_y: f32,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: CONFETTI_PARTICLES,
            spread: CONFETTI_SPREAD,
            origin_y: CONFETTI_ORIGIN_Y,
        }
    }
}

/// Renderer seam for celebration effects
pub trait EffectsRenderer {
    /// Play one burst. No return value, no timing contract.
    fn burst(&self, cfg: &ConfettiBurst);
}

/// No-op renderer for native runs and tests
#[derive(Debug, Default)]
pub struct NullEffects;

impl EffectsRenderer for NullEffects {
    fn burst(&self, _cfg: &ConfettiBurst) {}
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomConfetti;

#[cfg(target_arch = "wasm32")]
mod dom {
    use rand::Rng;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{ConfettiBurst, EffectsRenderer};

    /// Sweep-up delay after a burst (ms)
    const CLEANUP_MS: i32 = 3000;

    const COLORS: [&str; 6] = [
        "#ec4899", "#f59e0b", "#22c55e", "#3b82f6", "#a855f7", "#06b6d4",
    ];

    /// DOM confetti renderer: spawns particle divs into `#confetti-layer`
    #[derive(Debug, Default)]
    pub struct DomConfetti;

    impl EffectsRenderer for DomConfetti {
        fn burst(&self, cfg: &ConfettiBurst) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(layer) = document.get_element_by_id("confetti-layer") else {
                // Page without the layer: silently skip, never fail the click
                return;
            };

            let mut rng = rand::rng();
            let top = cfg.origin_y * 100.0;

            for _ in 0..cfg.particle_count {
                let Ok(el) = document.create_element("div") else {
                    continue;
                };
                el.set_class_name("confetti-particle");
                let left = 50.0 + rng.random_range(-cfg.spread / 2.0..=cfg.spread / 2.0);
                let size = 4.0 + rng.random_range(0.0..4.0);
                let delay = rng.random_range(0.0..0.3);
                let duration = 1.2 + rng.random_range(0.0..1.0);
                let color = COLORS[rng.random_range(0..COLORS.len())];
                let _ = el.set_attribute(
                    "style",
                    &format!(
                        "left:{left:.1}%;top:{top:.0}%;width:{size:.0}px;height:{size:.0}px;\
                         background:{color};animation-duration:{duration:.2}s;\
                         animation-delay:{delay:.2}s"
                    ),
                );
                let _ = layer.append_child(&el);
            }

            let cleanup = Closure::once(move || {
                layer.set_inner_html("");
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cleanup.as_ref().unchecked_ref(),
                CLEANUP_MS,
            );
            cleanup.forget();
        }
    }
}
