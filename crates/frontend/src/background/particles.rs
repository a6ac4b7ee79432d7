//! Decorative particle field rendered on a 2D canvas.
//!
//! The per-frame stepping is plain arithmetic over a particle vector; only
//! the draw loop touches the canvas. No other component depends on this.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Frame period of the draw loop (~30 fps is plenty for a backdrop).
const FRAME_MS: u32 = 33;

const PARTICLE_COUNT: usize = 150;
const PARTICLE_COUNT_SMALL: usize = 80;

/// Viewport width below which the reduced particle count is used.
const SMALL_VIEWPORT_PX: f64 = 768.0;

const PARTICLE_COLOR: &str = "#8b5cf6";

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Advance one frame, wrapping at the field edges.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.x += width;
        } else if self.x > width {
            self.x -= width;
        }
        if self.y < 0.0 {
            self.y += height;
        } else if self.y > height {
            self.y -= height;
        }
    }
}

/// Build a field of `count` particles from a `[0, 1)` random source.
pub fn seed_field(
    count: usize,
    width: f64,
    height: f64,
    mut rand: impl FnMut() -> f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.5,
            vy: (rand() - 0.5) * 0.5,
            radius: 0.5 + rand() * 2.0,
            alpha: 0.2 + rand() * 0.6,
        })
        .collect()
}

fn particle_count(width: f64) -> usize {
    if width < SMALL_VIEWPORT_PX {
        PARTICLE_COUNT_SMALL
    } else {
        PARTICLE_COUNT
    }
}

/// Full-bleed canvas backdrop. The draw loop runs until the component is
/// torn down; the `running` flag is the cancellation handle.
#[component]
#[allow(non_snake_case)]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let running = StoredValue::new(true);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let width = canvas.client_width() as f64;
        let height = canvas.client_height() as f64;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        else {
            log::error!("2d canvas context unavailable, skipping particle background");
            return;
        };

        let viewport = window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(width);
        let mut particles = seed_field(
            particle_count(viewport),
            width,
            height,
            js_sys::Math::random,
        );

        ctx.set_fill_style_str(PARTICLE_COLOR);

        wasm_bindgen_futures::spawn_local(async move {
            loop {
                if !running.try_get_value().unwrap_or(false) {
                    break;
                }
                ctx.clear_rect(0.0, 0.0, width, height);
                for p in &mut particles {
                    p.step(width, height);
                    ctx.set_global_alpha(p.alpha);
                    ctx.begin_path();
                    let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
                    ctx.fill();
                }
                ctx.set_global_alpha(1.0);
                gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    on_cleanup(move || {
        running.try_update_value(|flag| *flag = false);
    });

    view! {
        <canvas
            node_ref=canvas_ref
            style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;"
        ></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap()
    }

    #[test]
    fn seeded_particles_land_inside_the_field() {
        let field = seed_field(40, 800.0, 600.0, sequence(vec![0.0, 0.25, 0.5, 0.75, 0.99]));
        assert_eq!(field.len(), 40);
        for p in &field {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.radius >= 0.5);
            assert!((0.2..=0.8).contains(&p.alpha));
        }
    }

    #[test]
    fn step_wraps_at_edges() {
        let mut p = Particle {
            x: 799.9,
            y: 0.1,
            vx: 0.3,
            vy: -0.3,
            radius: 1.0,
            alpha: 0.5,
        };
        p.step(800.0, 600.0);
        assert!((0.0..800.0).contains(&p.x));
        assert!((0.0..=600.0).contains(&p.y));
    }

    #[test]
    fn step_moves_by_velocity_inside_the_field() {
        let mut p = Particle {
            x: 100.0,
            y: 100.0,
            vx: 0.5,
            vy: -0.25,
            radius: 1.0,
            alpha: 0.5,
        };
        p.step(800.0, 600.0);
        assert_eq!(p.x, 100.5);
        assert_eq!(p.y, 99.75);
    }
}
