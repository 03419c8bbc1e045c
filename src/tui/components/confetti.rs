//! # Confetti Overlay
//!
//! Short celebration burst over the result card when a verdict comes back
//! positive. Particles fall for 1.4 seconds and rotate through box-drawing
//! glyphs; the field renders directly into the frame buffer so it overlays
//! whatever the card already drew.
//!
//! Not a regular component: rendering needs the raw `Buffer` and the
//! current instant, and the burst origin depends on the card area measured
//! during the previous draw.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

const PARTICLE_COUNT: usize = 18;
const PARTICLE_TTL: Duration = Duration::from_millis(1400);
const PALETTE: [Color; 4] = [
    Color::Rgb(0x10, 0xb9, 0x81),
    Color::Rgb(0x60, 0xa5, 0xfa),
    Color::Rgb(0x7c, 0x3a, 0xed),
    Color::Rgb(0xfa, 0xcc, 0x15),
];
const GLYPHS: [char; 4] = ['│', '╱', '─', '╲'];

struct Particle {
    /// Column at burst time, in cells.
    x: f32,
    /// Horizontal drift in cells per second.
    vx: f32,
    /// Glyph rotation speed.
    spin: f32,
    color: Color,
    born: Instant,
}

/// All live confetti particles.
pub struct ConfettiField {
    particles: Vec<Particle>,
}

impl Default for ConfettiField {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Spawn a burst across the given width.
    pub fn burst(&mut self, width: u16) {
        self.burst_with(width, &mut rand::thread_rng(), Instant::now());
    }

    /// Burst with an explicit RNG and timestamp.
    pub fn burst_with<R: Rng>(&mut self, width: u16, rng: &mut R, now: Instant) {
        if width == 0 {
            return;
        }
        for _ in 0..PARTICLE_COUNT {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..width as f32),
                vx: rng.gen_range(-2.0..2.0),
                spin: rng.gen_range(2.0..6.0),
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                born: now,
            });
        }
    }

    /// Drop particles older than their lifetime.
    pub fn sweep(&mut self, now: Instant) {
        self.particles
            .retain(|p| now.duration_since(p.born) < PARTICLE_TTL);
    }

    /// Whether anything is still falling (drives the redraw cadence).
    pub fn is_live(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Overlay live particles onto the buffer within `area`.
    ///
    /// Each particle falls from the top edge to the bottom over its
    /// lifetime, drifting horizontally and cycling its glyph. Particles
    /// outside the area are skipped, not clipped to its edge.
    pub fn render(&self, buf: &mut Buffer, area: Rect, now: Instant) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for particle in &self.particles {
            let age = now.duration_since(particle.born);
            if age >= PARTICLE_TTL {
                continue;
            }
            let age_secs = age.as_secs_f32();
            let progress = age_secs / PARTICLE_TTL.as_secs_f32();

            let x = particle.x + particle.vx * age_secs;
            if x < 0.0 {
                continue;
            }
            let col = x as u16;
            let row = (progress * area.height as f32) as u16;
            if col >= area.width || row >= area.height {
                continue;
            }

            let glyph = GLYPHS[(age_secs * particle.spin) as usize % GLYPHS.len()];
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(glyph);
                cell.set_fg(particle.color);
            }
        }
    }
}
