//! Decorative drifting-particle background for the card page.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::ui::theme::PARTICLE;

const SYMBOLS: [&str; 3] = ["·", "∙", "•"];

/// One cell in this many holds a particle.
const DENSITY: u32 = 48;

pub struct Background {
    tick: u64,
}

impl Background {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }

    /// Particle positions for `area` at the current tick.
    fn particles(&self, area: Rect) -> impl Iterator<Item = (u16, u16, &'static str)> + '_ {
        let width = u64::from(area.width.max(1));
        let height = u64::from(area.height.max(1));
        let count = (u32::from(area.width) * u32::from(area.height)) / DENSITY;

        (0..u64::from(count)).map(move |i| {
            let seed = mix(i);
            // Each particle drifts right at its own slow rate.
            let speed = 4 + (seed >> 48) % 8;
            let x = (seed % width + self.tick / speed) % width;
            let y = (seed >> 16) % height;
            let symbol = SYMBOLS[((seed >> 32) % SYMBOLS.len() as u64) as usize];
            (area.x + x as u16, area.y + y as u16, symbol)
        })
    }
}

impl Widget for Background {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for (x, y, symbol) in self.particles(area) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                if cell.symbol() == " " {
                    cell.set_symbol(symbol).set_fg(PARTICLE);
                }
            }
        }
    }
}

fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
