//! Walks one full flip between two synthetic pages, printing each frame as
//! coarse ASCII art so the fold is visible in a terminal.
//!
//! ```text
//! cargo run -p pageflip --example flip_demo
//! ```

use std::time::Duration;

use pageflip::prelude::*;

struct Page {
    pixmap: Pixmap,
}

impl Page {
    /// A paper-colored page with horizontal rules in the given ink.
    fn ruled(width: u16, height: u16, ink: PackedRgba) -> Self {
        let pixmap = Pixmap::from_fn(width, height, |x, y| {
            if x >= 2 && x < width - 2 && y % 4 == 2 {
                ink
            } else {
                PackedRgba::rgb(245, 240, 228)
            }
        });
        Self { pixmap }
    }
}

impl PanelSource for Page {
    fn is_visible(&self) -> bool {
        true
    }

    fn snapshot(&self) -> Pixmap {
        self.pixmap.clone()
    }
}

struct Console;

impl FlipObserver for Console {
    fn about_to_start(&mut self, surface: &Scene) {
        println!(
            "flip starting on a {}x{} surface",
            surface.width(),
            surface.height()
        );
    }

    fn finished(&mut self, _surface: &Scene) {
        println!("flip finished");
    }

    fn dispose_outgoing(&mut self) {
        println!("outgoing page disposed");
    }

    fn error(&mut self) {
        println!("flip rejected");
    }
}

fn glyph(px: PackedRgba) -> char {
    let (r, b) = (px.r() as u16, px.b() as u16);
    if px.is_transparent() {
        ' '
    } else if r > b + 50 {
        '#'
    } else if b > r + 50 {
        '='
    } else {
        '.'
    }
}

/// Sample the ruled rows only, two columns per character cell.
fn print_frame(frame: &Pixmap) {
    for y in (2..frame.height()).step_by(4) {
        let mut line = String::new();
        for x in (0..frame.width()).step_by(2) {
            line.push(glyph(frame.get(x, y).unwrap_or(PackedRgba::TRANSPARENT)));
        }
        println!("  {line}");
    }
    println!();
}

fn main() -> pageflip::Result<()> {
    let old_page = Page::ruled(64, 16, PackedRgba::rgb(40, 40, 200));
    let new_page = Page::ruled(64, 16, PackedRgba::rgb(200, 40, 40));

    let effect = FlipEffect::new();
    let mut console = Console;
    let mut session = effect.flip(
        &mut console,
        Some(&old_page),
        Some(&new_page),
        FlipDirection::RightToLeft,
        true,
    )?;

    let mut frame = Pixmap::new(0, 0);
    if session.render_into(&mut frame) {
        println!("initial frame, old page intact");
        print_frame(&frame);
    }

    // Ten coarse steps across the default 700 ms.
    let step = Duration::from_millis(70);
    let mut n = 0;
    loop {
        let done = session.tick(step, &mut console);
        if session.render_into(&mut frame) {
            n += 1;
            println!(
                "tick {n:2}  fold {:6.1}  unfold {:6.1}",
                session.outgoing_angle(),
                session.incoming_angle()
            );
            print_frame(&frame);
        }
        if done {
            break;
        }
    }
    Ok(())
}
