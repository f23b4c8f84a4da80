#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pageflip::{FlipDirection, FlipEffect, NullObserver, PackedRgba, PanelSource, Pixmap};

#[derive(Arbitrary, Debug)]
struct FuzzFlip {
    out_width: u8,
    out_height: u8,
    in_width: u8,
    in_height: u8,
    duration_ms: u16,
    left_to_right: bool,
    dispose: bool,
    ticks: Vec<u16>,
}

struct Flat {
    pixmap: Pixmap,
}

impl PanelSource for Flat {
    fn is_visible(&self) -> bool {
        true
    }

    fn snapshot(&self) -> Pixmap {
        self.pixmap.clone()
    }
}

fuzz_target!(|flip: FuzzFlip| {
    // The whole lifecycle must stay total: any panel sizes, duration, and
    // tick pattern run to completion without panicking.
    let out = Flat {
        pixmap: Pixmap::solid(
            u16::from(flip.out_width),
            u16::from(flip.out_height),
            PackedRgba::rgb(200, 0, 0),
        ),
    };
    let inc = Flat {
        pixmap: Pixmap::solid(
            u16::from(flip.in_width),
            u16::from(flip.in_height),
            PackedRgba::rgb(0, 0, 200),
        ),
    };

    let mut effect = FlipEffect::new();
    effect.set_duration(Duration::from_millis(u64::from(flip.duration_ms)));
    let direction = if flip.left_to_right {
        FlipDirection::LeftToRight
    } else {
        FlipDirection::RightToLeft
    };

    let mut observer = NullObserver;
    let mut session = effect
        .flip(&mut observer, Some(&out), Some(&inc), direction, flip.dispose)
        .expect("distinct visible panels are always accepted");

    for &ms in flip.ticks.iter().take(64) {
        session.tick(Duration::from_millis(u64::from(ms)), &mut observer);
        let _ = session.render();
    }
    while !session.is_finished() {
        session.tick(Duration::from_millis(250), &mut observer);
    }
    assert!(session.render().is_none());
});
