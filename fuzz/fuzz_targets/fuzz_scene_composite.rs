#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pageflip_render::{PackedRgba, Pixmap, Scene, YRotation};

#[derive(Arbitrary, Debug)]
struct FuzzItem {
    width: u8,
    height: u8,
    x: f32,
    y: f32,
    z: i32,
    rotation: Option<(f32, f32)>,
    fill: u32,
}

#[derive(Arbitrary, Debug)]
struct FuzzScene {
    width: u8,
    height: u8,
    items: Vec<FuzzItem>,
}

fuzz_target!(|scene: FuzzScene| {
    // Compositing must stay total: any stack of sizes, positions, depths,
    // and angles (including NaN and infinities) produces a frame of exactly
    // the scene's size without panicking.
    let mut s = Scene::new(u16::from(scene.width), u16::from(scene.height));
    for item in scene.items.iter().take(16) {
        let fill = PackedRgba::rgba(
            (item.fill >> 24) as u8,
            (item.fill >> 16) as u8,
            (item.fill >> 8) as u8,
            item.fill as u8,
        );
        let id = s.add(Pixmap::solid(
            u16::from(item.width),
            u16::from(item.height),
            fill,
        ));
        s.set_pos(id, item.x, item.y);
        s.set_z(id, item.z);
        if let Some((angle, pivot)) = item.rotation {
            s.set_rotation(id, Some(YRotation::new(angle, pivot)));
        }
    }

    let frame = s.composite();
    assert_eq!(frame.width(), u16::from(scene.width));
    assert_eq!(frame.height(), u16::from(scene.height));

    // Reusing a frame of a different size must land on the same result.
    let mut reused = Pixmap::new(1, 1);
    s.composite_into(&mut reused);
    assert_eq!(reused, frame);
});
