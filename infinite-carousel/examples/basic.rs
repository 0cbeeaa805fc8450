// Example: minimal usage with adapter-driven time.
use infinite_carousel::{CarouselOptions, ExtendedSequence, LoopController};

fn main() {
    let items = ["alpha", "beta", "gamma"];
    let mut c = LoopController::new(CarouselOptions::new().with_slide_width(320).with_gap(16));
    println!("initial={:?}", c.initialize_from(&items));

    let seq = ExtendedSequence::new(&items);
    let mut now_ms = 0u64;
    for _ in 0..4 {
        let moving = c.next(now_ms).expect("idle between steps");
        println!("moving: {moving:?}");

        now_ms += 500;
        if let Some(done) = c.tick(now_ms) {
            let visible: Vec<&str> = seq.window(c.window()).map(|it| *it.item).collect();
            println!("done: position={} visible={visible:?}", done.position);
        }
    }
}
