// Example: a 60fps frame loop that drops clicks arriving mid-transition.
use infinite_carousel::{AdvanceError, CarouselOptions, Direction, LoopController};

fn main() {
    let mut c = LoopController::new(CarouselOptions::new().with_on_change(Some(
        |_: &LoopController, f: infinite_carousel::Frame| {
            println!(
                "render: translateX({}px) animated={} position={}",
                f.offset_px, f.animated, f.position
            );
        },
    )));
    c.initialize(4);

    // Simulated clicks: (time, direction).
    let clicks = [
        (0u64, Direction::Backward),
        (100, Direction::Backward),
        (700, Direction::Forward),
        (1300, Direction::Forward),
    ];

    let mut now_ms = 0u64;
    let mut pending = clicks.iter().peekable();
    while now_ms <= 2_000 {
        while let Some((at, direction)) = pending.next_if(|(at, _)| *at <= now_ms) {
            match c.advance(*direction, *at) {
                Ok(_) | Err(AdvanceError::NotReady) => {}
                Err(AdvanceError::Busy) => println!("t={at} click dropped: busy"),
            }
        }
        c.tick(now_ms);
        now_ms += 16;
    }
}
