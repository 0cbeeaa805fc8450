use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

fn controller(len: usize) -> LoopController {
    let mut c = LoopController::new(CarouselOptions::new());
    c.initialize(len);
    c
}

/// Advances once and immediately fires the completion.
fn step(c: &mut LoopController, direction: Direction, now_ms: &mut u64) -> Frame {
    c.advance(direction, *now_ms).unwrap();
    *now_ms += c.options().transition_duration_ms;
    c.tick(*now_ms).unwrap()
}

#[test]
fn initialize_places_position_at_middle_copy() {
    for len in 1..20usize {
        let c = controller(len);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.position(), len);
        assert!(!c.is_transitioning());
        assert_eq!(c.extended_len(), len * 3);
        assert_eq!(c.current_index(), Some(0));
    }
}

#[test]
fn empty_sequence_is_not_ready() {
    let frames = Arc::new(AtomicUsize::new(0));
    let mut c = LoopController::new(CarouselOptions::new().with_on_change(Some({
        let frames = Arc::clone(&frames);
        move |_: &LoopController, _: Frame| {
            frames.fetch_add(1, Ordering::Relaxed);
        }
    })));

    assert_eq!(c.initialize(0), None);
    assert_eq!(c.phase(), Phase::Uninitialized);
    assert_eq!(c.advance(Direction::Forward, 0), Err(AdvanceError::NotReady));
    assert_eq!(c.advance(Direction::Backward, 0), Err(AdvanceError::NotReady));
    assert_eq!(c.tick(10_000), None);
    assert_eq!(c.complete_transition(), None);
    assert_eq!(c.frame(), None);
    assert_eq!(c.set_slide_width(100), None);
    assert_eq!(frames.load(Ordering::Relaxed), 0);
}

#[test]
fn advance_while_busy_is_dropped() {
    let mut c = controller(4);
    let first = c.next(0).unwrap();
    assert_eq!(first.position, 5);
    assert!(first.animated);

    assert_eq!(c.next(10), Err(AdvanceError::Busy));
    assert_eq!(c.prev(20), Err(AdvanceError::Busy));
    assert_eq!(c.position(), 5);
    // The rejected calls must not push the deadline.
    assert_eq!(c.completes_at_ms(), Some(500));

    assert_eq!(c.tick(499), None);
    assert!(c.is_transitioning());
    let done = c.tick(500).unwrap();
    assert!(!done.animated);
    assert_eq!(done.position, 5);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn forward_then_backward_returns_to_same_card() {
    for len in 1..8usize {
        let mut c = controller(len);
        let mut now = 0;
        let before = c.current_index();
        step(&mut c, Direction::Forward, &mut now);
        step(&mut c, Direction::Backward, &mut now);
        assert_eq!(c.current_index(), before, "len={len}");
        assert_eq!(c.position(), len);
    }
}

#[test]
fn forward_overrun_snaps_to_start_of_middle_copy() {
    let len = 5;
    let mut c = controller(len);
    let mut now = 0;
    for i in 1..len {
        let f = step(&mut c, Direction::Forward, &mut now);
        assert_eq!(f.position, len + i);
    }

    // The Nth move lands on 2N before the completion snaps it.
    let moving = c.next(now).unwrap();
    assert_eq!(moving.position, 2 * len);
    assert!(moving.animated);

    let snapped = c.tick(now + 500).unwrap();
    assert_eq!(snapped.position, len);
    assert!(!snapped.animated);
    assert_eq!(snapped.offset_px, c.offset_at(len));
}

#[test]
fn backward_overrun_snaps_to_end_of_middle_copy() {
    let len = 4;
    let mut c = controller(len);

    let moving = c.prev(0).unwrap();
    assert_eq!(moving.position, len - 1);
    assert!(moving.animated);

    let snapped = c.tick(500).unwrap();
    assert_eq!(snapped.position, 2 * len - 1);
    assert!(!snapped.animated);
    assert_eq!(c.current_index(), Some(len - 1));

    let mut now = 500;
    for i in 1..len {
        let f = step(&mut c, Direction::Backward, &mut now);
        assert_eq!(f.position, 2 * len - 1 - i);
    }
    assert_eq!(c.position(), len);
}

#[test]
fn single_item_loops_in_both_directions() {
    let mut c = controller(1);
    let mut now = 0;
    for _ in 0..3 {
        assert_eq!(step(&mut c, Direction::Forward, &mut now).position, 1);
        assert_eq!(step(&mut c, Direction::Backward, &mut now).position, 1);
    }
}

#[test]
fn offset_is_negative_position_times_stride() {
    let mut c = LoopController::new(CarouselOptions::new().with_slide_width(200).with_gap(24));
    c.initialize(7);
    for p in [0usize, 1, 7, 13, 20] {
        assert_eq!(c.offset_at(p), -((p as i64) * 224));
    }
    assert_eq!(c.offset_px(), -(7 * 224));
}

#[test]
fn end_to_end_three_items() {
    let mut c = LoopController::new(CarouselOptions::new().with_slide_width(320).with_gap(16));
    let init = c.initialize(3).unwrap();
    assert_eq!(init.position, 3);
    assert_eq!(init.offset_px, -1008);
    assert_eq!(init.extended_len, 9);
    assert!(!init.animated);
    assert_eq!(init.transition_duration_ms, 500);

    let f = c.next(0).unwrap();
    assert_eq!(f.position, 4);
    assert_eq!(f.offset_px, -1344);
    assert!(f.animated);

    let f = c.tick(500).unwrap();
    assert!(!c.is_transitioning());
    assert_eq!(f.position, 4);

    let mut now = 500;
    let mut positions = Vec::new();
    for _ in 0..5 {
        positions.push(step(&mut c, Direction::Forward, &mut now).position);
    }
    // 5 -> 6 (snaps to 3) -> 4 -> 5 -> 6 (snaps to 3)
    assert_eq!(positions, [5, 3, 4, 5, 3]);
}

#[test]
fn reinitialize_cancels_pending_completion() {
    let mut c = controller(6);
    c.next(0).unwrap();
    assert!(c.is_transitioning());

    let f = c.initialize(2).unwrap();
    assert_eq!(f.position, 2);
    assert!(!f.animated);
    assert_eq!(c.completes_at_ms(), None);
    // The stale deadline must not fire.
    assert_eq!(c.tick(10_000), None);
    assert_eq!(c.position(), 2);
    assert!(c.next(10_000).is_ok());
}

#[test]
fn reset_drops_sequence_and_timer() {
    let mut c = controller(3);
    c.prev(0).unwrap();
    c.reset();
    assert_eq!(c.phase(), Phase::Uninitialized);
    assert_eq!(c.tick(500), None);
    assert_eq!(c.frame(), None);
    assert_eq!(c.next(600), Err(AdvanceError::NotReady));
}

#[test]
fn resize_mid_transition_keeps_transition() {
    let mut c = controller(3);
    c.next(0).unwrap();

    let f = c.set_slide_width(400).unwrap();
    assert!(c.is_transitioning());
    assert!(f.animated);
    assert_eq!(f.offset_px, -(4 * (400 + 16)));
    assert_eq!(c.completes_at_ms(), Some(500));

    let f = c.tick(500).unwrap();
    assert_eq!(f.offset_px, -(4 * 416));
}

#[test]
fn on_change_receives_every_frame() {
    let seen = Arc::new(Mutex::new(Vec::<Frame>::new()));
    let mut c = LoopController::new(CarouselOptions::new().with_on_change(Some({
        let seen = Arc::clone(&seen);
        move |_: &LoopController, f: Frame| seen.lock().unwrap().push(f)
    })));

    c.initialize(2);
    c.next(0).unwrap();
    let _ = c.next(1);
    c.tick(500);
    c.next(600).unwrap();
    c.tick(1100);

    let seen = seen.lock().unwrap();
    let positions: Vec<(usize, bool)> = seen.iter().map(|f| (f.position, f.animated)).collect();
    assert_eq!(
        positions,
        [(2, false), (3, true), (3, false), (4, true), (2, false)]
    );
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = LoopController::new(CarouselOptions::new().with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &LoopController, _: Frame| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })));
    c.initialize(3);
    calls.store(0, Ordering::Relaxed);

    c.next(0).unwrap();
    c.batch_update(|c| {
        c.set_slide_width(100);
        c.set_gap(8);
        c.tick(500);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn window_and_card_keys_follow_position() {
    let mut c = LoopController::new(CarouselOptions::new_with_key(|i| 100 + i as u32));
    c.initialize(3);

    let w = c.window();
    assert_eq!((w.start_index, w.end_index), (3, 6));
    assert_eq!(w.len(), 3);
    assert!(w.contains(5) && !w.contains(6));

    let key = c.card_key(7).unwrap();
    assert_eq!(key.key, 101);
    assert_eq!(key.index, 7);
    assert_eq!(alloc::format!("{key}"), "101-7");
    assert_eq!(c.card_key(9), None);
}

#[test]
fn extended_sequence_repeats_items_three_times() {
    let items = ['a', 'b', 'c'];
    let seq = ExtendedSequence::new(&items);
    assert_eq!(seq.len(), 9);

    let flat: Vec<char> = seq.iter().map(|it| *it.item).collect();
    assert_eq!(flat, ['a', 'b', 'c', 'a', 'b', 'c', 'a', 'b', 'c']);

    let copies: Vec<usize> = seq.iter().map(|it| it.copy).collect();
    assert_eq!(copies, [0, 0, 0, 1, 1, 1, 2, 2, 2]);

    let mut c = controller(items.len());
    c.next(0).unwrap();
    let visible: Vec<char> = seq.window(c.window()).map(|it| *it.item).collect();
    assert_eq!(visible, ['b', 'c', 'a']);

    assert_eq!(seq.get(9), None);
    assert_eq!(seq.iter().rev().next().map(|it| it.index), Some(8));
    assert!(ExtendedSequence::<char>::new(&[]).iter().next().is_none());
}

#[test]
fn random_walk_stays_within_bounds() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..64 {
        let len = rng.gen_range_usize(1, 12);
        let mut c = controller(len);
        let mut now = 0u64;
        let mut expected = 0usize;

        for _ in 0..200 {
            let direction = if rng.gen_bool() {
                Direction::Forward
            } else {
                Direction::Backward
            };
            let moving = c.advance(direction, now).unwrap();
            assert!(moving.position + 1 >= len && moving.position <= 2 * len);

            // Interleave a few rejected requests.
            if rng.gen_bool() {
                assert_eq!(c.advance(direction.reverse(), now + 1), Err(AdvanceError::Busy));
            }

            now += rng.gen_range_usize(500, 900) as u64;
            let done = c.tick(now).unwrap();
            assert!((len..2 * len).contains(&done.position));

            expected = match direction {
                Direction::Forward => (expected + 1) % len,
                Direction::Backward => (expected + len - 1) % len,
            };
            assert_eq!(c.current_index(), Some(expected));
        }
    }
}
