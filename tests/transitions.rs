use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use rand::Rng;

use concentric_onboarding::concentric::{EngineState, Mounted, ShapeInterpolator};
use concentric_onboarding::constants::TICK_INTERVAL;
use concentric_onboarding::{
    Direction, EngineConfig, Navigation, Rgba, TransitionEngine, TransitionEvent,
};

type Events = Rc<RefCell<Vec<TransitionEvent>>>;

fn palette(n: usize) -> Vec<Rgba> {
    (0..n).map(|i| Rgba::rgb(i as u8, 255 - i as u8, 0)).collect()
}

fn engine(pages: usize, colors: usize) -> (TransitionEngine<usize>, Events) {
    let mut engine = TransitionEngine::new((0..pages).collect(), palette(colors));
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    engine.add_listener(move |event: TransitionEvent| sink.borrow_mut().push(event));
    (engine, events)
}

/// Ticks until the running transition commits; returns the tick count.
fn run_to_completion(view: &mut Mounted<'_, usize>) -> u32 {
    let mut ticks = 0;
    let mut last_progress = 0.0;
    while view.is_animating() {
        let frame = view.advance(TICK_INTERVAL);
        ticks += 1;
        if frame.is_animating {
            assert!(frame.progress >= last_progress, "progress went backwards");
            assert!(frame.progress <= 30.0, "progress exceeded the full cycle");
            last_progress = frame.progress;
        }
        assert!(ticks < 1_000, "transition never finished");
    }
    ticks
}

#[test]
fn forward_cycle_advances_one_page() {
    let (mut engine, events) = engine(3, 3);
    let mut view = engine.mount();

    assert_eq!(view.go_to_next_page(true), Navigation::Started(Direction::Forward));
    assert_eq!(view.engine_state(), EngineState::AnimatingForward);
    assert_eq!(*events.borrow(), vec![TransitionEvent::AnimationWillBegin]);

    let ticks = run_to_completion(&mut view);
    assert_eq!(ticks, 50);
    assert_eq!(view.current_page_index(), 1);
    assert_eq!(view.next_page_index(), 2);
    assert_eq!(view.progress(), 0.0);
    assert_eq!(view.engine_state(), EngineState::Idle);
    assert_eq!(
        *events.borrow(),
        vec![TransitionEvent::AnimationWillBegin, TransitionEvent::AnimationDidEnd]
    );
}

#[test]
fn forward_then_backward_round_trips() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let count = rng.random_range(2..10);
        let steps = rng.random_range(0..count);
        let (mut engine, _) = engine(count, count);
        let mut view = engine.mount();
        for _ in 0..steps {
            view.go_to_next_page(false);
        }
        let start = view.current_page_index();

        view.go_to_next_page(true);
        run_to_completion(&mut view);
        assert_eq!(view.current_page_index(), (start + 1) % count);

        view.go_to_previous_page(true);
        run_to_completion(&mut view);
        assert_eq!(view.current_page_index(), start);

        view.go_to_previous_page(true);
        run_to_completion(&mut view);
        view.go_to_next_page(true);
        run_to_completion(&mut view);
        assert_eq!(view.current_page_index(), start);
    }
}

#[test]
fn backward_from_the_first_page_wraps() {
    let (mut engine, events) = engine(4, 4);
    let mut view = engine.mount();
    assert_eq!(view.go_to_previous_page(true), Navigation::Started(Direction::Backward));
    assert_eq!(view.next_page_index(), 3);
    run_to_completion(&mut view);
    assert_eq!(view.current_page_index(), 3);
    assert_eq!(view.next_page_index(), 2);
    // Reaching the last page backwards does not count.
    assert!(!events.borrow().contains(&TransitionEvent::DidGoToLastPage));
}

#[test]
fn wrapping_past_the_last_page_notifies_once() {
    let (mut engine, events) = engine(3, 3);
    let mut view = engine.mount();
    view.go_to_next_page(false);
    view.go_to_next_page(false);
    assert_eq!(view.current_page_index(), 2);
    assert!(events.borrow().is_empty());

    view.go_to_next_page(true);
    run_to_completion(&mut view);
    assert_eq!(view.current_page_index(), 0);
    assert_eq!(
        *events.borrow(),
        vec![
            TransitionEvent::AnimationWillBegin,
            TransitionEvent::AnimationDidEnd,
            TransitionEvent::DidGoToLastPage,
        ]
    );
}

#[test]
fn landing_on_the_last_page_notifies_once() {
    let (mut engine, events) = engine(3, 3);
    let mut view = engine.mount();
    view.go_to_next_page(false);

    view.go_to_next_page(true);
    run_to_completion(&mut view);
    assert_eq!(view.current_page_index(), 2);
    let count = events
        .borrow()
        .iter()
        .filter(|e| **e == TransitionEvent::DidGoToLastPage)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn unanimated_jump_is_silent() {
    let (mut engine, events) = engine(3, 3);
    let mut view = engine.mount();
    assert_eq!(view.go_to_next_page(false), Navigation::Jumped { index: 1 });
    assert_eq!(view.current_page_index(), 1);
    assert_eq!(view.next_page_index(), 2);
    assert!(!view.is_animating());
    for _ in 0..60 {
        assert!(!view.advance(TICK_INTERVAL).is_animating);
    }
    assert!(events.borrow().is_empty());
}

#[test]
fn single_page_or_color_never_animates() {
    for (pages, colors) in [(1, 1), (1, 3), (3, 1), (0, 0)] {
        let (mut engine, events) = engine(pages, colors);
        let mut view = engine.mount();
        assert_eq!(view.go_to_next_page(true), Navigation::Disabled);
        assert_eq!(view.go_to_previous_page(true), Navigation::Disabled);
        for _ in 0..60 {
            assert!(!view.advance(TICK_INTERVAL).is_animating);
        }
        assert!(!view.is_animating());
        assert!(events.borrow().is_empty());
    }
}

#[test]
fn mismatched_counts_still_animate() {
    let (mut engine, events) = engine(3, 2);
    let mut view = engine.mount();
    view.go_to_next_page(true);
    run_to_completion(&mut view);
    view.go_to_next_page(true);
    run_to_completion(&mut view);
    assert_eq!(view.current_page_index(), 2);
    assert_eq!(events.borrow().len(), 5);
}

#[test]
fn longer_duration_takes_more_ticks() {
    let mut engine = TransitionEngine::with_duration(vec![0, 1], palette(2), 2.0);
    let mut view = engine.mount();
    view.go_to_next_page(true);
    assert_eq!(run_to_completion(&mut view), 100);
}

#[test]
fn channel_listener_receives_events() {
    let mut engine = TransitionEngine::new(vec!['a', 'b'], palette(2));
    let (tx, rx) = mpsc::channel::<TransitionEvent>();
    engine.add_listener(tx);
    {
        let mut view = engine.mount();
        view.go_to_next_page(true);
        for _ in 0..50 {
            view.advance(TICK_INTERVAL);
        }
    }
    let received: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        received,
        vec![
            TransitionEvent::AnimationWillBegin,
            TransitionEvent::AnimationDidEnd,
            TransitionEvent::DidGoToLastPage,
        ]
    );
}

#[test]
fn frames_follow_the_shape_interpolator() {
    let (mut engine, _) = engine(2, 2);
    let shapes = ShapeInterpolator::new(&EngineConfig::default());
    let mut view = engine.mount();
    view.go_to_previous_page(true);
    for _ in 0..49 {
        let frame = view.advance(TICK_INTERVAL);
        let expected = shapes.at(frame.progress, Direction::Backward);
        assert_eq!(frame.shape.radius(), expected.radius());
        assert_eq!(frame.shape.is_disc(), expected.is_disc());
    }
}
