use std::ops::{Deref, DerefMut};

use crate::colors::Rgba;
use crate::concentric::clock::ProgressClock;
use crate::concentric::compositor::{PageCompositor, PagePlacement};
use crate::concentric::events::{TransitionEvent, TransitionListener};
use crate::concentric::shape::{PeepholeShape, ShapeInterpolator};
use crate::concentric::state::*;
use crate::config::{diagnose, EngineConfig};

/// Result of a navigation request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    /// An animated transition began.
    Started(Direction),
    /// The current page changed immediately, without animation.
    Jumped { index: usize },
    /// Rejected: a transition is already running.
    IgnoredAnimating,
    /// Rejected: fewer than two pages or two colors.
    Disabled,
    /// Rejected: the engine is not mounted, so no tick would ever arrive.
    NotMounted,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame {
    pub background: Rgba,
    /// Peephole geometry, relative to the button anchor.
    pub shape: PeepholeShape,
    pub shape_color: Rgba,
    pub outgoing: Option<PagePlacement>,
    pub incoming: Option<PagePlacement>,
    pub current_index: usize,
    pub progress: f32,
    pub is_animating: bool,
    pub direction: Direction,
}

/// Concentric page transition engine.
///
/// Owns the transition state; the progress clock is the only thing that moves
/// an animation forward. Pages are opaque to the engine and only addressed by
/// index in the frames it produces.
pub struct TransitionEngine<P> {
    pages: Vec<P>,
    colors: Vec<Rgba>,
    config: EngineConfig,

    shapes: ShapeInterpolator,
    compositor: PageCompositor,
    clock: ProgressClock,

    state: TransitionState,
    elapsed_ticks: u32,

    background: Rgba,
    shape_color: Rgba,

    listeners: Vec<Box<dyn TransitionListener>>,
}

impl<P> TransitionEngine<P> {
    pub fn new(pages: Vec<P>, colors: Vec<Rgba>) -> Self {
        Self::with_config(pages, colors, EngineConfig::default())
    }

    pub fn with_duration(pages: Vec<P>, colors: Vec<Rgba>, duration: f32) -> Self {
        Self::with_config(pages, colors, EngineConfig::default().with_duration(duration))
    }

    /// Unusable timing values in `config` fall back to their defaults.
    pub fn with_config(pages: Vec<P>, colors: Vec<Rgba>, config: EngineConfig) -> Self {
        let config = config.validated();
        Self {
            shapes: ShapeInterpolator::new(&config),
            compositor: PageCompositor::new(&config),
            clock: ProgressClock::new(config.tick_interval),
            pages,
            colors,
            config,
            state: TransitionState::default(),
            elapsed_ticks: 0,
            background: Rgba::WHITE,
            shape_color: Rgba::WHITE,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: impl TransitionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    #[inline]
    pub fn current_page_index(&self) -> usize {
        self.state.current_index
    }

    #[inline]
    pub fn next_page_index(&self) -> usize {
        self.state.next_index
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    #[inline]
    pub fn engine_state(&self) -> EngineState {
        self.state.engine_state()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.clock.is_running()
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    /// Animated transitions need at least two pages and two colors.
    pub fn can_animate(&self) -> bool {
        !diagnose(self.pages.len(), self.colors.len())
            .iter()
            .any(|issue| issue.disables_animation())
    }

    /// Attaches the engine to a host view and starts the progress clock.
    ///
    /// Configuration problems are logged, never returned. The clock stops
    /// when the returned guard is dropped.
    pub fn mount(&mut self) -> Mounted<'_, P> {
        let issues = diagnose(self.pages.len(), self.colors.len());
        for issue in &issues {
            log::warn!("{}", issue);
        }
        if issues.iter().any(|issue| issue.disables_animation()) {
            log::warn!("animated transitions are disabled");
        }

        self.refresh_colors();
        self.clock.start();
        log::debug!("mounted with {} pages", self.pages.len());

        Mounted { engine: self }
    }

    pub fn go_to_next_page(&mut self, animated: bool) -> Navigation {
        self.navigate(Direction::Forward, animated)
    }

    pub fn go_to_previous_page(&mut self, animated: bool) -> Navigation {
        self.navigate(Direction::Backward, animated)
    }

    fn navigate(&mut self, direction: Direction, animated: bool) -> Navigation {
        if animated {
            self.start_animation(direction)
        } else {
            self.jump(direction)
        }
    }

    fn start_animation(&mut self, direction: Direction) -> Navigation {
        if self.state.is_animating {
            log::debug!("navigation ignored, already animating");
            return Navigation::IgnoredAnimating;
        }
        if !self.can_animate() {
            self.state.is_animating = false;
            log::warn!(
                "cannot animate with {} pages and {} colors",
                self.pages.len(),
                self.colors.len()
            );
            return Navigation::Disabled;
        }
        if !self.clock.is_running() {
            log::warn!("cannot animate before the engine is mounted");
            return Navigation::NotMounted;
        }

        let count = self.pages.len();
        self.state.direction = direction;
        self.state.next_index = index_towards(self.state.current_index, count, direction);
        self.state.progress = 0.0;
        self.elapsed_ticks = 0;
        self.state.is_animating = true;
        self.refresh_colors();

        log::debug!(
            "{:?} transition {} -> {}",
            direction, self.state.current_index, self.state.next_index
        );
        self.emit(TransitionEvent::AnimationWillBegin);
        Navigation::Started(direction)
    }

    /// Unanimated navigation. Abandons a running transition silently.
    fn jump(&mut self, direction: Direction) -> Navigation {
        if self.state.is_animating {
            log::debug!("abandoning running transition");
            self.reset_progress();
        }

        let count = self.pages.len();
        self.state.direction = direction;
        self.state.current_index = index_towards(self.state.current_index, count, direction);
        self.state.next_index = index_towards(self.state.current_index, count, direction);
        self.refresh_colors();

        Navigation::Jumped { index: self.state.current_index }
    }

    /// Feeds wall time to the clock and runs any ticks that elapsed.
    ///
    /// An unmounted engine consumes nothing and returns the current frame.
    pub fn advance(&mut self, dt: f32) -> RenderFrame {
        let ticks = self.clock.advance(dt);
        for _ in 0..ticks {
            self.on_tick();
        }
        self.frame()
    }

    fn on_tick(&mut self) {
        if !self.state.is_animating {
            return;
        }

        self.elapsed_ticks += 1;
        // Derived from the tick count so float drift cannot add a tick.
        let progress = self.elapsed_ticks as f32 * self.config.step();
        let limit = self.config.limit;
        let full = self.config.full_cycle();

        if progress >= full * (1.0 - 1e-6) {
            self.commit();
            return;
        }

        self.state.progress = progress;
        let (current, next) = (self.state.current_index, self.state.next_index);
        if progress < limit {
            self.paint(current, next);
        } else {
            self.paint(next, current);
        }
        log::trace!("progress {:.3}", progress);
    }

    fn commit(&mut self) {
        let count = self.pages.len();
        let direction = self.state.direction;
        let from = self.state.current_index;

        self.reset_progress();
        self.state.current_index = index_towards(from, count, direction);
        self.state.next_index = index_towards(self.state.current_index, count, direction);
        self.refresh_colors();

        log::debug!("transition finished on page {}", self.state.current_index);
        self.emit(TransitionEvent::AnimationDidEnd);

        // Landing on the last page, or moving past it, both count as reaching it.
        let last = count - 1;
        if direction == Direction::Forward && (self.state.current_index == last || from == last) {
            self.emit(TransitionEvent::DidGoToLastPage);
        }
    }

    fn reset_progress(&mut self) {
        self.state.progress = 0.0;
        self.elapsed_ticks = 0;
        self.state.is_animating = false;
    }

    fn refresh_colors(&mut self) {
        self.paint(self.state.current_index, self.state.next_index);
    }

    /// Missing color indices keep the previously displayed color.
    fn paint(&mut self, background: usize, circle: usize) {
        match self.colors.get(background) {
            Some(&color) => self.background = color,
            None => log::trace!("no background color for page {}", background),
        }
        match self.colors.get(circle) {
            Some(&color) => self.shape_color = color,
            None => log::trace!("no circle color for page {}", circle),
        }
    }

    fn emit(&mut self, event: TransitionEvent) {
        for listener in self.listeners.iter_mut() {
            listener.on_event(event);
        }
    }

    /// Pure view of the current state.
    pub fn frame(&self) -> RenderFrame {
        let TransitionState { current_index, next_index, progress, is_animating, direction } =
            self.state;

        let shape = if is_animating {
            self.shapes.at(progress, direction)
        } else {
            self.shapes.idle()
        };

        let outgoing = (!self.pages.is_empty())
            .then(|| self.compositor.outgoing(current_index, progress, direction));
        let incoming = (self.pages.len() > 1)
            .then(|| self.compositor.incoming(next_index, progress, direction));

        RenderFrame {
            background: self.background,
            shape,
            shape_color: self.shape_color,
            outgoing,
            incoming,
            current_index,
            progress,
            is_animating,
            direction,
        }
    }
}

/// A mounted engine. Dropping it stops the clock and abandons any running
/// transition without notifying listeners.
pub struct Mounted<'a, P> {
    engine: &'a mut TransitionEngine<P>,
}

impl<P> Deref for Mounted<'_, P> {
    type Target = TransitionEngine<P>;

    fn deref(&self) -> &Self::Target {
        self.engine
    }
}

impl<P> DerefMut for Mounted<'_, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.engine
    }
}

impl<P> Drop for Mounted<'_, P> {
    fn drop(&mut self) {
        self.engine.clock.stop();
        if self.engine.state.is_animating {
            self.engine.reset_progress();
            self.engine.refresh_colors();
        }
        log::debug!("unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICK_INTERVAL;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn palette(n: usize) -> Vec<Rgba> {
        (0..n).map(|i| Rgba::rgb(i as u8 * 40, 0, 0)).collect()
    }

    fn recorded(engine: &mut TransitionEngine<char>) -> Rc<RefCell<Vec<TransitionEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        engine.add_listener(move |event: TransitionEvent| sink.borrow_mut().push(event));
        events
    }

    #[test]
    fn starts_idle_on_the_first_page() {
        let engine = TransitionEngine::new(vec!['a', 'b'], palette(2));
        assert_eq!(engine.current_page_index(), 0);
        assert_eq!(engine.next_page_index(), 1);
        assert_eq!(engine.progress(), 0.0);
        assert_eq!(engine.engine_state(), EngineState::Idle);
        assert!(!engine.is_mounted());
    }

    #[test]
    fn mount_paints_the_first_colors() {
        let mut engine = TransitionEngine::new(vec!['a', 'b', 'c'], palette(3));
        let view = engine.mount();
        let frame = view.frame();
        assert_eq!(frame.background, palette(3)[0]);
        assert_eq!(frame.shape_color, palette(3)[1]);
        assert!(frame.shape.is_disc());
    }

    #[test]
    fn colors_swap_at_the_midpoint() {
        let mut engine = TransitionEngine::new(vec!['a', 'b', 'c'], palette(3));
        let mut view = engine.mount();
        view.go_to_next_page(true);

        let early = view.advance(TICK_INTERVAL);
        assert_eq!(early.background, palette(3)[0]);
        assert_eq!(early.shape_color, palette(3)[1]);

        let mut late = early;
        for _ in 0..30 {
            late = view.advance(TICK_INTERVAL);
        }
        assert!(late.progress >= 15.0);
        assert_eq!(late.background, palette(3)[1]);
        assert_eq!(late.shape_color, palette(3)[0]);
    }

    #[test]
    fn animated_navigation_is_rejected_while_animating() {
        let mut engine = TransitionEngine::new(vec!['a', 'b', 'c'], palette(3));
        let events = recorded(&mut engine);
        let mut view = engine.mount();

        assert_eq!(view.go_to_next_page(true), Navigation::Started(Direction::Forward));
        view.advance(TICK_INTERVAL);
        assert_eq!(view.go_to_next_page(true), Navigation::IgnoredAnimating);
        assert_eq!(view.go_to_previous_page(true), Navigation::IgnoredAnimating);
        assert_eq!(view.next_page_index(), 1);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn unanimated_jump_abandons_a_running_transition() {
        let mut engine = TransitionEngine::new(vec!['a', 'b', 'c'], palette(3));
        let events = recorded(&mut engine);
        let mut view = engine.mount();

        view.go_to_next_page(true);
        for _ in 0..10 {
            view.advance(TICK_INTERVAL);
        }
        assert_eq!(view.go_to_previous_page(false), Navigation::Jumped { index: 2 });
        assert!(!view.is_animating());
        assert_eq!(view.progress(), 0.0);
        assert_eq!(view.next_page_index(), 1);
        assert_eq!(*events.borrow(), vec![TransitionEvent::AnimationWillBegin]);
    }

    #[test]
    fn unmounting_stops_consuming_ticks() {
        let mut engine = TransitionEngine::new(vec!['a', 'b'], palette(2));
        let events = recorded(&mut engine);
        {
            let mut view = engine.mount();
            view.go_to_next_page(true);
            view.advance(TICK_INTERVAL);
        }
        assert!(!engine.is_mounted());
        assert!(!engine.is_animating());
        for _ in 0..100 {
            engine.advance(TICK_INTERVAL);
        }
        assert_eq!(engine.current_page_index(), 0);
        assert_eq!(*events.borrow(), vec![TransitionEvent::AnimationWillBegin]);
    }

    #[test]
    fn unmounted_engine_refuses_to_animate() {
        let mut engine = TransitionEngine::new(vec!['a', 'b'], palette(2));
        let events = recorded(&mut engine);
        assert_eq!(engine.go_to_next_page(true), Navigation::NotMounted);
        assert_eq!(engine.go_to_previous_page(true), Navigation::NotMounted);
        assert!(!engine.is_animating());
        assert!(events.borrow().is_empty());

        // Unanimated jumps need no clock.
        assert_eq!(engine.go_to_next_page(false), Navigation::Jumped { index: 1 });
        assert_eq!(
            engine.mount().go_to_next_page(true),
            Navigation::Started(Direction::Forward)
        );
    }

    #[test]
    fn unusable_timing_config_still_completes() {
        let config = EngineConfig {
            tick_interval: -0.02,
            duration: -1.0,
            ..EngineConfig::default()
        };
        let mut engine = TransitionEngine::with_config(vec!['a', 'b'], palette(2), config);
        let events = recorded(&mut engine);
        let mut view = engine.mount();
        view.go_to_next_page(true);
        let mut ticks = 0;
        while view.is_animating() {
            view.advance(TICK_INTERVAL);
            ticks += 1;
            assert!(ticks <= 50, "transition never finished");
        }
        assert_eq!(ticks, 50);
        assert_eq!(view.current_page_index(), 1);
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn missing_colors_keep_the_previous_color() {
        let mut engine = TransitionEngine::new(vec!['a', 'b', 'c'], palette(2));
        let mut view = engine.mount();
        view.go_to_next_page(false);
        let frame = view.frame();
        // Page 2 has no color, the circle keeps page 1's.
        assert_eq!(view.current_page_index(), 1);
        assert_eq!(frame.background, palette(2)[1]);
        assert_eq!(frame.shape_color, palette(2)[1]);
    }

    #[test]
    fn frame_places_both_pages() {
        let mut engine = TransitionEngine::new(vec!['a', 'b'], palette(2));
        let frame = engine.mount().frame();
        let outgoing = frame.outgoing.map(|p| p.index);
        let incoming = frame.incoming.map(|p| p.index);
        assert_eq!((outgoing, incoming), (Some(0), Some(1)));

        let single: TransitionEngine<char> = TransitionEngine::new(vec!['a'], palette(1));
        assert!(single.frame().incoming.is_none());
        assert!(single.frame().outgoing.is_some());
    }
}
