use std::sync::mpsc::Sender;

/// Lifecycle notifications emitted by the transition engine.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionEvent {
    AnimationWillBegin,
    AnimationDidEnd,
    /// Sent after `AnimationDidEnd` when a forward transition either lands on
    /// the last page or starts on it and wraps around to page 0. Backward
    /// transitions and unanimated jumps never send it.
    DidGoToLastPage,
}

/// Receives lifecycle events. Registered with
/// [`TransitionEngine::add_listener`](crate::concentric::TransitionEngine::add_listener).
pub trait TransitionListener {
    fn on_event(&mut self, event: TransitionEvent);
}

impl<F> TransitionListener for F
where
    F: FnMut(TransitionEvent),
{
    fn on_event(&mut self, event: TransitionEvent) {
        self(event)
    }
}

impl TransitionListener for Sender<TransitionEvent> {
    fn on_event(&mut self, event: TransitionEvent) {
        // A dropped receiver only means nobody is listening any more.
        if self.send(event).is_err() {
            log::trace!("event receiver dropped, discarding {:?}", event);
        }
    }
}
