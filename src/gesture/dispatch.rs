// SPDX-License-Identifier: MPL-2.0
//! Intent delivery.
//!
//! The classifier emits every intent through one [`IntentSink`]. Screens that
//! want per-gesture callbacks register them on a [`Dispatcher`] instead of
//! matching on [`Intent`] themselves.

use crate::domain::gesture::{Intent, SwipeDirection, TouchPoint};

/// Receives intents as the classifier produces them.
///
/// The classifier holds the sink by value and borrows it mutably for each
/// emission, so a handler cannot call back into the classifier that owns it.
pub trait IntentSink {
    fn emit(&mut self, intent: Intent);
}

/// Collects intents in order. Convenient for hosts that drain after each event.
impl IntentSink for Vec<Intent> {
    fn emit(&mut self, intent: Intent) {
        self.push(intent);
    }
}

impl<T: IntentSink + ?Sized> IntentSink for &mut T {
    fn emit(&mut self, intent: Intent) {
        (**self).emit(intent);
    }
}

type Handler<'a, A> = Box<dyn FnMut(A) + 'a>;

/// Routes each intent kind to its registered handler.
///
/// Intents without a handler are dropped.
#[derive(Default)]
pub struct Dispatcher<'a> {
    tap: Option<Handler<'a, ()>>,
    double_tap: Option<Handler<'a, TouchPoint>>,
    swipe: Option<Handler<'a, SwipeDirection>>,
    long_press: Option<Handler<'a, ()>>,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_tap(mut self, handler: impl FnMut() + 'a) -> Self {
        let mut handler = handler;
        self.tap = Some(Box::new(move |()| handler()));
        self
    }

    #[must_use]
    pub fn on_double_tap(mut self, handler: impl FnMut(TouchPoint) + 'a) -> Self {
        self.double_tap = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_swipe(mut self, handler: impl FnMut(SwipeDirection) + 'a) -> Self {
        self.swipe = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_long_press(mut self, handler: impl FnMut() + 'a) -> Self {
        let mut handler = handler;
        self.long_press = Some(Box::new(move |()| handler()));
        self
    }
}

impl IntentSink for Dispatcher<'_> {
    fn emit(&mut self, intent: Intent) {
        match intent {
            Intent::Tap => {
                if let Some(handler) = &mut self.tap {
                    handler(());
                }
            }
            Intent::DoubleTap(point) => {
                if let Some(handler) = &mut self.double_tap {
                    handler(point);
                }
            }
            Intent::LongPress => {
                if let Some(handler) = &mut self.long_press {
                    handler(());
                }
            }
            swipe => {
                if let (Some(handler), Some(direction)) =
                    (&mut self.swipe, swipe.swipe_direction())
                {
                    handler(direction);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn vec_sink_preserves_order() {
        let mut sink: Vec<Intent> = Vec::new();
        sink.emit(Intent::SwipeLeft);
        sink.emit(Intent::Tap);
        assert_eq!(sink, vec![Intent::SwipeLeft, Intent::Tap]);
    }

    #[test]
    fn mutable_reference_forwards_to_inner_sink() {
        fn feed<S: IntentSink>(mut sink: S) {
            sink.emit(Intent::LongPress);
        }

        let mut inner: Vec<Intent> = Vec::new();
        feed(&mut inner);
        assert_eq!(inner, vec![Intent::LongPress]);
    }

    #[test]
    fn dispatcher_routes_each_kind_to_its_handler() {
        let taps = Cell::new(0);
        let long_presses = Cell::new(0);
        let doubles = RefCell::new(Vec::new());
        let swipes = RefCell::new(Vec::new());

        let mut dispatcher = Dispatcher::new()
            .on_tap(|| taps.set(taps.get() + 1))
            .on_double_tap(|p| doubles.borrow_mut().push(p.x))
            .on_swipe(|d| swipes.borrow_mut().push(d))
            .on_long_press(|| long_presses.set(long_presses.get() + 1));

        dispatcher.emit(Intent::Tap);
        dispatcher.emit(Intent::DoubleTap(TouchPoint::new(810.0, 505.0, 200)));
        dispatcher.emit(Intent::SwipeUp);
        dispatcher.emit(Intent::SwipeRight);
        dispatcher.emit(Intent::LongPress);
        drop(dispatcher);

        assert_eq!(taps.get(), 1);
        assert_eq!(long_presses.get(), 1);
        assert_eq!(*doubles.borrow(), vec![810.0]);
        assert_eq!(
            *swipes.borrow(),
            vec![SwipeDirection::Up, SwipeDirection::Right]
        );
    }

    #[test]
    fn unregistered_intents_are_dropped() {
        let taps = Cell::new(0);
        let mut dispatcher = Dispatcher::new().on_tap(|| taps.set(taps.get() + 1));
        dispatcher.emit(Intent::LongPress);
        dispatcher.emit(Intent::SwipeDown);
        drop(dispatcher);
        assert_eq!(taps.get(), 0);
    }
}
