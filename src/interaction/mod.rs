//! Gesture state and the touch broadcast channel.
//!
//! The channel replaces field-level reactivity with an explicit owner: a
//! controller holds its own state plus the subscriber list, notifies on each
//! sample, and tears everything down when it is dropped. Delivery is
//! synchronous within the producing callback turn; consumers needing
//! deferred work must schedule it themselves.

use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, ChartKind, PixelPoint};
use crate::resolve::ResolvedTouch;

/// Gesture-scoped view state owned by a chart controller.
///
/// Transitions are Idle -> Active on the first valid sample and Active ->
/// Idle at gesture end. Observers treat "not current" as "no marker"; no
/// event is published for the transition back to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InfoViewState {
    is_touch_current: bool,
    touch_location: PixelPoint,
    chart_bounds: ChartBounds,
}

impl InfoViewState {
    #[must_use]
    pub fn is_touch_current(self) -> bool {
        self.is_touch_current
    }

    #[must_use]
    pub fn touch_location(self) -> PixelPoint {
        self.touch_location
    }

    #[must_use]
    pub fn chart_bounds(self) -> ChartBounds {
        self.chart_bounds
    }

    pub fn on_touch(&mut self, location: PixelPoint, bounds: ChartBounds) {
        self.is_touch_current = true;
        self.touch_location = location;
        self.chart_bounds = bounds;
    }

    pub fn on_touch_finish(&mut self) {
        self.is_touch_current = false;
    }
}

/// Read-only snapshot passed alongside each published touch set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchContext {
    pub chart_kind: ChartKind,
    pub bounds: ChartBounds,
    pub points_len: usize,
}

/// Observer hook for resolved-touch broadcasts.
///
/// Subscribers are independent: each receives every event in publish order
/// and none can block delivery to the others.
pub trait TouchSubscriber {
    fn id(&self) -> &str;
    fn on_touch(&mut self, touches: &[ResolvedTouch], context: TouchContext);
}

/// Single-producer broadcast channel owned by a chart controller.
///
/// Subscriptions live exactly as long as the owning controller; dropping the
/// controller drops the channel and everything subscribed to it.
#[derive(Default)]
pub struct TouchChannel {
    subscribers: Vec<Box<dyn TouchSubscriber>>,
}

impl TouchChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn TouchSubscriber>) {
        self.subscribers.push(subscriber);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Removes the subscriber with the given id; delivery to the remaining
    /// subscribers is unaffected. Returns whether anything was removed.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id() != id);
        self.subscribers.len() != before
    }

    /// Delivers one touch set to every subscriber, in subscription order.
    pub fn publish(&mut self, touches: &[ResolvedTouch], context: TouchContext) {
        for subscriber in &mut self.subscribers {
            subscriber.on_touch(touches, context);
        }
    }
}
