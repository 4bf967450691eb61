//! Viewer notifications and the subscriber list that delivers them.

use crate::camera::core::ProjectionKind;

/// Notifications published by the camera controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The first interactive camera operation began.
    InteractionStarted,
    /// The last interactive camera operation ended.
    InteractionEnded,
    /// The hosting view was shown (`true`) or hidden (`false`).
    VisibilityChanged(bool),
    /// The active camera was replaced by one of the given kind.
    CameraReplaced(ProjectionKind),
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&ViewerEvent)>;

/// Ordered subscriber list. Handlers run in subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Handler)>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl EventBus {
    /// Register `handler` for every subsequent event.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&ViewerEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` (and logs) if `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        let removed = self.subscribers.len() != before;
        if !removed {
            log::warn!("tried to remove non-existent subscription {id:?}");
        }
        removed
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// `true` when nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `event` to every handler.
    pub fn emit(&mut self, event: ViewerEvent) {
        for (_, handler) in &mut self.subscribers {
            handler(&event);
        }
    }
}
