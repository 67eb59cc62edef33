//! # Change Notification
//!
//! A plain observer registry. Consumers register a callback and receive the new
//! [`Snapshot`] after every effective mutation, synchronously and in
//! registration order. Callbacks only ever see immutable snapshots; to change
//! the collection they go back through the manager.
//!
//! ## Re-entrancy
//!
//! Each notification round iterates over a copy of the registry taken when the
//! round starts, so callbacks may subscribe or unsubscribe freely:
//! - A callback removed during a round is skipped for the rest of that round.
//! - A callback added during a round is first called on the next round.

use crate::model::Snapshot;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Callback = Rc<dyn Fn(&Snapshot)>;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct Subscribers {
    entries: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<u64>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false if `id` was not (or no longer) registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn notify(&self, snapshot: &Snapshot) {
        // No borrow is held while callbacks run
        let round: Vec<(SubscriptionId, Callback)> = self.entries.borrow().clone();
        for (id, callback) in round {
            if self.is_subscribed(id) {
                callback(snapshot);
            }
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Todo;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Rc<RefCell<Vec<&'static str>>>) {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        (Rc::clone(&log), log)
    }

    #[test]
    fn notifies_in_registration_order() {
        let (log, sink) = recorder();
        let subs = Subscribers::new();
        let first = Rc::clone(&sink);
        subs.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&sink);
        subs.subscribe(move |_| second.borrow_mut().push("second"));

        subs.notify(&Snapshot::default());
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn passes_the_snapshot() {
        let seen: Rc<RefCell<Option<Snapshot>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let subs = Subscribers::new();
        subs.subscribe(move |snap| *sink.borrow_mut() = Some(snap.clone()));

        let snap = Snapshot::from(vec![Todo::new("x").unwrap()]);
        subs.notify(&snap);
        assert_eq!(seen.borrow().as_ref(), Some(&snap));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let (log, sink) = recorder();
        let subs = Subscribers::new();
        let id = subs.subscribe(move |_| sink.borrow_mut().push("hit"));

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.notify(&Snapshot::default());
        assert!(log.borrow().is_empty());
        assert!(subs.is_empty());
    }

    #[test]
    fn callback_can_unsubscribe_itself() {
        let (log, sink) = recorder();
        let subs = Rc::new(Subscribers::new());
        let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::default();

        let registry = Rc::downgrade(&subs);
        let slot = Rc::clone(&own_id);
        let id = subs.subscribe(move |_| {
            sink.borrow_mut().push("once");
            if let (Some(subs), Some(id)) = (registry.upgrade(), slot.get()) {
                subs.unsubscribe(id);
            }
        });
        own_id.set(Some(id));

        subs.notify(&Snapshot::default());
        subs.notify(&Snapshot::default());
        assert_eq!(*log.borrow(), vec!["once"]);
    }

    #[test]
    fn callback_removed_mid_round_is_skipped() {
        let (log, sink) = recorder();
        let subs = Rc::new(Subscribers::new());
        let victim: Rc<Cell<Option<SubscriptionId>>> = Rc::default();

        let registry = Rc::downgrade(&subs);
        let target = Rc::clone(&victim);
        let first_sink = Rc::clone(&sink);
        subs.subscribe(move |_| {
            first_sink.borrow_mut().push("first");
            if let (Some(subs), Some(id)) = (registry.upgrade(), target.get()) {
                subs.unsubscribe(id);
            }
        });
        let second_sink = Rc::clone(&sink);
        let second = subs.subscribe(move |_| second_sink.borrow_mut().push("second"));
        victim.set(Some(second));

        subs.notify(&Snapshot::default());
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn callback_added_mid_round_waits_for_next_round() {
        let (log, sink) = recorder();
        let subs = Rc::new(Subscribers::new());
        let registry = Rc::downgrade(&subs);
        let added = Rc::new(Cell::new(false));

        let outer_sink = Rc::clone(&sink);
        let flag = Rc::clone(&added);
        subs.subscribe(move |_| {
            outer_sink.borrow_mut().push("outer");
            if !flag.replace(true) {
                if let Some(subs) = registry.upgrade() {
                    let inner_sink = Rc::clone(&outer_sink);
                    subs.subscribe(move |_| inner_sink.borrow_mut().push("inner"));
                }
            }
        });

        subs.notify(&Snapshot::default());
        assert_eq!(*log.borrow(), vec!["outer"]);
        subs.notify(&Snapshot::default());
        assert_eq!(*log.borrow(), vec!["outer", "outer", "inner"]);
    }
}
