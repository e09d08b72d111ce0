//! Observer event system
//!
//! Key principles:
//! - Broadcast delivery: every registered observer sees every event
//! - Registration order is delivery order
//! - Attach/detach are idempotent, compared by observer identity
//! - The subscriber list is snapshotted at the start of each notify, so an
//!   observer that attaches or detaches during dispatch only affects later
//!   notifies, never the one in flight

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Event with a kind tag and an opaque payload
///
/// Events are constructed at publish time and borrowed by observers for the
/// duration of the dispatch; they are never retained.
pub struct Event<'a> {
    /// What happened, e.g. `"entity_destroyed"`
    pub kind: &'a str,
    /// Publisher-defined payload; observers downcast to the concrete type
    pub payload: &'a dyn Any,
}

impl<'a> Event<'a> {
    /// Get the payload as a concrete type, if it matches
    pub fn payload_as<T: 'static>(&self) -> Option<&'a T> {
        self.payload.downcast_ref::<T>()
    }
}

/// Observer trait
///
/// Implementors receive every event published on the dispatcher they are
/// attached to. Callback effects are arbitrary, but re-entrant `notify`
/// calls from inside `update` are the observer's own responsibility.
pub trait Observer {
    /// Handle a published event
    fn update(&mut self, event: &Event<'_>);
}

/// Shared, identity-comparable observer handle
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// Synchronous broadcast dispatcher
///
/// Holds no ownership beyond the registration list; the list only shrinks
/// through explicit [`EventDispatcher::detach`]. Single-threaded by design.
#[derive(Default)]
pub struct EventDispatcher {
    observers: RefCell<Vec<SharedObserver>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no observers
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer unless it is already present
    ///
    /// Identity-compared with [`Rc::ptr_eq`]; duplicates are silently
    /// ignored.
    pub fn attach(&self, observer: SharedObserver) {
        let mut observers = self.observers.borrow_mut();
        if !observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            observers.push(observer);
        }
    }

    /// Remove an observer if present; silently does nothing otherwise
    pub fn detach(&self, observer: &SharedObserver) {
        self.observers
            .borrow_mut()
            .retain(|o| !Rc::ptr_eq(o, observer));
    }

    /// Number of currently registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Publish an event to every registered observer, in registration order
    ///
    /// The observer list is snapshotted before iteration: attach/detach
    /// performed by an observer mid-dispatch takes effect from the next
    /// `notify` onward.
    pub fn notify(&self, kind: &str, payload: &dyn Any) {
        let snapshot: Vec<SharedObserver> = self.observers.borrow().clone();
        let event = Event { kind, payload };
        for observer in snapshot {
            observer.borrow_mut().update(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingObserver {
        received: Vec<(String, u32)>,
    }

    impl RecordingObserver {
        fn new() -> Self {
            Self {
                received: Vec::new(),
            }
        }
    }

    impl Observer for RecordingObserver {
        fn update(&mut self, event: &Event<'_>) {
            let value = event.payload_as::<u32>().copied().unwrap_or(0);
            self.received.push((event.kind.to_string(), value));
        }
    }

    fn recording() -> Rc<RefCell<RecordingObserver>> {
        Rc::new(RefCell::new(RecordingObserver::new()))
    }

    #[test]
    fn test_notify_delivers_in_registration_order() {
        let dispatcher = EventDispatcher::new();
        let a = recording();
        let b = recording();
        dispatcher.attach(a.clone());
        dispatcher.attach(b.clone());

        dispatcher.notify("destroyed", &42u32);

        assert_eq!(a.borrow().received, vec![("destroyed".to_string(), 42)]);
        assert_eq!(b.borrow().received, vec![("destroyed".to_string(), 42)]);
    }

    /// Observer that appends its name to a log shared across observers,
    /// making cross-observer delivery order visible
    struct SequencedObserver {
        name: &'static str,
        sequence: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for SequencedObserver {
        fn update(&mut self, _event: &Event<'_>) {
            self.sequence.borrow_mut().push(self.name);
        }
    }

    fn sequenced(
        name: &'static str,
        sequence: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Rc<RefCell<SequencedObserver>> {
        Rc::new(RefCell::new(SequencedObserver {
            name,
            sequence: sequence.clone(),
        }))
    }

    #[test]
    fn test_notify_order_matches_registration_order() {
        let dispatcher = EventDispatcher::new();
        let sequence = Rc::new(RefCell::new(Vec::new()));
        let a = sequenced("a", &sequence);
        let b = sequenced("b", &sequence);
        dispatcher.attach(a.clone());
        dispatcher.attach(b);

        dispatcher.notify("destroyed", &0u32);
        assert_eq!(*sequence.borrow(), vec!["a", "b"]);

        // Detaching the first observer leaves the second alone in order.
        let a_handle: SharedObserver = a;
        dispatcher.detach(&a_handle);
        dispatcher.notify("destroyed", &0u32);
        assert_eq!(*sequence.borrow(), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_detach_stops_delivery() {
        let dispatcher = EventDispatcher::new();
        let a = recording();
        let b = recording();
        dispatcher.attach(a.clone());
        dispatcher.attach(b.clone());

        let a_handle: SharedObserver = a.clone();
        dispatcher.detach(&a_handle);
        dispatcher.notify("destroyed", &7u32);

        assert!(a.borrow().received.is_empty());
        assert_eq!(b.borrow().received.len(), 1);
    }

    #[test]
    fn test_attach_is_idempotent_by_identity() {
        let dispatcher = EventDispatcher::new();
        let a = recording();
        dispatcher.attach(a.clone());
        dispatcher.attach(a.clone());
        assert_eq!(dispatcher.observer_count(), 1);

        dispatcher.notify("ping", &1u32);
        assert_eq!(a.borrow().received.len(), 1);
    }

    #[test]
    fn test_detach_absent_observer_is_silent() {
        let dispatcher = EventDispatcher::new();
        let a = recording();
        let handle: SharedObserver = a;
        dispatcher.detach(&handle);
        assert_eq!(dispatcher.observer_count(), 0);
    }

    /// Observer that detaches another observer while handling an event
    struct DetachingObserver {
        dispatcher: Rc<EventDispatcher>,
        victim: SharedObserver,
        fired: bool,
    }

    impl Observer for DetachingObserver {
        fn update(&mut self, _event: &Event<'_>) {
            self.dispatcher.detach(&self.victim);
            self.fired = true;
        }
    }

    #[test]
    fn test_mid_dispatch_detach_takes_effect_next_notify() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let victim = recording();
        let victim_handle: SharedObserver = victim.clone();

        let detacher = Rc::new(RefCell::new(DetachingObserver {
            dispatcher: dispatcher.clone(),
            victim: victim_handle,
            fired: false,
        }));

        // Detacher runs first, but the snapshot still delivers to the victim.
        dispatcher.attach(detacher.clone());
        dispatcher.attach(victim.clone());

        dispatcher.notify("first", &1u32);
        assert!(detacher.borrow().fired);
        assert_eq!(victim.borrow().received.len(), 1);

        dispatcher.notify("second", &2u32);
        assert_eq!(victim.borrow().received.len(), 1);
    }
}
