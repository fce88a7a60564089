//! Observers receive every battle event as it is emitted.
//!
//! Delivery is fire-and-forget: observers cannot refuse or alter events.
//! Any `FnMut(&BattleEvent)` closure is an observer.

use super::event::BattleEvent;

/// Receiver of battle notifications.
pub trait BattleObserver {
    fn notify(&mut self, event: &BattleEvent);
}

impl<F> BattleObserver for F
where
    F: FnMut(&BattleEvent),
{
    fn notify(&mut self, event: &BattleEvent) {
        self(event);
    }
}

/// Fan-out to a list of observers, in registration order.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Box<dyn BattleObserver>>,
}

impl ObserverList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: Box<dyn BattleObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify_all(&mut self, event: &BattleEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_closure_observer() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut list = ObserverList::new();
        list.add(Box::new(move |e: &BattleEvent| sink.borrow_mut().push(e.clone())));

        list.notify_all(&BattleEvent::TurnStarted { turn: 1 });
        list.notify_all(&BattleEvent::CardsDrawn { count: 5 });

        assert_eq!(
            *seen.borrow(),
            vec![
                BattleEvent::TurnStarted { turn: 1 },
                BattleEvent::CardsDrawn { count: 5 },
            ]
        );
    }

    #[test]
    fn test_observers_called_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut list = ObserverList::new();
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            list.add(Box::new(move |_: &BattleEvent| order.borrow_mut().push(tag)));
        }
        assert_eq!(list.len(), 2);

        list.notify_all(&BattleEvent::TurnStarted { turn: 1 });
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_debug_shows_count() {
        let list = ObserverList::new();
        assert!(list.is_empty());
        assert_eq!(format!("{list:?}"), "ObserverList { observers: 0 }");
    }
}
