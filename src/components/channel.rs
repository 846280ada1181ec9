//! Typed notification channels.
//!
//! Each component owns one channel per notification type. Delivery is
//! synchronous and in subscription order; there is no global bus.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Channel<E> {
    observers: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
    next_id: u64,
}

impl<E> Default for Channel<E> {
    fn default() -> Self {
        Self { observers: Vec::new(), next_id: 0 }
    }
}

impl<E> Channel<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn emit(&mut self, event: E) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_delivery_order_is_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut channel = Channel::new();
        for tag in ["first", "second"] {
            let seen = seen.clone();
            channel.subscribe(move |value: &u32| seen.borrow_mut().push((tag, *value)));
        }

        channel.emit(1);
        channel.emit(2);

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut channel = Channel::new();
        let id = {
            let count = count.clone();
            channel.subscribe(move |_: &()| *count.borrow_mut() += 1)
        };

        channel.emit(());
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.emit(());

        assert_eq!(*count.borrow(), 1);
        assert_eq!(channel.observer_count(), 0);
    }
}
