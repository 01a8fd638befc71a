//! Change notification for presentation layers.

use std::fmt;

/// What a successful mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    YearAdded(i32),
    YearRemoved(i32),
    Assets(i32),
    Liabilities(i32),
    Milestones,
    Salary,
    Savings,
    EmergencyFundGoal,
    /// The whole state was replaced (import).
    Replaced,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&LedgerChange)>;

/// Ordered list of observers, called synchronously in subscription order.
#[derive(Default)]
pub(crate) struct ChangeNotifier {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl ChangeNotifier {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn notify(&mut self, change: LedgerChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}
