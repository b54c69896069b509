use crate::model::condition::{GroupSize, Quota};

pub type Index = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Form(GroupSize),
    Stop,
}

/// Slot budgets still available to the trial in progress.
///
/// Always built from a copy of the instance quota, so every trial starts
/// from the full budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining(Quota);

impl Remaining {
    pub fn new(quota: Quota) -> Remaining {
        Remaining(quota)
    }

    pub fn get(&self, size: GroupSize) -> usize {
        self.0.get(size)
    }

    /// Strict size priority: the first size in `GroupSize::PRIORITY` that still
    /// fits both the unconsumed tail `cursor..len` and its slot budget wins.
    pub fn next_action(&self, cursor: Index, len: usize) -> Action {
        let left = len.saturating_sub(cursor);
        GroupSize::PRIORITY
            .into_iter()
            .find(|size| size.len() <= left && self.get(*size) >= size.len())
            .map_or(Action::Stop, Action::Form)
    }

    pub fn consume(&mut self, size: GroupSize) {
        let slots = self.0.get_mut(size);
        *slots = slots.saturating_sub(size.len());
    }
}
