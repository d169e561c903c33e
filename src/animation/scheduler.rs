use crate::animation::timeline::{TimelineSpec, TimelineState};
use crate::engine::context::Engine;
use crate::foundation::arena::Arena;
use crate::foundation::ids::{ObjectId, TimelineId};

/// Per-tick callback receiving the eased blend.
pub type UpdateFn = Box<dyn FnMut(&mut Engine, f64)>;

/// Callback fired each time a loop completes.
pub type CompletedFn = Box<dyn FnMut(&mut Engine)>;

/// A scheduled timeline: clock state plus callbacks.
///
/// Callbacks are moved out of the slot while they run so they can borrow the engine
/// mutably; a slot seen without its callback is mid-dispatch.
pub(crate) struct Timeline {
    pub(crate) state: TimelineState,
    pub(crate) update: Option<UpdateFn>,
    pub(crate) completed: Option<CompletedFn>,
    pub(crate) owner: Option<ObjectId>,
}

impl Timeline {
    pub(crate) fn new(
        spec: TimelineSpec,
        update: Option<UpdateFn>,
        completed: Option<CompletedFn>,
        owner: Option<ObjectId>,
    ) -> Self {
        Self {
            state: TimelineState::new(spec),
            update,
            completed,
            owner,
        }
    }
}

/// Timeline storage in creation order.
///
/// Removal only invalidates the handle; `order` is compacted after each full pass so an
/// in-flight iteration over a snapshot never observes shifted indices.
#[derive(Default)]
pub(crate) struct Scheduler {
    timelines: Arena<TimelineId, Timeline>,
    order: Vec<TimelineId>,
}

impl Scheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.timelines.len()
    }

    pub(crate) fn insert(&mut self, timeline: Timeline) -> TimelineId {
        let id = self.timelines.insert(timeline);
        self.order.push(id);
        id
    }

    pub(crate) fn remove(&mut self, id: TimelineId) -> Option<Timeline> {
        self.timelines.remove(id)
    }

    pub(crate) fn contains(&self, id: TimelineId) -> bool {
        self.timelines.contains(id)
    }

    pub(crate) fn get(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: TimelineId) -> Option<&mut Timeline> {
        self.timelines.get_mut(id)
    }

    /// Live handles in creation order.
    pub(crate) fn snapshot(&self) -> Vec<TimelineId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.timelines.contains(*id))
            .collect()
    }

    /// Live timelines created on behalf of `owner`.
    pub(crate) fn owned_by(&self, owner: ObjectId) -> Vec<TimelineId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.timelines
                    .get(*id)
                    .is_some_and(|t| t.owner == Some(owner))
            })
            .collect()
    }

    /// Drop handles of removed timelines from the ordering.
    pub(crate) fn compact(&mut self) {
        let timelines = &self.timelines;
        self.order.retain(|id| timelines.contains(*id));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
