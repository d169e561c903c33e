//! Timeline factory, control and per-frame dispatch.

use crate::animation::lerp::Lerp;
use crate::animation::scheduler::{CompletedFn, Timeline, UpdateFn};
use crate::animation::timeline::{Tick, TimelineSpec, TimelineState};
use crate::engine::context::Engine;
use crate::foundation::error::{VantageError, VantageResult};
use crate::foundation::ids::{ObjectId, TimelineId};

fn missing_timeline(id: TimelineId) -> VantageError {
    tracing::warn!(%id, "timeline not found");
    VantageError::lookup(format!("timeline {id} not found"))
}

impl Engine {
    /// Schedule a timeline. It first advances on the next [`Engine::update`].
    pub fn create_timeline(
        &mut self,
        spec: TimelineSpec,
        update: Option<UpdateFn>,
        completed: Option<CompletedFn>,
    ) -> TimelineId {
        self.scheduler
            .insert(Timeline::new(spec, update, completed, None))
    }

    /// Schedule a timeline that only calls `update`.
    pub fn tween(
        &mut self,
        spec: TimelineSpec,
        update: impl FnMut(&mut Engine, f64) + 'static,
    ) -> TimelineId {
        self.create_timeline(spec, Some(Box::new(update)), None)
    }

    /// Call `completed` once after `delay_ms`.
    pub fn delay(
        &mut self,
        delay_ms: f64,
        completed: impl FnMut(&mut Engine) + 'static,
    ) -> TimelineId {
        self.create_timeline(
            TimelineSpec {
                duration_ms: delay_ms,
                ..TimelineSpec::default()
            },
            None,
            Some(Box::new(completed)),
        )
    }

    pub(crate) fn create_owned_timeline(
        &mut self,
        spec: TimelineSpec,
        update: Option<UpdateFn>,
        completed: Option<CompletedFn>,
        owner: ObjectId,
    ) -> TimelineId {
        self.scheduler
            .insert(Timeline::new(spec, update, completed, Some(owner)))
    }

    /// Interpolate from `start` to `target`, writing each value through `apply`.
    ///
    /// The timeline is owned by `owner` and dies with it. `apply` failures (a child that was
    /// removed mid-animation) are logged and skipped.
    pub(crate) fn tween_owned<T, F>(
        &mut self,
        owner: ObjectId,
        spec: TimelineSpec,
        start: T,
        target: T,
        mut apply: F,
    ) -> TimelineId
    where
        T: Lerp + 'static,
        F: FnMut(&mut Engine, T) -> VantageResult<()> + 'static,
    {
        let update: UpdateFn = Box::new(move |engine: &mut Engine, blend: f64| {
            if !engine.objects.contains(owner) {
                tracing::trace!(%owner, "tween target is gone");
                return;
            }
            if let Err(err) = apply(engine, T::lerp(&start, &target, blend)) {
                tracing::trace!(%owner, %err, "tween step skipped");
            }
        });
        self.create_owned_timeline(spec, Some(update), None, owner)
    }

    /// Run `apply` once after `delay_ms`, unless `owner` is destroyed first.
    pub(crate) fn delay_owned<F>(&mut self, owner: ObjectId, delay_ms: f64, apply: F) -> TimelineId
    where
        F: FnMut(&mut Engine) -> VantageResult<()> + 'static,
    {
        let mut apply = apply;
        let completed: CompletedFn = Box::new(move |engine: &mut Engine| {
            if let Err(err) = apply(engine) {
                tracing::trace!(%owner, %err, "delayed change skipped");
            }
        });
        self.create_owned_timeline(
            TimelineSpec {
                duration_ms: delay_ms,
                ..TimelineSpec::default()
            },
            None,
            Some(completed),
            owner,
        )
    }

    /// Clock state of a live timeline.
    pub fn timeline(&self, id: TimelineId) -> Option<&TimelineState> {
        self.scheduler.get(id).map(|t| &t.state)
    }

    /// Whether `id` is still scheduled.
    pub fn is_timeline_active(&self, id: TimelineId) -> bool {
        self.scheduler.contains(id)
    }

    /// Number of scheduled timelines.
    pub fn timeline_count(&self) -> usize {
        self.scheduler.len()
    }

    fn timeline_state_mut(&mut self, id: TimelineId) -> VantageResult<&mut TimelineState> {
        self.scheduler
            .get_mut(id)
            .map(|t| &mut t.state)
            .ok_or_else(|| missing_timeline(id))
    }

    /// Stop advancing `id` until resumed.
    pub fn pause_timeline(&mut self, id: TimelineId) -> VantageResult<()> {
        self.timeline_state_mut(id)?.pause();
        Ok(())
    }

    /// Continue advancing `id`.
    pub fn resume_timeline(&mut self, id: TimelineId) -> VantageResult<()> {
        self.timeline_state_mut(id)?.resume();
        Ok(())
    }

    /// Flip the paused flag of `id`.
    pub fn toggle_timeline(&mut self, id: TimelineId) -> VantageResult<()> {
        self.timeline_state_mut(id)?.toggle();
        Ok(())
    }

    /// Rewind `id` to time zero with no completed loops.
    pub fn reset_timeline(&mut self, id: TimelineId) -> VantageResult<()> {
        self.timeline_state_mut(id)?.reset();
        Ok(())
    }

    /// Remove `id` immediately.
    ///
    /// With `call_completed`, the update callback first receives the final blend and the
    /// completed callback fires once. A timeline stopping itself from inside its update
    /// callback only gets its completed callback.
    pub fn stop_timeline(&mut self, id: TimelineId, call_completed: bool) -> VantageResult<()> {
        let Some(mut timeline) = self.scheduler.remove(id) else {
            return Err(missing_timeline(id));
        };
        if self.camera_timeline == Some(id) {
            self.camera_timeline = None;
        }
        if call_completed {
            let blend = timeline.state.final_blend();
            if let Some(update) = timeline.update.as_mut() {
                update(self, blend);
            }
            if let Some(completed) = timeline.completed.as_mut() {
                completed(self);
            }
        }
        Ok(())
    }

    /// Advance every timeline that existed when the pass started, in creation order.
    pub(crate) fn tick_timelines(&mut self, dt_ms: f64) {
        let paused = self.paused;
        for id in self.scheduler.snapshot() {
            let Some(timeline) = self.scheduler.get_mut(id) else {
                continue;
            };
            match timeline.state.advance(dt_ms, paused) {
                Tick::Skipped => {}
                Tick::Running { blend } => self.run_update(id, blend),
                Tick::LoopCompleted { blend, finished } => {
                    self.run_update(id, blend);
                    self.run_completed(id);
                    if finished && self.scheduler.remove(id).is_some() {
                        if self.camera_timeline == Some(id) {
                            self.camera_timeline = None;
                        }
                        tracing::trace!(%id, "timeline finished");
                    }
                }
            }
        }
        self.scheduler.compact();
    }

    fn run_update(&mut self, id: TimelineId, blend: f64) {
        let Some(mut update) = self.scheduler.get_mut(id).and_then(|t| t.update.take()) else {
            return;
        };
        update(self, blend);
        if let Some(timeline) = self.scheduler.get_mut(id) {
            timeline.update.get_or_insert(update);
        }
    }

    fn run_completed(&mut self, id: TimelineId) {
        let Some(mut completed) = self.scheduler.get_mut(id).and_then(|t| t.completed.take())
        else {
            return;
        };
        completed(self);
        if let Some(timeline) = self.scheduler.get_mut(id) {
            timeline.completed.get_or_insert(completed);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/timelines.rs"]
mod tests;
