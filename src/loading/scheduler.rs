use std::{cell::Cell, rc::Rc};

use crate::loading::countdown::ProgressCountdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a frame task wants after running.
pub enum FrameControl {
    /// Run again on the next frame.
    Continue,
    /// Finished; drop the task.
    Done,
}

/// Work invoked once per frame until it reports [`FrameControl::Done`] or is cancelled.
pub trait FrameTask {
    /// Run for the frame at `now_ms`.
    fn on_frame(&mut self, now_ms: f64) -> FrameControl;
}

impl<F> FrameTask for F
where
    F: FnMut(f64) -> FrameControl,
{
    fn on_frame(&mut self, now_ms: f64) -> FrameControl {
        self(now_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TaskStatus {
    Active,
    Done,
    Cancelled,
}

struct Entry {
    id: u64,
    status: Rc<Cell<TaskStatus>>,
    task: Box<dyn FrameTask>,
}

/// Single-threaded per-frame driver.
///
/// The host calls [`FrameScheduler::tick`] once per animation frame. Tasks are
/// owned by the scheduler and controlled through the [`FrameGuard`] returned on
/// scheduling; a cancelled task is never invoked again.
#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    entries: Vec<Entry>,
}

impl FrameScheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` for every subsequent frame.
    pub fn schedule(&mut self, task: impl FrameTask + 'static) -> FrameGuard {
        let id = self.next_id;
        self.next_id += 1;
        let status = Rc::new(Cell::new(TaskStatus::Active));
        self.entries.push(Entry {
            id,
            status: Rc::clone(&status),
            task: Box::new(task),
        });
        tracing::trace!(id, "frame task scheduled");
        FrameGuard { id, status }
    }

    /// Number of tasks still waiting for frames.
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status.get() == TaskStatus::Active)
            .count()
    }

    /// Run one frame. Returns how many tasks were invoked.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        self.entries.retain(|e| e.status.get() == TaskStatus::Active);

        let mut ran = 0usize;
        for entry in &mut self.entries {
            // A task earlier in this frame may have dropped another task's guard.
            if entry.status.get() != TaskStatus::Active {
                continue;
            }
            ran += 1;
            if entry.task.on_frame(now_ms) == FrameControl::Done {
                entry.status.set(TaskStatus::Done);
                tracing::trace!(id = entry.id, "frame task done");
            }
        }

        self.entries.retain(|e| e.status.get() == TaskStatus::Active);
        ran
    }
}

/// Handle to a scheduled task. Dropping it cancels the task.
#[must_use = "dropping the guard cancels the frame task"]
#[derive(Debug)]
pub struct FrameGuard {
    id: u64,
    status: Rc<Cell<TaskStatus>>,
}

impl FrameGuard {
    /// Scheduler-assigned task id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True until the task finishes or is cancelled.
    pub fn is_active(&self) -> bool {
        self.status.get() == TaskStatus::Active
    }

    /// Stop the task before its next frame. No-op once finished.
    pub fn cancel(&self) {
        if self.status.get() == TaskStatus::Active {
            self.status.set(TaskStatus::Cancelled);
            tracing::trace!(id = self.id, "frame task cancelled");
        }
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Loading screen view: drives a [`ProgressCountdown`] from the frame scheduler.
///
/// The countdown stops when the view is dropped; the completion callback then
/// never fires.
pub struct LoadingScreen {
    progress: Rc<Cell<f64>>,
    complete: Rc<Cell<bool>>,
    guard: FrameGuard,
}

impl LoadingScreen {
    /// Mount the view and start sampling on the next frame.
    pub fn mount(
        scheduler: &mut FrameScheduler,
        duration_ms: u64,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let progress = Rc::new(Cell::new(0.0));
        let complete = Rc::new(Cell::new(false));
        let mut countdown = ProgressCountdown::new(duration_ms);
        let mut on_complete = Some(on_complete);

        let task_progress = Rc::clone(&progress);
        let task_complete = Rc::clone(&complete);
        let guard = scheduler.schedule(move |now_ms: f64| {
            let sample = countdown.sample(now_ms);
            task_progress.set(sample.percent);
            if !sample.just_completed {
                return FrameControl::Continue;
            }
            task_complete.set(true);
            if let Some(cb) = on_complete.take() {
                cb();
            }
            FrameControl::Done
        });

        Self {
            progress,
            complete,
            guard,
        }
    }

    /// Latest progress in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    /// Progress rounded to the nearest whole percent, as displayed.
    pub fn display_percent(&self) -> u8 {
        self.progress.get().round().clamp(0.0, 100.0) as u8
    }

    /// Whether the countdown reached its duration.
    pub fn is_complete(&self) -> bool {
        self.complete.get()
    }

    /// Whether the view is still sampling frames.
    pub fn is_running(&self) -> bool {
        self.guard.is_active()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loading/scheduler.rs"]
mod tests;
