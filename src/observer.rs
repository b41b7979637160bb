//! Step observers: receivers of full-array snapshots after each mutation.
//!
//! An observer is called synchronously, in algorithmic order, once per
//! qualifying mutation. It always receives an owned copy of the array, so a
//! consumer may keep frames around for later playback.

use log::debug;

/// Receiver of per-mutation snapshots
pub trait StepObserver<T> {
    fn observe(&mut self, snapshot: Vec<T>);

    /// When false, algorithms skip building the next snapshot and call
    /// [`StepObserver::skipped`] instead
    fn wants_snapshot(&self) -> bool {
        true
    }

    /// A step happened but no snapshot was built for it
    fn skipped(&mut self) {}
}

impl<T, F> StepObserver<T> for F
where
    F: FnMut(Vec<T>),
{
    fn observe(&mut self, snapshot: Vec<T>) {
        self(snapshot)
    }
}

/// Observer that discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl<T> StepObserver<T> for NoObserver {
    fn observe(&mut self, _snapshot: Vec<T>) {}

    fn wants_snapshot(&self) -> bool {
        false
    }
}

/// Collects snapshots as animation frames, optionally capped.
///
/// Once the cap is reached further snapshots are counted but not stored.
#[derive(Clone, Debug)]
pub struct StepRecorder<T> {
    frames: Vec<Vec<T>>,
    limit: Option<usize>,
    dropped: usize,
}

impl<T> StepRecorder<T> {
    pub fn new() -> Self {
        Self { frames: Vec::new(), limit: None, dropped: 0 }
    }

    /// Keep at most `limit` frames
    pub fn with_limit(limit: usize) -> Self {
        Self { frames: Vec::new(), limit: Some(limit), dropped: 0 }
    }

    pub fn frames(&self) -> &[Vec<T>] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Vec<T>> {
        self.frames
    }

    /// Number of snapshots seen past the cap
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Total number of snapshots observed, stored or not
    pub fn observed(&self) -> usize {
        self.frames.len() + self.dropped
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.dropped = 0;
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.frames.len() >= limit)
    }

    fn note_dropped(&mut self) {
        if self.dropped == 0 {
            debug!("Step recorder reached its limit of {} frames", self.frames.len());
        }
        self.dropped += 1;
    }
}

impl<T> Default for StepRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StepObserver<T> for StepRecorder<T> {
    fn observe(&mut self, snapshot: Vec<T>) {
        if self.is_full() {
            self.note_dropped();
        } else {
            self.frames.push(snapshot);
        }
    }

    fn wants_snapshot(&self) -> bool {
        !self.is_full()
    }

    fn skipped(&mut self) {
        self.note_dropped();
    }
}
