//! Frame scheduling
//!
//! A scheduler repeatedly samples its [`LoopClock`] and hands the loop time
//! to a frame callback. Each scheduler owns its own clock, so several
//! animations run independently.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use runeforge_core::RenderConfig;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::clock::{LoopClock, DEFAULT_LOOP};

/// Callback receiving the loop time of each frame
pub type FrameCallback = Box<dyn FnMut(f64) + Send>;

/// Scheduler errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Scheduler is already running")]
    AlreadyRunning,

    #[error("No tokio runtime available to drive frames")]
    NoRuntime,
}

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Target frame rate
    pub fps: u32,
    /// Length of one animation loop
    pub loop_duration: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            loop_duration: DEFAULT_LOOP,
        }
    }
}

impl SchedulerConfig {
    /// Time between frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

impl From<&RenderConfig> for SchedulerConfig {
    fn from(config: &RenderConfig) -> Self {
        Self {
            fps: config.fps.max(1),
            loop_duration: LoopClock::from_secs(config.loop_seconds).loop_duration(),
        }
    }
}

/// Drives a frame callback with normalized loop time
pub trait FrameScheduler {
    /// Start delivering frames. The clock origin is set by the first frame.
    fn start(&mut self, on_frame: FrameCallback) -> Result<(), SchedulerError>;

    /// Stop delivering frames. No frame starts after this returns; a frame
    /// already running completes first.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Scheduler advanced by explicit timestamps
#[derive(Default)]
pub struct ManualScheduler {
    clock: LoopClock,
    on_frame: Option<FrameCallback>,
    frames: u64,
}

impl ManualScheduler {
    pub fn new(loop_duration: Duration) -> Self {
        Self {
            clock: LoopClock::new(loop_duration),
            on_frame: None,
            frames: 0,
        }
    }

    /// Deliver one frame sampled at `now`. Returns the loop time, or `None`
    /// when the scheduler is stopped.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let on_frame = self.on_frame.as_mut()?;
        let t = self.clock.sample(now);
        on_frame(t);
        self.frames += 1;
        Some(t)
    }

    /// Frames delivered since the last start
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self, on_frame: FrameCallback) -> Result<(), SchedulerError> {
        if self.on_frame.is_some() {
            return Err(SchedulerError::AlreadyRunning);
        }
        self.clock.reset();
        self.frames = 0;
        self.on_frame = Some(on_frame);
        Ok(())
    }

    fn stop(&mut self) {
        self.on_frame = None;
    }

    fn is_running(&self) -> bool {
        self.on_frame.is_some()
    }
}

/// Shared between the scheduler and its frame task
struct Slot {
    on_frame: Mutex<Option<FrameCallback>>,
    frames: AtomicU64,
}

impl Slot {
    fn new(on_frame: Option<FrameCallback>) -> Arc<Self> {
        Arc::new(Self {
            on_frame: Mutex::new(on_frame),
            frames: AtomicU64::new(0),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<FrameCallback>> {
        self.on_frame.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Scheduler ticking on a tokio interval.
///
/// The callback runs under a lock that [`stop`](FrameScheduler::stop) also
/// takes, so stopping waits for an in-flight frame and nothing runs after.
pub struct TokioScheduler {
    config: SchedulerConfig,
    handle: Option<Handle>,
    slot: Arc<Slot>,
    task: Option<JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            handle: None,
            slot: Slot::new(None),
            task: None,
        }
    }

    /// Spawn frames on a specific runtime instead of the current one
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Frames delivered since the last start
    pub fn frames(&self) -> u64 {
        self.slot.frames.load(Ordering::Acquire)
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl FrameScheduler for TokioScheduler {
    fn start(&mut self, on_frame: FrameCallback) -> Result<(), SchedulerError> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }
        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?,
        };

        // A task aborted by an earlier stop only ever sees its own emptied slot
        self.slot = Slot::new(Some(on_frame));

        let slot = Arc::clone(&self.slot);
        let interval = self.config.frame_interval();
        let mut clock = LoopClock::new(self.config.loop_duration);

        self.task = Some(handle.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                let tick = ticker.tick().await;
                let mut guard = slot.lock();
                let Some(on_frame) = guard.as_mut() else {
                    break;
                };
                let t = clock.sample(tick.into_std());
                trace!(t, "Frame");
                on_frame(t);
                slot.frames.fetch_add(1, Ordering::AcqRel);
            }
            debug!("Frame task finished");
        }));

        info!(fps = self.config.fps, loop_ms = self.config.loop_duration.as_millis() as u64, "Animation started");
        Ok(())
    }

    fn stop(&mut self) {
        let was_running = self.slot.lock().take().is_some();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if was_running {
            info!(frames = self.frames(), "Animation stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn recorder() -> (Arc<Mutex<Vec<f64>>>, FrameCallback) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, Box::new(move |t| sink.lock().unwrap().push(t)))
    }

    #[test]
    fn test_config_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.fps, 30);
        assert_eq!(config.loop_duration, Duration::from_secs(2));
        assert!((config.frame_interval().as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_from_render_config() {
        let render = RenderConfig::default().with_fps(60).with_loop_seconds(1.5);
        let config = SchedulerConfig::from(&render);
        assert_eq!(config.fps, 60);
        assert_eq!(config.loop_duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_manual_scheduler_frames() {
        let (seen, on_frame) = recorder();
        let mut scheduler = ManualScheduler::default();
        let base = Instant::now();

        assert_eq!(scheduler.tick(base), None);
        scheduler.start(on_frame).unwrap();
        assert!(scheduler.is_running());

        scheduler.tick(base);
        scheduler.tick(base + Duration::from_millis(1000));
        scheduler.tick(base + Duration::from_millis(2500));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], 0.0);
        assert!((seen[1] - 0.5).abs() < 1e-9);
        assert!((seen[2] - 0.25).abs() < 1e-9);
        assert_eq!(scheduler.frames(), 3);
    }

    #[test]
    fn test_manual_scheduler_stop() {
        let (seen, on_frame) = recorder();
        let mut scheduler = ManualScheduler::default();
        scheduler.start(on_frame).unwrap();

        let base = Instant::now();
        scheduler.tick(base);
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.tick(base + Duration::from_millis(100)), None);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_manual_restart_resets_origin() {
        let mut scheduler = ManualScheduler::default();
        let base = Instant::now();

        scheduler.start(Box::new(|_| {})).unwrap();
        scheduler.tick(base);
        scheduler.stop();

        scheduler.start(Box::new(|_| {})).unwrap();
        assert_eq!(scheduler.tick(base + Duration::from_millis(700)), Some(0.0));
    }

    #[test]
    fn test_double_start_is_error() {
        let mut scheduler = ManualScheduler::default();
        scheduler.start(Box::new(|_| {})).unwrap();
        assert!(matches!(
            scheduler.start(Box::new(|_| {})),
            Err(SchedulerError::AlreadyRunning)
        ));
    }

    #[test]
    fn test_tokio_scheduler_needs_runtime() {
        let mut scheduler = TokioScheduler::default();
        assert!(matches!(
            scheduler.start(Box::new(|_| {})),
            Err(SchedulerError::NoRuntime)
        ));
        assert!(!scheduler.is_running());
    }

    #[tokio::test]
    async fn test_tokio_scheduler_delivers_frames() {
        let (seen, on_frame) = recorder();
        let mut scheduler = TokioScheduler::new(SchedulerConfig {
            fps: 100,
            ..Default::default()
        });

        scheduler.start(on_frame).unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        scheduler.stop();

        let seen = seen.lock().unwrap();
        assert!(seen.len() >= 3, "only {} frames", seen.len());
        assert_eq!(seen[0], 0.0);
        assert!(seen.iter().all(|t| (0.0..1.0).contains(t)));
        assert!(seen.windows(2).all(|w| w[1] >= w[0]));
    }

    #[tokio::test]
    async fn test_no_frames_after_stop() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut scheduler = TokioScheduler::new(SchedulerConfig {
            fps: 200,
            ..Default::default()
        });

        scheduler
            .start(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        scheduler.stop();
        assert!(!scheduler.is_running());

        let stopped_at = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), stopped_at);
    }

    #[tokio::test]
    async fn test_drop_stops_frames() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        {
            let mut scheduler = TokioScheduler::new(SchedulerConfig {
                fps: 200,
                ..Default::default()
            });
            scheduler
                .start(Box::new(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }))
                .unwrap();
            tokio::time::sleep(Duration::from_millis(30)).await;
        }

        let dropped_at = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), dropped_at);
    }

    #[tokio::test]
    async fn test_restart_never_feeds_new_callback_from_old_clock() {
        let mut scheduler = TokioScheduler::new(SchedulerConfig {
            fps: 500,
            loop_duration: Duration::from_secs(10),
        });

        scheduler.start(Box::new(|_| {})).unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        for _ in 0..20 {
            let (seen, on_frame) = recorder();
            scheduler.stop();
            scheduler.start(on_frame).unwrap();
            tokio::time::sleep(Duration::from_millis(10)).await;
            scheduler.stop();

            // The first frame of every run starts the new loop at 0
            let seen = seen.lock().unwrap();
            if let Some(first) = seen.first() {
                assert_eq!(*first, 0.0);
            }
            assert!(seen.iter().all(|t| *t < 0.1), "{seen:?}");
        }
    }

    #[tokio::test]
    async fn test_independent_schedulers() {
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();
        let mut a = TokioScheduler::new(SchedulerConfig {
            fps: 100,
            ..Default::default()
        });
        let mut b = TokioScheduler::new(SchedulerConfig {
            fps: 100,
            loop_duration: Duration::from_millis(50),
        });

        a.start(on_first).unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        b.start(on_second).unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        a.stop();

        // b started later with its own origin
        assert_eq!(second.lock().unwrap()[0], 0.0);
        assert!(!first.lock().unwrap().is_empty());
        assert!(b.is_running());
        b.stop();
    }
}
