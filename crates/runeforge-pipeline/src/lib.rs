//! Runeforge Pipeline - animation driver
//!
//! Skill effects are functions of a normalized loop time `t` in `[0, 1)`.
//! This crate turns wall-clock time into that `t` and redraws a surface on
//! every frame:
//!
//! ```text
//! Instant → LoopClock → t → FrameScheduler callback → SkillAnimation::draw
//! ```
//!
//! [`ManualScheduler`] is advanced with explicit timestamps; [`TokioScheduler`]
//! ticks on a tokio interval until stopped or dropped.

pub mod animation;
pub mod clock;
pub mod scheduler;

// Re-export commonly used types
pub use animation::SkillAnimation;
pub use clock::{loop_phase, LoopClock, DEFAULT_LOOP};
pub use scheduler::{
    FrameCallback, FrameScheduler, ManualScheduler, SchedulerConfig, SchedulerError,
    TokioScheduler,
};
