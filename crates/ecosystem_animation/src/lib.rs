//! Ecosystem Motion System
//!
//! Motion preference resolution and the timing primitives the theme engine
//! needs.
//!
//! # Features
//!
//! - **Motion preference**: combines the 0-10 intensity with the system
//!   reduced-motion flag into one `{scale, should_animate}` contract
//! - **Reduced-motion signal**: a live, subscribable mirror of the OS
//!   accessibility setting
//! - **Timers**: cancellable one-shot timers over an injectable clock

pub mod motion;
pub mod reduced_motion;
pub mod timer;

pub use motion::{
    MotionPreference, MOTION_DEFAULT, MOTION_MAX, MOTION_MIN, MOTION_NEUTRAL,
};
pub use reduced_motion::{
    detect_system_reduced_motion, ReducedMotionSignal, ReducedMotionSubscription,
    REDUCED_MOTION_ENV,
};
pub use timer::{Clock, ManualClock, SystemClock, TimerId, TimerQueue};
