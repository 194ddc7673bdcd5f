//! `EmotionModule` trait – the robot's face.
//!
//! Behaviours request an emotion; the external subsystem owns rendering and
//! all timing. In particular the bounded reversion of
//! [`set_temporary`][EmotionModule::set_temporary] is scheduled by the
//! subsystem, never by the caller.

use std::time::Duration;

use petbot_types::Emotion;

/// Handle to the emotion (face) subsystem.
///
/// All calls are fire-and-forget: delivery guarantees belong to the external
/// subsystem and no call here can fail.
pub trait EmotionModule: Send + Sync {
    /// Display `emotion` until further notice.
    fn set_current(&mut self, emotion: Emotion);

    /// Display `emotion` for `duration`, then revert to `revert_to`.
    ///
    /// The reversion timer is owned by the external subsystem; a later
    /// [`set_current`][Self::set_current] supersedes any pending reversion.
    fn set_temporary(&mut self, emotion: Emotion, duration: Duration, revert_to: Emotion);
}
