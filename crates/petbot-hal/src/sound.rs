//! `SoundModule` trait – named emotion sound effects.

use petbot_types::SoundEffect;

/// Handle to the sound subsystem.
///
/// Playback is fire-and-forget; overlapping requests are resolved by the
/// external subsystem.
pub trait SoundModule: Send + Sync {
    /// Play the named effect once.
    fn play(&mut self, effect: SoundEffect);
}
