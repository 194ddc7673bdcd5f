//! `SpeechModule` trait – text-to-speech.
//!
//! The example behaviour acquires this handle but never speaks; the seam
//! exists so behaviours that do talk can be wired the same way.

/// Handle to the text-to-speech subsystem.
pub trait SpeechModule: Send + Sync {
    /// Speak `text` aloud. Fire-and-forget.
    fn say(&mut self, text: &str);
}
