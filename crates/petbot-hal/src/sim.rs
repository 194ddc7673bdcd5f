//! In-process simulated capabilities for headless tests and demos.
//!
//! [`SimCapabilities`] assembles a fully wired [`Capabilities`] bundle whose
//! members record every call into shared [`CallLog`]s, so a test can drive a
//! behaviour and then assert on exactly which external calls it made. The IR
//! interface serves a scripted sequence of reading frames, one per poll.
//!
//! # Example
//!
//! ```
//! use petbot_hal::sim::SimCapabilities;
//! use petbot_hal::{RobotInterface, SoundModule};
//! use petbot_types::{IrReading, SoundEffect};
//!
//! let (mut caps, handles) = SimCapabilities::new()
//!     .with_ir_frame(vec![IrReading::new("front_c", 900)])
//!     .build();
//!
//! caps.sound.play(SoundEffect::Purr);
//! assert_eq!(handles.sound.calls(), vec![SoundEffect::Purr]);
//! assert_eq!(caps.robot.latest_ir_readings()[0].distance, 900);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use petbot_types::{Emotion, IrReading, SoundEffect};
use tracing::debug;

use crate::capabilities::Capabilities;
use crate::emotion::EmotionModule;
use crate::robot::RobotInterface;
use crate::sound::SoundModule;
use crate::speech::SpeechModule;

// ────────────────────────────────────────────────────────────────────────────
// Call recording
// ────────────────────────────────────────────────────────────────────────────

/// Shared append-only record of calls made against a simulated capability.
///
/// Clones share the same underlying log; the sim keeps one clone, the test
/// keeps the other.
pub struct CallLog<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone> CallLog<T> {
    /// Append one call. Lock poisoning is unreachable in single-caller tests.
    fn record(&self, call: T) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(call);
    }

    /// Snapshot of every recorded call, in order.
    pub fn calls(&self) -> Vec<T> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One recorded call against the simulated emotion subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionCall {
    SetCurrent(Emotion),
    SetTemporary {
        emotion: Emotion,
        duration: Duration,
        revert_to: Emotion,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Simulated capability implementations
// ────────────────────────────────────────────────────────────────────────────

/// Simulated face: records requests, renders nothing, schedules nothing.
/// The timed reversion of `set_temporary` is the real subsystem's job and is
/// only recorded here.
pub struct SimEmotion {
    log: CallLog<EmotionCall>,
}

impl EmotionModule for SimEmotion {
    fn set_current(&mut self, emotion: Emotion) {
        debug!(?emotion, "sim emotion: set_current");
        self.log.record(EmotionCall::SetCurrent(emotion));
    }

    fn set_temporary(&mut self, emotion: Emotion, duration: Duration, revert_to: Emotion) {
        debug!(?emotion, ?duration, ?revert_to, "sim emotion: set_temporary");
        self.log.record(EmotionCall::SetTemporary {
            emotion,
            duration,
            revert_to,
        });
    }
}

/// Simulated speaker: records the effects it was asked to play.
pub struct SimSound {
    log: CallLog<SoundEffect>,
}

impl SoundModule for SimSound {
    fn play(&mut self, effect: SoundEffect) {
        debug!(?effect, "sim sound: play");
        self.log.record(effect);
    }
}

/// Simulated text-to-speech: records utterances.
pub struct SimSpeech {
    log: CallLog<String>,
}

impl SpeechModule for SimSpeech {
    fn say(&mut self, text: &str) {
        debug!(text, "sim speech: say");
        self.log.record(text.to_string());
    }
}

/// Simulated robot base serving a scripted sequence of IR frames.
///
/// Each poll consumes the next scripted frame; once the script is exhausted
/// the last frame repeats, mimicking sensors that keep reporting their most
/// recent value. With no script at all, polls return an empty snapshot.
pub struct SimIrSensors {
    script: Mutex<IrScript>,
}

struct IrScript {
    pending: VecDeque<Vec<IrReading>>,
    last: Vec<IrReading>,
}

impl RobotInterface for SimIrSensors {
    fn latest_ir_readings(&self) -> Vec<IrReading> {
        let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(frame) = script.pending.pop_front() {
            script.last = frame;
        }
        script.last.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Recorder handles kept by the test/demo after [`SimCapabilities::build`].
pub struct SimHandles {
    pub emotion: CallLog<EmotionCall>,
    pub sound: CallLog<SoundEffect>,
    pub speech: CallLog<String>,
}

/// Builder for a fully simulated [`Capabilities`] bundle.
#[derive(Default)]
pub struct SimCapabilities {
    frames: VecDeque<Vec<IrReading>>,
}

impl SimCapabilities {
    /// Create a builder with an empty IR script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one scripted IR frame, served on the next un-scripted poll.
    pub fn with_ir_frame(mut self, frame: Vec<IrReading>) -> Self {
        self.frames.push_back(frame);
        self
    }

    /// Append a whole scripted IR sequence in order.
    pub fn with_ir_script(mut self, frames: impl IntoIterator<Item = Vec<IrReading>>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Consume the builder and return the wired bundle plus the recorder
    /// handles the caller asserts on.
    pub fn build(self) -> (Capabilities, SimHandles) {
        let emotion_log = CallLog::default();
        let sound_log = CallLog::default();
        let speech_log = CallLog::default();

        let caps = Capabilities {
            robot: Box::new(SimIrSensors {
                script: Mutex::new(IrScript {
                    pending: self.frames,
                    last: Vec::new(),
                }),
            }),
            emotion: Box::new(SimEmotion {
                log: emotion_log.clone(),
            }),
            speech: Box::new(SimSpeech {
                log: speech_log.clone(),
            }),
            sound: Box::new(SimSound {
                log: sound_log.clone(),
            }),
        };

        (
            caps,
            SimHandles {
                emotion: emotion_log,
                sound: sound_log,
                speech: speech_log,
            },
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
