//! [`Capabilities`] – the resolved handle bundle injected into a behaviour.
//!
//! The original framework resolved these by capability type from a runtime
//! module registry; here the dependency set is explicit in a signature.
//! Resolution failure is still a first-class activation error: building a
//! bundle with a required handle absent yields
//! [`BotError::MissingCapability`] naming the empty slot, and the host
//! propagates it unchanged.
//!
//! # Example
//!
//! ```
//! use petbot_hal::CapabilityBuilder;
//! use petbot_types::{BotError, CapabilityKind};
//!
//! // Nothing wired: fails on the first missing slot.
//! let err = CapabilityBuilder::new().build().unwrap_err();
//! assert_eq!(err, BotError::MissingCapability(CapabilityKind::RobotInterface));
//! ```

use petbot_types::{BotError, CapabilityKind};
use tracing::debug;

use crate::emotion::EmotionModule;
use crate::robot::RobotInterface;
use crate::sound::SoundModule;
use crate::speech::SpeechModule;

/// The external capability handles a behaviour holds for its lifetime.
///
/// Fields are public so the owning behaviour can call through them without
/// accessor boilerplate; the bundle itself is immutable once built (handles
/// are only ever replaced by rebuilding).
pub struct Capabilities {
    pub robot: Box<dyn RobotInterface>,
    pub emotion: Box<dyn EmotionModule>,
    pub speech: Box<dyn SpeechModule>,
    pub sound: Box<dyn SoundModule>,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The handles are opaque; only their presence is meaningful.
        f.debug_struct("Capabilities")
            .field("robot", &"<handle>")
            .field("emotion", &"<handle>")
            .field("speech", &"<handle>")
            .field("sound", &"<handle>")
            .finish()
    }
}

/// Assembles a [`Capabilities`] bundle handle by handle.
///
/// Every slot is required. [`build`][Self::build] reports the first absent
/// slot in declaration order (robot interface, emotion, speech, sound).
#[derive(Default)]
pub struct CapabilityBuilder {
    robot: Option<Box<dyn RobotInterface>>,
    emotion: Option<Box<dyn EmotionModule>>,
    speech: Option<Box<dyn SpeechModule>>,
    sound: Option<Box<dyn SoundModule>>,
}

impl CapabilityBuilder {
    /// Create a builder with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire the robot base interface.
    pub fn with_robot(mut self, robot: Box<dyn RobotInterface>) -> Self {
        self.robot = Some(robot);
        self
    }

    /// Wire the emotion (face) subsystem.
    pub fn with_emotion(mut self, emotion: Box<dyn EmotionModule>) -> Self {
        self.emotion = Some(emotion);
        self
    }

    /// Wire the text-to-speech subsystem.
    pub fn with_speech(mut self, speech: Box<dyn SpeechModule>) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Wire the sound-effect subsystem.
    pub fn with_sound(mut self, sound: Box<dyn SoundModule>) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Consume the builder and return the resolved bundle.
    ///
    /// # Errors
    ///
    /// [`BotError::MissingCapability`] naming the first empty slot.
    pub fn build(self) -> Result<Capabilities, BotError> {
        let robot = self
            .robot
            .ok_or(BotError::MissingCapability(CapabilityKind::RobotInterface))?;
        let emotion = self
            .emotion
            .ok_or(BotError::MissingCapability(CapabilityKind::Emotion))?;
        let speech = self
            .speech
            .ok_or(BotError::MissingCapability(CapabilityKind::Speech))?;
        let sound = self
            .sound
            .ok_or(BotError::MissingCapability(CapabilityKind::Sound))?;

        debug!("capability bundle resolved");
        Ok(Capabilities {
            robot,
            emotion,
            speech,
            sound,
        })
    }
}
