use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Faces the robot can display on its screen.
///
/// The external emotion subsystem owns the rendering and any timed reversion;
/// this crate only names the states that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Neutral resting face.
    #[default]
    Normal,
    Happy,
    Laughing,
    Sad,
    Angry,
    Surprised,
}

/// Named emotion sound effects the external sound subsystem can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Short complaint, played when the robot is tapped.
    Ouch,
    /// Contented purr, played when the robot is flung/stroked fast.
    Purr,
    /// Irritated growl, played when an obstacle gets too close.
    Angry,
    Approve,
    Disapprove,
}

/// Screen-relative direction of a moving touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A touch gesture recognised by the external touch subsystem.
///
/// Delivered at most once to the subscribed behaviour and never retained.
/// `Touch` and `Caress` are recognised but deliberately unhandled by the
/// example behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gesture", content = "payload")]
pub enum TouchGesture {
    /// A quick tap at screen coordinates (x, y).
    Tap { x: i32, y: i32 },
    /// A sustained touch at screen coordinates (x, y).
    Touch { x: i32, y: i32 },
    /// A fast swipe across the screen.
    Fling {
        direction: GestureDirection,
        angle_deg: f64,
        duration_ms: u64,
        distance: f64,
    },
    /// A slow stroke in one direction.
    Caress { direction: GestureDirection },
}

/// One infrared distance sample.
///
/// A poll of the robot interface returns a fresh sequence of these; readings
/// are classified and discarded, never kept between ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrReading {
    /// Stable sensor identifier, e.g. `"front_c"` or `"back_l"`.
    pub sensor: String,
    /// Measured distance in raw sensor units (larger is farther).
    pub distance: u32,
}

impl IrReading {
    /// Convenience constructor used heavily by tests and the demo.
    pub fn new(sensor: impl Into<String>, distance: u32) -> Self {
        Self {
            sensor: sensor.into(),
            distance,
        }
    }
}

/// Obstacle classification derived from the most recent IR poll.
///
/// Owned exclusively by the behaviour instance and mutated only by its
/// periodic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityState {
    /// No obstacle within the threshold.
    #[default]
    Normal,
    /// At least one sensor reports an obstacle below the threshold.
    TooClose,
}

/// The external capabilities a behaviour is wired to at activation.
///
/// Used to name the missing handle when capability resolution fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    RobotInterface,
    Emotion,
    Speech,
    Sound,
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapabilityKind::RobotInterface => write!(f, "robot-interface"),
            CapabilityKind::Emotion => write!(f, "emotion"),
            CapabilityKind::Speech => write!(f, "speech"),
            CapabilityKind::Sound => write!(f, "sound"),
        }
    }
}

/// Errors surfaced by behaviour activation and host lifecycle management.
///
/// External capability calls themselves are fire-and-forget and infallible;
/// the only failure path owned by this code is capability resolution at
/// start-up, plus host-level lifecycle misuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    #[error("required capability '{0}' is unavailable")]
    MissingCapability(CapabilityKind),

    #[error("behaviour '{module}' lifecycle error: {details}")]
    InvalidLifecycle { module: String, details: String },
}
