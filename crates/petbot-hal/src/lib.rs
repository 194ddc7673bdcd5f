//! `petbot-hal` – Capability seams to the robot's external subsystems
//!
//! Behaviours never talk to hardware or to the proprietary robot subsystems
//! directly; they hold trait-object handles obtained at activation and only
//! ever call through the traits defined here, so implementations can be
//! swapped without touching behaviour logic.
//!
//! # Modules
//!
//! - [`robot`] – [`RobotInterface`][robot::RobotInterface]: fresh infrared
//!   distance snapshots, one sequence per poll.
//! - [`emotion`] – [`EmotionModule`][emotion::EmotionModule]: drives the
//!   robot's face, including temporally-bounded overrides whose timing is
//!   owned entirely by the external subsystem.
//! - [`sound`] – [`SoundModule`][sound::SoundModule]: plays named emotion
//!   sound effects.
//! - [`speech`] – [`SpeechModule`][speech::SpeechModule]: text-to-speech.
//! - [`capabilities`] – [`Capabilities`][capabilities::Capabilities]: the
//!   resolved handle bundle injected into a behaviour, built through a
//!   [`CapabilityBuilder`][capabilities::CapabilityBuilder] that fails with
//!   a typed error when a required handle is absent.
//! - [`sim`] – recording simulated implementations for headless tests and
//!   demos; no physical robot required.

pub mod capabilities;
pub mod emotion;
pub mod robot;
pub mod sim;
pub mod sound;
pub mod speech;

pub use capabilities::{Capabilities, CapabilityBuilder};
pub use emotion::EmotionModule;
pub use robot::RobotInterface;
pub use sim::{CallLog, EmotionCall, SimCapabilities, SimHandles};
pub use sound::SoundModule;
pub use speech::SpeechModule;
