//! `petbot-behaviour` – Behaviour modules and their host-side harness
//!
//! A behaviour module is a unit of robot logic with a start/stop lifecycle
//! and two externally-driven entry points: `on_gesture` for touch events and
//! `on_tick` for the periodic poll. The module itself owns no thread and no
//! timer; whoever hosts it decides when the entry points run.
//!
//! # Modules
//!
//! - [`behaviour`] – [`Behaviour`][behaviour::Behaviour]: the module
//!   contract (metadata, lifecycle, entry points, requested tick period).
//! - [`reactive`] – [`ReactiveBehaviour`][reactive::ReactiveBehaviour]:
//!   the example module. Reacts to taps and flings with sounds and bounded
//!   emotion overrides, and watches the infrared ring for obstacles,
//!   flipping the face between normal and angry on proximity transitions.
//! - [`host`] – [`BehaviourHost`][host::BehaviourHost]: synchronous harness
//!   standing in for the external framework's call sites. Owns the
//!   active/inactive lifecycle flag, clamps the requested tick period to the
//!   allowed minimum, and drops gesture deliveries once the module is
//!   stopped.

pub mod behaviour;
pub mod host;
pub mod reactive;

pub use behaviour::{Behaviour, DEFAULT_TICK_PERIOD, MIN_TICK_PERIOD};
pub use host::BehaviourHost;
pub use reactive::ReactiveBehaviour;
