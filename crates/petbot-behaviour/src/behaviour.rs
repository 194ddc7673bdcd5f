//! [`Behaviour`] – the behaviour-module contract.
//!
//! A behaviour is driven entirely from outside: the host calls `start` once,
//! then `on_gesture`/`on_tick` as events arrive and the period elapses, then
//! `stop`. Entry points must not block or do long-running work; heavy
//! processing belongs on a thread the behaviour spawns itself.

use std::time::Duration;

use petbot_types::{BotError, TouchGesture};

/// Tick period used when a behaviour does not override
/// [`Behaviour::tick_period`].
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Smallest tick period a host will honour; shorter requests are clamped up.
pub const MIN_TICK_PERIOD: Duration = Duration::from_millis(10);

/// A unit of robot logic with a start/stop lifecycle, a touch-event entry
/// point, and a periodic tick.
pub trait Behaviour {
    /// Human-readable module name. Pure, constant.
    fn name(&self) -> &str;

    /// Module version string. Pure, constant.
    fn version(&self) -> &str;

    /// Activate the module.
    ///
    /// # Errors
    ///
    /// Propagates initialization failures unchanged; the host's module
    /// management decides what the user sees.
    fn start(&mut self) -> Result<(), BotError>;

    /// Deactivate the module, releasing anything `start` acquired.
    fn stop(&mut self) -> Result<(), BotError>;

    /// Handle one delivered touch gesture. Fire-and-forget, must not block.
    fn on_gesture(&mut self, gesture: TouchGesture);

    /// Run one periodic step. Invoked by the host at the effective period.
    fn on_tick(&mut self);

    /// The tick period this module would like to run at. The host clamps it
    /// to [`MIN_TICK_PERIOD`].
    fn tick_period(&self) -> Duration {
        DEFAULT_TICK_PERIOD
    }
}
