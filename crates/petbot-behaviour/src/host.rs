//! [`BehaviourHost`] – synchronous stand-in for the framework call sites.
//!
//! The real robot framework owns the event-dispatch thread and the periodic
//! timer. This host reproduces only their contract: it forwards gestures and
//! ticks to the module while it is active, clamps the module's requested
//! tick period to the allowed minimum, and guarantees that nothing is
//! delivered after `stop` — the module's touch subscription ends with its
//! lifecycle.
//!
//! The host itself holds no thread or timer; its owner calls
//! [`tick`][BehaviourHost::tick] and [`deliver`][BehaviourHost::deliver].

use std::time::Duration;

use petbot_types::{BotError, TouchGesture};
use tracing::{info, warn};

use crate::behaviour::{Behaviour, MIN_TICK_PERIOD};

/// Drives one behaviour module through its lifecycle and entry points.
pub struct BehaviourHost<B: Behaviour> {
    module: B,
    active: bool,
    period: Duration,
}

impl<B: Behaviour> BehaviourHost<B> {
    /// Wrap `module`, leaving it inactive until [`start`][Self::start].
    pub fn new(module: B) -> Self {
        Self {
            module,
            active: false,
            period: MIN_TICK_PERIOD,
        }
    }

    /// Activate the module and take its touch subscription.
    ///
    /// The module's requested tick period is clamped to [`MIN_TICK_PERIOD`].
    ///
    /// # Errors
    ///
    /// [`BotError::InvalidLifecycle`] when already active, or whatever the
    /// module's own `start` propagates (surfaced unchanged).
    pub fn start(&mut self) -> Result<(), BotError> {
        if self.active {
            return Err(BotError::InvalidLifecycle {
                module: self.module.name().to_string(),
                details: "start called while already active".to_string(),
            });
        }
        self.module.start()?;
        self.period = self.module.tick_period().max(MIN_TICK_PERIOD);
        self.active = true;
        info!(
            module = self.module.name(),
            version = self.module.version(),
            period_ms = self.period.as_millis() as u64,
            "behaviour activated"
        );
        Ok(())
    }

    /// Deactivate the module and release its touch subscription.
    ///
    /// # Errors
    ///
    /// [`BotError::InvalidLifecycle`] when not active.
    pub fn stop(&mut self) -> Result<(), BotError> {
        if !self.active {
            return Err(BotError::InvalidLifecycle {
                module: self.module.name().to_string(),
                details: "stop called while not active".to_string(),
            });
        }
        // Deliveries end before the module's own teardown runs.
        self.active = false;
        self.module.stop()?;
        info!(module = self.module.name(), "behaviour deactivated");
        Ok(())
    }

    /// Deliver one touch gesture to the module.
    ///
    /// Gestures arriving while the module is inactive are dropped, matching
    /// an unsubscribed listener.
    pub fn deliver(&mut self, gesture: TouchGesture) {
        if !self.active {
            warn!(module = self.module.name(), "gesture dropped: module inactive");
            return;
        }
        self.module.on_gesture(gesture);
    }

    /// Run one periodic step if the module is active.
    pub fn tick(&mut self) {
        if self.active {
            self.module.on_tick();
        }
    }

    /// The effective (clamped) tick period. Meaningful once started.
    pub fn tick_period(&self) -> Duration {
        self.period
    }

    /// Whether the module is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Borrow the hosted module, e.g. to inspect its state in tests.
    pub fn module(&self) -> &B {
        &self.module
    }
}
