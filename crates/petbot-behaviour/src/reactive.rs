//! [`ReactiveBehaviour`] – the example touch/proximity behaviour.
//!
//! Two independent reactions share nothing but the capability handles:
//!
//! * **Touch**: a tap makes the robot complain (ouch sound + a short angry
//!   face), a fling makes it purr (purr sound + a long laughing face). Both
//!   faces revert to normal on a timer owned by the emotion subsystem.
//!   Sustained touches and caresses are recognised but deliberately inert.
//! * **Proximity**: every tick the infrared ring is polled and classified
//!   against a fixed distance threshold. Only transitions act: entering
//!   too-close plays the angry sound and sets the angry face, leaving it
//!   restores the normal face silently. While the classification is
//!   unchanged, a tick has no effect at all.

use std::time::Duration;

use petbot_hal::{Capabilities, EmotionModule, RobotInterface, SoundModule};
use petbot_types::{BotError, Emotion, IrReading, ProximityState, SoundEffect, TouchGesture};
use tracing::{debug, info};

use crate::behaviour::Behaviour;

/// An IR reading strictly below this distance counts as an obstacle.
/// A reading exactly at the threshold is still clear.
const PROXIMITY_THRESHOLD: u32 = 1000;

/// How long the angry face lingers after a tap before reverting.
const TAP_OVERRIDE: Duration = Duration::from_millis(1500);

/// How long the laughing face lingers after a fling before reverting.
const FLING_OVERRIDE: Duration = Duration::from_millis(15000);

/// Poll the IR ring ten times per second.
const TICK_PERIOD: Duration = Duration::from_millis(100);

/// The example behaviour module.
///
/// Construct it from an already-resolved [`Capabilities`] bundle and hand it
/// to a [`BehaviourHost`][crate::host::BehaviourHost]; the host drives every
/// entry point.
pub struct ReactiveBehaviour {
    caps: Capabilities,
    proximity: ProximityState,
}

impl ReactiveBehaviour {
    /// Create the module around its capability handles.
    ///
    /// The speech handle is part of the bundle but this behaviour never
    /// speaks.
    pub fn new(caps: Capabilities) -> Self {
        Self {
            caps,
            proximity: ProximityState::Normal,
        }
    }

    /// The classification derived from the most recent tick.
    pub fn proximity(&self) -> ProximityState {
        self.proximity
    }

    fn classify(readings: &[IrReading]) -> ProximityState {
        if readings.iter().any(|r| r.distance < PROXIMITY_THRESHOLD) {
            ProximityState::TooClose
        } else {
            ProximityState::Normal
        }
    }
}

impl Behaviour for ReactiveBehaviour {
    fn name(&self) -> &str {
        "reactive-touch"
    }

    fn version(&self) -> &str {
        "0.1"
    }

    fn start(&mut self) -> Result<(), BotError> {
        // Capability resolution already happened when the bundle was built;
        // activation only has to reset the poller's state.
        self.proximity = ProximityState::Normal;
        info!(module = self.name(), "behaviour started");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BotError> {
        info!(module = self.name(), "behaviour stopped");
        Ok(())
    }

    fn on_gesture(&mut self, gesture: TouchGesture) {
        match gesture {
            TouchGesture::Tap { x, y } => {
                debug!(x, y, "tap: complaining");
                self.caps.sound.play(SoundEffect::Ouch);
                self.caps
                    .emotion
                    .set_temporary(Emotion::Angry, TAP_OVERRIDE, Emotion::Normal);
            }
            TouchGesture::Fling { direction, .. } => {
                debug!(?direction, "fling: purring");
                self.caps.sound.play(SoundEffect::Purr);
                self.caps
                    .emotion
                    .set_temporary(Emotion::Laughing, FLING_OVERRIDE, Emotion::Normal);
            }
            // Recognised but intentionally inert.
            TouchGesture::Touch { .. } | TouchGesture::Caress { .. } => {}
        }
    }

    fn on_tick(&mut self) {
        let readings = self.caps.robot.latest_ir_readings();
        let new_state = Self::classify(&readings);

        if new_state == self.proximity {
            return;
        }
        self.proximity = new_state;

        match new_state {
            ProximityState::Normal => {
                info!("obstacle cleared");
                self.caps.emotion.set_current(Emotion::Normal);
            }
            ProximityState::TooClose => {
                info!("obstacle too close");
                self.caps.sound.play(SoundEffect::Angry);
                self.caps.emotion.set_current(Emotion::Angry);
            }
        }
    }

    fn tick_period(&self) -> Duration {
        TICK_PERIOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petbot_hal::sim::{EmotionCall, SimCapabilities, SimHandles};
    use petbot_types::{GestureDirection, IrReading};

    fn behaviour_with_script(
        frames: Vec<Vec<IrReading>>,
    ) -> (ReactiveBehaviour, SimHandles) {
        let (caps, handles) = SimCapabilities::new().with_ir_script(frames).build();
        let mut module = ReactiveBehaviour::new(caps);
        module.start().expect("start must succeed");
        (module, handles)
    }

    fn fling() -> TouchGesture {
        TouchGesture::Fling {
            direction: GestureDirection::Right,
            angle_deg: 12.0,
            duration_ms: 80,
            distance: 210.0,
        }
    }

    // ── Touch reactions ────────────────────────────────────────────────────

    #[test]
    fn tap_plays_ouch_and_requests_short_angry_override() {
        let (mut module, handles) = behaviour_with_script(vec![]);

        module.on_gesture(TouchGesture::Tap { x: 10, y: 20 });

        assert_eq!(handles.sound.calls(), vec![SoundEffect::Ouch]);
        assert_eq!(
            handles.emotion.calls(),
            vec![EmotionCall::SetTemporary {
                emotion: Emotion::Angry,
                duration: Duration::from_millis(1500),
                revert_to: Emotion::Normal,
            }]
        );
    }

    #[test]
    fn fling_plays_purr_and_requests_long_laughing_override() {
        let (mut module, handles) = behaviour_with_script(vec![]);

        module.on_gesture(fling());

        assert_eq!(handles.sound.calls(), vec![SoundEffect::Purr]);
        assert_eq!(
            handles.emotion.calls(),
            vec![EmotionCall::SetTemporary {
                emotion: Emotion::Laughing,
                duration: Duration::from_millis(15000),
                revert_to: Emotion::Normal,
            }]
        );
    }

    #[test]
    fn tap_reacts_identically_regardless_of_proximity_state() {
        // Drive the module into too-close first.
        let (mut module, handles) =
            behaviour_with_script(vec![vec![IrReading::new("front_c", 500)]]);
        module.on_tick();
        assert_eq!(module.proximity(), ProximityState::TooClose);

        module.on_gesture(TouchGesture::Tap { x: 0, y: 0 });

        // Exactly one ouch after the angry transition sound.
        assert_eq!(
            handles.sound.calls(),
            vec![SoundEffect::Angry, SoundEffect::Ouch]
        );
    }

    #[test]
    fn touch_and_caress_trigger_no_calls_at_all() {
        let (mut module, handles) = behaviour_with_script(vec![]);

        module.on_gesture(TouchGesture::Touch { x: 5, y: 5 });
        module.on_gesture(TouchGesture::Caress {
            direction: GestureDirection::Up,
        });

        assert!(handles.sound.is_empty());
        assert!(handles.emotion.is_empty());
        assert!(handles.speech.is_empty());
    }

    #[test]
    fn every_delivered_tap_fires_its_own_effects() {
        let (mut module, handles) = behaviour_with_script(vec![]);

        module.on_gesture(TouchGesture::Tap { x: 0, y: 0 });
        module.on_gesture(TouchGesture::Tap { x: 1, y: 1 });

        assert_eq!(handles.sound.len(), 2);
        assert_eq!(handles.emotion.len(), 2);
    }

    // ── Proximity poller ───────────────────────────────────────────────────

    #[test]
    fn transition_to_too_close_fires_exactly_once_per_run() {
        let (mut module, handles) = behaviour_with_script(vec![
            vec![IrReading::new("front_c", 900)],
            vec![IrReading::new("front_c", 950)],
            vec![IrReading::new("front_c", 800)],
        ]);

        module.on_tick();
        module.on_tick();
        module.on_tick();

        // One angry sound and one angry face for the whole contiguous run.
        assert_eq!(handles.sound.calls(), vec![SoundEffect::Angry]);
        assert_eq!(
            handles.emotion.calls(),
            vec![EmotionCall::SetCurrent(Emotion::Angry)]
        );
        assert_eq!(module.proximity(), ProximityState::TooClose);
    }

    #[test]
    fn all_clear_ticks_have_no_effect_from_initial_state() {
        let (mut module, handles) = behaviour_with_script(vec![
            vec![IrReading::new("front_c", 1200), IrReading::new("front_l", 1100)],
            vec![IrReading::new("front_c", 2000)],
        ]);

        module.on_tick();
        module.on_tick();

        assert!(handles.sound.is_empty());
        assert!(handles.emotion.is_empty());
        assert_eq!(module.proximity(), ProximityState::Normal);
    }

    #[test]
    fn returning_to_normal_sets_face_silently() {
        let (mut module, handles) = behaviour_with_script(vec![
            vec![IrReading::new("front_c", 900)],
            vec![IrReading::new("front_c", 1500)],
        ]);

        module.on_tick(); // → TooClose
        module.on_tick(); // → Normal

        assert_eq!(handles.sound.calls(), vec![SoundEffect::Angry]);
        assert_eq!(
            handles.emotion.calls(),
            vec![
                EmotionCall::SetCurrent(Emotion::Angry),
                EmotionCall::SetCurrent(Emotion::Normal),
            ]
        );
        assert_eq!(module.proximity(), ProximityState::Normal);
    }

    #[test]
    fn reading_exactly_at_threshold_is_clear() {
        let (mut module, handles) =
            behaviour_with_script(vec![vec![IrReading::new("front_c", 1000)]]);

        module.on_tick();

        assert!(handles.sound.is_empty());
        assert!(handles.emotion.is_empty());
        assert_eq!(module.proximity(), ProximityState::Normal);
    }

    #[test]
    fn one_close_sensor_among_many_is_enough() {
        let (mut module, _handles) = behaviour_with_script(vec![vec![
            IrReading::new("front_c", 4000),
            IrReading::new("front_l", 999),
            IrReading::new("back_c", 3000),
        ]]);

        module.on_tick();
        assert_eq!(module.proximity(), ProximityState::TooClose);
    }

    #[test]
    fn empty_snapshot_classifies_normal() {
        let (mut module, _handles) = behaviour_with_script(vec![vec![]]);
        module.on_tick();
        assert_eq!(module.proximity(), ProximityState::Normal);
    }

    #[test]
    fn obstacle_approach_and_retreat_scenario() {
        // [1200, 1100] → [900, 1100] → [950] → [1500]
        let (mut module, handles) = behaviour_with_script(vec![
            vec![IrReading::new("front_c", 1200), IrReading::new("front_l", 1100)],
            vec![IrReading::new("front_c", 900), IrReading::new("front_l", 1100)],
            vec![IrReading::new("front_c", 950)],
            vec![IrReading::new("front_c", 1500)],
        ]);

        module.on_tick(); // no change, no call
        assert!(handles.emotion.is_empty());

        module.on_tick(); // flips to TooClose
        assert_eq!(handles.sound.calls(), vec![SoundEffect::Angry]);
        assert_eq!(
            handles.emotion.calls(),
            vec![EmotionCall::SetCurrent(Emotion::Angry)]
        );

        module.on_tick(); // still TooClose, no calls
        assert_eq!(handles.sound.len(), 1);
        assert_eq!(handles.emotion.len(), 1);

        module.on_tick(); // flips to Normal, face only
        assert_eq!(handles.sound.calls(), vec![SoundEffect::Angry]);
        assert_eq!(
            handles.emotion.calls(),
            vec![
                EmotionCall::SetCurrent(Emotion::Angry),
                EmotionCall::SetCurrent(Emotion::Normal),
            ]
        );
    }

    // ── Lifecycle & metadata ───────────────────────────────────────────────

    #[test]
    fn metadata_is_constant() {
        let (module, _handles) = behaviour_with_script(vec![]);
        assert_eq!(module.name(), "reactive-touch");
        assert_eq!(module.version(), "0.1");
    }

    #[test]
    fn requests_a_100ms_tick_period() {
        let (module, _handles) = behaviour_with_script(vec![]);
        assert_eq!(module.tick_period(), Duration::from_millis(100));
    }

    #[test]
    fn restart_resets_proximity_state() {
        let (mut module, _handles) =
            behaviour_with_script(vec![vec![IrReading::new("front_c", 500)]]);
        module.on_tick();
        assert_eq!(module.proximity(), ProximityState::TooClose);

        module.stop().unwrap();
        module.start().unwrap();
        assert_eq!(module.proximity(), ProximityState::Normal);
    }

    #[test]
    fn hosted_module_hears_nothing_after_stop() {
        let (caps, handles) = SimCapabilities::new().build();
        let mut host = crate::host::BehaviourHost::new(ReactiveBehaviour::new(caps));
        host.start().unwrap();

        host.deliver(TouchGesture::Tap { x: 3, y: 4 });
        host.stop().unwrap();
        host.deliver(TouchGesture::Tap { x: 5, y: 6 });
        host.deliver(fling());

        // Only the pre-stop tap produced effects.
        assert_eq!(handles.sound.calls(), vec![SoundEffect::Ouch]);
        assert_eq!(handles.emotion.len(), 1);
    }

    #[test]
    fn speech_handle_is_never_used() {
        let (mut module, handles) =
            behaviour_with_script(vec![vec![IrReading::new("front_c", 500)]]);
        module.on_gesture(TouchGesture::Tap { x: 0, y: 0 });
        module.on_gesture(fling());
        module.on_tick();
        assert!(handles.speech.is_empty());
    }
}
