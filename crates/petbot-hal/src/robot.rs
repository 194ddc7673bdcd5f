//! `RobotInterface` trait – infrared distance sensing.
//!
//! The low-level robot base exposes a ring of infrared sensors. Behaviours
//! poll it on their periodic tick and classify the returned snapshot; they
//! never cache readings between ticks.

use petbot_types::IrReading;

/// Handle to the low-level robot base.
///
/// Reads are assumed to always succeed; a sensor that has nothing to report
/// is simply absent from the returned sequence.
pub trait RobotInterface: Send + Sync {
    /// Return a fresh snapshot of the most recent reading from every
    /// infrared sensor. The order of the sequence is unspecified.
    fn latest_ir_readings(&self) -> Vec<IrReading>;
}
