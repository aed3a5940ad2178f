//! One-tick feedback loop for a closed-loop mechanism.

use nalgebra::SVector;

use crate::controller::StateSpaceController;
use crate::observer::StateSpaceObserver;

/// Build a full state reference from a position goal.
///
/// Components the caller does not specify are zero, so a position goal
/// implies a zero velocity reference.
#[inline]
pub fn position_reference<const NS: usize>(goal: f64) -> SVector<f64, NS> {
    let mut r = SVector::zeros();
    r[0] = goal;
    r
}

/// Controller + observer pair ticked once per period by its owning
/// control loop.
///
/// The tick computes the saturated command from the current estimate,
/// then advances the estimate with that command and the new measurement:
/// the command a mechanism applies is always derived from the estimate
/// available at the start of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackLoop<const NS: usize, const NI: usize, const NO: usize> {
    controller: StateSpaceController<NS, NI>,
    observer: StateSpaceObserver<NS, NI, NO>,
}

impl<const NS: usize, const NI: usize, const NO: usize> FeedbackLoop<NS, NI, NO> {
    /// Pair a controller with an observer.
    pub fn new(
        controller: StateSpaceController<NS, NI>,
        observer: StateSpaceObserver<NS, NI, NO>,
    ) -> Self {
        Self { controller, observer }
    }

    /// Run one control tick: returns the command to apply this period.
    pub fn tick(&mut self, r: &SVector<f64, NS>, y: &SVector<f64, NO>) -> SVector<f64, NI> {
        let u = self.controller.update(self.observer.x_hat(), r);
        self.observer.update(&u, y);
        u
    }

    /// Current state estimate (updated by the last tick).
    #[inline]
    pub fn x_hat(&self) -> &SVector<f64, NS> {
        self.observer.x_hat()
    }

    /// Overwrite the state estimate, e.g. after homing against a hard
    /// stop or an absolute sensor.
    #[inline]
    pub fn set_state(&mut self, x: SVector<f64, NS>) {
        self.observer.set_state(x);
    }

    /// The feedback controller.
    #[inline]
    pub fn controller(&self) -> &StateSpaceController<NS, NI> {
        &self.controller
    }

    /// The state observer.
    #[inline]
    pub fn observer(&self) -> &StateSpaceObserver<NS, NI, NO> {
        &self.observer
    }
}
