//! Linear feedback law with actuator saturation.

use nalgebra::{SMatrix, SVector};

use crate::error::GainError;

/// Fixed feedback gain plus componentwise command saturation:
///
/// ```text
/// u = clamp(K (r - x_hat), u_min, u_max)
/// ```
///
/// Saturation is the terminal step; no command leaves the controller
/// outside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSpaceController<const NS: usize, const NI: usize> {
    k: SMatrix<f64, NI, NS>,
    u_min: SVector<f64, NI>,
    u_max: SVector<f64, NI>,
}

impl<const NS: usize, const NI: usize> StateSpaceController<NS, NI> {
    /// Create a controller. Fails if any saturation bound pair is
    /// inverted; a controller that cannot saturate correctly must not run.
    pub fn new(
        k: SMatrix<f64, NI, NS>,
        u_min: SVector<f64, NI>,
        u_max: SVector<f64, NI>,
    ) -> Result<Self, GainError> {
        for i in 0..NI {
            if u_min[i] > u_max[i] {
                return Err(GainError::Bounds {
                    index: i,
                    min: u_min[i],
                    max: u_max[i],
                });
            }
        }
        Ok(Self { k, u_min, u_max })
    }

    /// Compute the saturated command for the current estimate and
    /// reference.
    pub fn update(&self, x_hat: &SVector<f64, NS>, r: &SVector<f64, NS>) -> SVector<f64, NI> {
        let mut u = self.k * (r - x_hat);
        for i in 0..NI {
            u[i] = u[i].clamp(self.u_min[i], self.u_max[i]);
        }
        u
    }

    /// Feedback gain matrix.
    #[inline]
    pub fn k(&self) -> &SMatrix<f64, NI, NS> {
        &self.k
    }

    /// Lower command bounds.
    #[inline]
    pub fn u_min(&self) -> &SVector<f64, NI> {
        &self.u_min
    }

    /// Upper command bounds.
    #[inline]
    pub fn u_max(&self) -> &SVector<f64, NI> {
        &self.u_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix1x2, Vector1, Vector2};

    fn twelve_volt_controller(kp: f64, kd: f64) -> StateSpaceController<2, 1> {
        StateSpaceController::new(
            Matrix1x2::new(kp, kd),
            Vector1::new(-12.0),
            Vector1::new(12.0),
        )
        .unwrap()
    }

    #[test]
    fn unclamped_command_passes_through() {
        let controller = twelve_volt_controller(10.0, 1.0);
        let u = controller.update(&Vector2::new(0.0, 0.0), &Vector2::new(0.5, 0.0));
        assert!((u[0] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn saturation_clamps_to_exact_bound() {
        let controller = twelve_volt_controller(80.0, 8.0);

        // Large positive error saturates high.
        let high = controller.update(&Vector2::new(0.0, 0.0), &Vector2::new(10.0, 0.0));
        assert_eq!(high[0], 12.0);

        // Large negative error saturates low.
        let low = controller.update(&Vector2::new(10.0, 0.0), &Vector2::new(0.0, 0.0));
        assert_eq!(low[0], -12.0);
    }

    #[test]
    fn componentwise_saturation() {
        let controller = StateSpaceController::<2, 2>::new(
            nalgebra::Matrix2::new(100.0, 0.0, 0.0, 0.1),
            Vector2::new(-12.0, -1.0),
            Vector2::new(12.0, 1.0),
        )
        .unwrap();

        let u = controller.update(&Vector2::new(0.0, 0.0), &Vector2::new(1.0, 1.0));
        assert_eq!(u[0], 12.0); // saturated
        assert!((u[1] - 0.1).abs() < 1e-12); // untouched
    }

    #[test]
    fn inverted_bounds_fail_construction() {
        let result = StateSpaceController::<2, 1>::new(
            Matrix1x2::new(1.0, 0.0),
            Vector1::new(5.0),
            Vector1::new(-5.0),
        );
        assert_eq!(
            result.unwrap_err(),
            GainError::Bounds {
                index: 0,
                min: 5.0,
                max: -5.0
            }
        );
    }
}
