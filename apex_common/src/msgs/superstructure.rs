//! Superstructure (intake + shooter) goal/input/output/status topics.

use static_assertions::const_assert_eq;

/// Ground intake mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum IntakeMode {
    /// Rollers stopped.
    #[default]
    Idle = 0,
    /// Rollers pulling game pieces in.
    Intake = 1,
    /// Rollers reversed.
    Outtake = 2,
    /// Rollers agitating the hopper.
    Agitate = 3,
}

impl IntakeMode {
    /// Convert from raw `u8` value. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Idle),
            1 => Some(Self::Intake),
            2 => Some(Self::Outtake),
            3 => Some(Self::Agitate),
            _ => None,
        }
    }
}

/// Shooter wheel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ShooterMode {
    /// Wheel stopped.
    #[default]
    Idle = 0,
    /// Wheel spinning up to speed, feed closed.
    Spinup = 1,
    /// Wheel at speed, feeding.
    Shoot = 2,
}

impl ShooterMode {
    /// Convert from raw `u8` value. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Idle),
            1 => Some(Self::Spinup),
            2 => Some(Self::Shoot),
            _ => None,
        }
    }
}

/// Superstructure goal from the operator interface.
///
/// Size: 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct SuperstructureGoal {
    /// Requested shooter speed [rad/s].
    pub shooter_speed: f64,
    /// Intake mode (IntakeMode discriminant).
    pub intake_mode: u8,
    /// Shooter mode (ShooterMode discriminant).
    pub shooter_mode: u8,
    /// Score the held gear (0=no, 1=yes).
    pub score_gear: u8,
    /// Climb request (0=no, 1=yes).
    pub climb: u8,
    /// Padding.
    pub _pad: [u8; 4],
}

const_assert_eq!(core::mem::size_of::<SuperstructureGoal>(), 16);

impl SuperstructureGoal {
    /// Decoded intake mode. Invalid discriminants read as `Idle`.
    #[inline]
    pub fn intake(&self) -> IntakeMode {
        IntakeMode::from_u8(self.intake_mode).unwrap_or(IntakeMode::Idle)
    }

    /// Decoded shooter mode. Invalid discriminants read as `Idle`.
    #[inline]
    pub fn shooter(&self) -> ShooterMode {
        ShooterMode::from_u8(self.shooter_mode).unwrap_or(ShooterMode::Idle)
    }
}

/// Sensor readings consumed by the superstructure loop.
///
/// Size: 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct SuperstructureInput {
    /// Shooter encoder position [rad].
    pub shooter_encoder: f64,
    /// Ball present at the feed sensor (0=no, 1=yes).
    pub ball_sensor: u8,
    /// Padding.
    pub _pad: [u8; 7],
}

const_assert_eq!(core::mem::size_of::<SuperstructureInput>(), 16);

/// Actuator commands produced by the superstructure loop.
///
/// Size: 24 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct SuperstructureOutput {
    /// Shooter wheel voltage command [V].
    pub shooter_voltage: f64,
    /// Intake roller voltage command [V].
    pub intake_voltage: f64,
    /// Gear release solenoid (0=hold, 1=release).
    pub gear_release: u8,
    /// Padding.
    pub _pad: [u8; 7],
}

const_assert_eq!(core::mem::size_of::<SuperstructureOutput>(), 24);

/// Observer estimates published by the superstructure loop.
///
/// Size: 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct SuperstructureStatus {
    /// Estimated shooter wheel velocity [rad/s].
    pub shooter_velocity: f64,
    /// Wheel within shooting tolerance of the goal speed (0=no, 1=yes).
    pub at_speed: u8,
    /// Current shooter mode (ShooterMode discriminant).
    pub shooter_mode: u8,
    /// Padding.
    pub _pad: [u8; 6],
}

const_assert_eq!(core::mem::size_of::<SuperstructureStatus>(), 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_mode_roundtrip() {
        for val in 0..=3u8 {
            assert_eq!(IntakeMode::from_u8(val).unwrap() as u8, val);
        }
        assert!(IntakeMode::from_u8(4).is_none());
    }

    #[test]
    fn shooter_mode_roundtrip() {
        for val in 0..=2u8 {
            assert_eq!(ShooterMode::from_u8(val).unwrap() as u8, val);
        }
        assert!(ShooterMode::from_u8(3).is_none());
    }

    #[test]
    fn goal_mode_accessors() {
        let mut goal = SuperstructureGoal::default();
        assert_eq!(goal.intake(), IntakeMode::Idle);
        assert_eq!(goal.shooter(), ShooterMode::Idle);

        goal.intake_mode = IntakeMode::Agitate as u8;
        goal.shooter_mode = ShooterMode::Spinup as u8;
        assert_eq!(goal.intake(), IntakeMode::Agitate);
        assert_eq!(goal.shooter(), ShooterMode::Spinup);

        goal.shooter_mode = 99;
        assert_eq!(goal.shooter(), ShooterMode::Idle);
    }
}
