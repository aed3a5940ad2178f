//! Drivetrain goal/input/output/status topics.

use static_assertions::const_assert_eq;

/// Teleop drive command from the operator interface.
///
/// Size: 24 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct DrivetrainGoal {
    /// Forward throttle, -1..1.
    pub throttle: f64,
    /// Steering wheel position, -1..1.
    pub steering: f64,
    /// Quick-turn (pivot) mode (0=no, 1=yes).
    pub quick_turn: u8,
    /// Padding.
    pub _pad: [u8; 7],
}

const_assert_eq!(core::mem::size_of::<DrivetrainGoal>(), 24);

/// Sensor readings consumed by the drivetrain loop.
///
/// Size: 24 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct DrivetrainInput {
    /// Left side encoder position [m].
    pub left_encoder: f64,
    /// Right side encoder position [m].
    pub right_encoder: f64,
    /// Gyro heading [rad].
    pub gyro_angle: f64,
}

const_assert_eq!(core::mem::size_of::<DrivetrainInput>(), 24);

/// Actuator commands produced by the drivetrain loop.
///
/// Size: 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct DrivetrainOutput {
    /// Left side voltage command [V].
    pub left_voltage: f64,
    /// Right side voltage command [V].
    pub right_voltage: f64,
}

const_assert_eq!(core::mem::size_of::<DrivetrainOutput>(), 16);

/// Observer estimates published by the drivetrain loop.
///
/// Size: 40 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct DrivetrainStatus {
    /// Estimated left position [m].
    pub estimated_left_position: f64,
    /// Estimated left velocity [m/s].
    pub estimated_left_velocity: f64,
    /// Estimated right position [m].
    pub estimated_right_position: f64,
    /// Estimated right velocity [m/s].
    pub estimated_right_velocity: f64,
    /// Estimated heading [rad].
    pub heading: f64,
}

const_assert_eq!(core::mem::size_of::<DrivetrainStatus>(), 40);
