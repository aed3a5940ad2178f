//! Robot-wide status and vision topics.

use static_assertions::const_assert_eq;

use crate::consts::PDP_CHANNELS;

/// Operating mode reported by the driver station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RobotMode {
    /// Outputs disabled.
    #[default]
    Disabled = 0,
    /// Autonomous routine running.
    Autonomous = 1,
    /// Operator control.
    Teleop = 2,
    /// Emergency stop.
    EStop = 3,
}

impl RobotMode {
    /// Convert from raw `u8` value. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Disabled),
            1 => Some(Self::Autonomous),
            2 => Some(Self::Teleop),
            3 => Some(Self::EStop),
            _ => None,
        }
    }
}

/// Driver-station snapshot, published once per update loop.
///
/// Size: 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct DriverStationStatus {
    /// Battery voltage [V].
    pub battery_voltage: f64,
    /// Operating mode (RobotMode discriminant).
    pub mode: u8,
    /// Brownout protection active (0=no, 1=yes).
    pub brownout: u8,
    /// Driver station connected (0=no, 1=yes).
    pub ds_attached: u8,
    /// Padding.
    pub _pad: [u8; 5],
}

const_assert_eq!(core::mem::size_of::<DriverStationStatus>(), 16);

impl DriverStationStatus {
    /// Decoded operating mode. Invalid discriminants read as `Disabled`.
    #[inline]
    pub fn mode(&self) -> RobotMode {
        RobotMode::from_u8(self.mode).unwrap_or(RobotMode::Disabled)
    }

    /// Set the operating mode field.
    #[inline]
    pub fn set_mode(&mut self, mode: RobotMode) {
        self.mode = mode as u8;
    }
}

/// Power-distribution panel snapshot.
///
/// Size: 144 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PdpStatus {
    /// Bus voltage [V].
    pub bus_voltage: f64,
    /// Total current draw [A].
    pub total_current: f64,
    /// Per-channel current draw [A].
    pub channel_current: [f64; PDP_CHANNELS],
}

const_assert_eq!(core::mem::size_of::<PdpStatus>(), 144);

impl Default for PdpStatus {
    fn default() -> Self {
        Self {
            bus_voltage: 0.0,
            total_current: 0.0,
            channel_current: [0.0; PDP_CHANNELS],
        }
    }
}

/// Goal sent to the vision alignment pipeline.
///
/// Size: 8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct VisionGoal {
    /// Request target alignment (0=no, 1=yes).
    pub should_align: u8,
    /// Padding.
    pub _pad: [u8; 7],
}

const_assert_eq!(core::mem::size_of::<VisionGoal>(), 8);

/// Status published by the vision alignment pipeline.
///
/// Size: 24 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct VisionStatus {
    /// Horizontal angle to target [rad].
    pub angle_offset: f64,
    /// Distance to target [m].
    pub target_distance: f64,
    /// Target visible this frame (0=no, 1=yes).
    pub has_target: u8,
    /// Robot aligned to target (0=no, 1=yes).
    pub aligned: u8,
    /// Padding.
    pub _pad: [u8; 6],
}

const_assert_eq!(core::mem::size_of::<VisionStatus>(), 24);
