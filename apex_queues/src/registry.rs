//! Process-wide topic → queue binding.
//!
//! The set of topics is fixed at compile time: one queue per mechanism
//! goal/input/output/status channel plus the shared robot-wide signals.
//! Producers and consumers never pass queue references around; they
//! resolve a topic through [`QueueRegistry::instance`] and use the named
//! accessor.
//!
//! The registry is created once, on first access from any task, and lives
//! for the rest of the process. There is no reset: tests wanting a clean
//! view create fresh readers instead.

use std::sync::OnceLock;

use apex_common::consts::QUEUE_DEPTH;
use apex_common::msgs::drivetrain::{
    DrivetrainGoal, DrivetrainInput, DrivetrainOutput, DrivetrainStatus,
};
use apex_common::msgs::shared::{DriverStationStatus, PdpStatus, VisionGoal, VisionStatus};
use apex_common::msgs::superstructure::{
    SuperstructureGoal, SuperstructureInput, SuperstructureOutput, SuperstructureStatus,
};

use crate::payload::{Payload, Plain};
use crate::queue::MessageQueue;

// ─── Plain message markers ──────────────────────────────────────────
//
// SAFETY: every message struct is #[repr(C)], carries explicit padding
// fields, and stores enum discriminants as raw u8, so each is fully
// initialized and valid for any bit pattern.

unsafe impl Plain for DriverStationStatus {}
unsafe impl Plain for PdpStatus {}
unsafe impl Plain for VisionGoal {}
unsafe impl Plain for VisionStatus {}
unsafe impl Plain for DrivetrainGoal {}
unsafe impl Plain for DrivetrainInput {}
unsafe impl Plain for DrivetrainOutput {}
unsafe impl Plain for DrivetrainStatus {}
unsafe impl Plain for SuperstructureGoal {}
unsafe impl Plain for SuperstructureInput {}
unsafe impl Plain for SuperstructureOutput {}
unsafe impl Plain for SuperstructureStatus {}

// ─── Topic payload and queue aliases ────────────────────────────────

/// Driver-station status payload (64-byte budget).
pub type DriverStationStatusPayload = Payload<DriverStationStatus, 64>;
/// Power-distribution status payload (256-byte budget).
pub type PdpStatusPayload = Payload<PdpStatus, 256>;
/// Vision goal payload.
pub type VisionGoalPayload = Payload<VisionGoal, 64>;
/// Vision status payload.
pub type VisionStatusPayload = Payload<VisionStatus, 64>;
/// Drivetrain goal payload.
pub type DrivetrainGoalPayload = Payload<DrivetrainGoal, 64>;
/// Drivetrain input payload.
pub type DrivetrainInputPayload = Payload<DrivetrainInput, 64>;
/// Drivetrain output payload.
pub type DrivetrainOutputPayload = Payload<DrivetrainOutput, 64>;
/// Drivetrain status payload.
pub type DrivetrainStatusPayload = Payload<DrivetrainStatus, 64>;
/// Superstructure goal payload.
pub type SuperstructureGoalPayload = Payload<SuperstructureGoal, 64>;
/// Superstructure input payload.
pub type SuperstructureInputPayload = Payload<SuperstructureInput, 64>;
/// Superstructure output payload.
pub type SuperstructureOutputPayload = Payload<SuperstructureOutput, 64>;
/// Superstructure status payload.
pub type SuperstructureStatusPayload = Payload<SuperstructureStatus, 64>;

/// Driver-station status queue.
pub type DriverStationStatusQueue = MessageQueue<DriverStationStatusPayload, QUEUE_DEPTH>;
/// Power-distribution status queue.
pub type PdpStatusQueue = MessageQueue<PdpStatusPayload, QUEUE_DEPTH>;
/// Vision goal queue.
pub type VisionGoalQueue = MessageQueue<VisionGoalPayload, QUEUE_DEPTH>;
/// Vision status queue.
pub type VisionStatusQueue = MessageQueue<VisionStatusPayload, QUEUE_DEPTH>;
/// Drivetrain goal queue.
pub type DrivetrainGoalQueue = MessageQueue<DrivetrainGoalPayload, QUEUE_DEPTH>;
/// Drivetrain input queue.
pub type DrivetrainInputQueue = MessageQueue<DrivetrainInputPayload, QUEUE_DEPTH>;
/// Drivetrain output queue.
pub type DrivetrainOutputQueue = MessageQueue<DrivetrainOutputPayload, QUEUE_DEPTH>;
/// Drivetrain status queue.
pub type DrivetrainStatusQueue = MessageQueue<DrivetrainStatusPayload, QUEUE_DEPTH>;
/// Superstructure goal queue.
pub type SuperstructureGoalQueue = MessageQueue<SuperstructureGoalPayload, QUEUE_DEPTH>;
/// Superstructure input queue.
pub type SuperstructureInputQueue = MessageQueue<SuperstructureInputPayload, QUEUE_DEPTH>;
/// Superstructure output queue.
pub type SuperstructureOutputQueue = MessageQueue<SuperstructureOutputPayload, QUEUE_DEPTH>;
/// Superstructure status queue.
pub type SuperstructureStatusQueue = MessageQueue<SuperstructureStatusPayload, QUEUE_DEPTH>;

/// Number of topics the registry binds.
pub const TOPIC_COUNT: usize = 12;

/// One queue per topic, live for the process lifetime.
pub struct QueueRegistry {
    driver_station_status: DriverStationStatusQueue,
    pdp_status: PdpStatusQueue,
    vision_goal: VisionGoalQueue,
    vision_status: VisionStatusQueue,
    drivetrain_goal: DrivetrainGoalQueue,
    drivetrain_input: DrivetrainInputQueue,
    drivetrain_output: DrivetrainOutputQueue,
    drivetrain_status: DrivetrainStatusQueue,
    superstructure_goal: SuperstructureGoalQueue,
    superstructure_input: SuperstructureInputQueue,
    superstructure_output: SuperstructureOutputQueue,
    superstructure_status: SuperstructureStatusQueue,
}

static REGISTRY: OnceLock<QueueRegistry> = OnceLock::new();

impl QueueRegistry {
    fn new() -> Self {
        Self {
            driver_station_status: MessageQueue::new(),
            pdp_status: MessageQueue::new(),
            vision_goal: MessageQueue::new(),
            vision_status: MessageQueue::new(),
            drivetrain_goal: MessageQueue::new(),
            drivetrain_input: MessageQueue::new(),
            drivetrain_output: MessageQueue::new(),
            drivetrain_status: MessageQueue::new(),
            superstructure_goal: MessageQueue::new(),
            superstructure_input: MessageQueue::new(),
            superstructure_output: MessageQueue::new(),
            superstructure_status: MessageQueue::new(),
        }
    }

    /// The process-wide registry. The first call from any task performs
    /// initialization; concurrent first calls are safe and observe the
    /// same instance.
    pub fn instance() -> &'static QueueRegistry {
        REGISTRY.get_or_init(|| {
            tracing::info!(topics = TOPIC_COUNT, depth = QUEUE_DEPTH, "queue registry initialized");
            QueueRegistry::new()
        })
    }

    /// Driver-station status topic.
    #[inline]
    pub fn driver_station_status_queue(&self) -> &DriverStationStatusQueue {
        &self.driver_station_status
    }

    /// Power-distribution status topic.
    #[inline]
    pub fn pdp_status_queue(&self) -> &PdpStatusQueue {
        &self.pdp_status
    }

    /// Vision goal topic.
    #[inline]
    pub fn vision_goal_queue(&self) -> &VisionGoalQueue {
        &self.vision_goal
    }

    /// Vision status topic.
    #[inline]
    pub fn vision_status_queue(&self) -> &VisionStatusQueue {
        &self.vision_status
    }

    /// Drivetrain goal topic.
    #[inline]
    pub fn drivetrain_goal_queue(&self) -> &DrivetrainGoalQueue {
        &self.drivetrain_goal
    }

    /// Drivetrain input topic.
    #[inline]
    pub fn drivetrain_input_queue(&self) -> &DrivetrainInputQueue {
        &self.drivetrain_input
    }

    /// Drivetrain output topic.
    #[inline]
    pub fn drivetrain_output_queue(&self) -> &DrivetrainOutputQueue {
        &self.drivetrain_output
    }

    /// Drivetrain status topic.
    #[inline]
    pub fn drivetrain_status_queue(&self) -> &DrivetrainStatusQueue {
        &self.drivetrain_status
    }

    /// Superstructure goal topic.
    #[inline]
    pub fn superstructure_goal_queue(&self) -> &SuperstructureGoalQueue {
        &self.superstructure_goal
    }

    /// Superstructure input topic.
    #[inline]
    pub fn superstructure_input_queue(&self) -> &SuperstructureInputQueue {
        &self.superstructure_input
    }

    /// Superstructure output topic.
    #[inline]
    pub fn superstructure_output_queue(&self) -> &SuperstructureOutputQueue {
        &self.superstructure_output
    }

    /// Superstructure status topic.
    #[inline]
    pub fn superstructure_status_queue(&self) -> &SuperstructureStatusQueue {
        &self.superstructure_status
    }
}
