//! The fixed goal this crate exists to send.

use std::time::Duration;

use crate::msg::{builtin_interfaces, control_msgs::FollowJointTrajectory, trajectory_msgs};

/// Default action of the UR scaled joint trajectory controller.
pub const DEFAULT_ACTION_NAME: &str =
    "/scaled_joint_trajectory_controller/follow_joint_trajectory";
pub const DEFAULT_NODE_NAME: &str = "joint_mover";

pub const SHOULDER_JOINT_NAME: &str = "shoulder_lift_joint";
/// Target angle of the shoulder lift joint in radians.
pub const SHOULDER_TARGET_POSITION: f64 = 0.5;
pub const SHOULDER_TIME_FROM_START: Duration = Duration::from_secs(2);
pub const GOAL_TIME_TOLERANCE: Duration = Duration::from_secs(1);

/// Builds the goal that moves the shoulder lift joint to
/// [`SHOULDER_TARGET_POSITION`] in [`SHOULDER_TIME_FROM_START`].
///
/// The header is left at its default so that the controller starts the
/// trajectory as soon as it accepts it.
pub fn shoulder_goal() -> FollowJointTrajectory::Goal {
    FollowJointTrajectory::Goal {
        trajectory: trajectory_msgs::JointTrajectory {
            joint_names: vec![SHOULDER_JOINT_NAME.to_owned()],
            points: vec![trajectory_msgs::JointTrajectoryPoint {
                positions: vec![SHOULDER_TARGET_POSITION],
                time_from_start: SHOULDER_TIME_FROM_START.into(),
                ..Default::default()
            }],
            ..Default::default()
        },
        goal_time_tolerance: builtin_interfaces::Duration::from(GOAL_TIME_TOLERANCE),
        ..Default::default()
    }
}
