//! Conversions between [`joint_mover::msg`] and the r2r generated messages.

use joint_mover::{
    msg::{builtin_interfaces, control_msgs, std_msgs, trajectory_msgs},
    GoalStatus,
};
use r2r::{
    builtin_interfaces::msg as r2r_builtin, control_msgs::action::FollowJointTrajectory,
    control_msgs::msg as r2r_control, std_msgs::msg as r2r_std,
    trajectory_msgs::msg as r2r_trajectory,
};

fn to_duration(d: &builtin_interfaces::Duration) -> r2r_builtin::Duration {
    r2r_builtin::Duration {
        sec: d.sec,
        nanosec: d.nanosec,
    }
}

fn from_duration(d: &r2r_builtin::Duration) -> builtin_interfaces::Duration {
    builtin_interfaces::Duration {
        sec: d.sec,
        nanosec: d.nanosec,
    }
}

fn to_header(header: &std_msgs::Header) -> r2r_std::Header {
    r2r_std::Header {
        stamp: r2r_builtin::Time {
            sec: header.stamp.sec,
            nanosec: header.stamp.nanosec,
        },
        frame_id: header.frame_id.clone(),
    }
}

fn from_header(header: &r2r_std::Header) -> std_msgs::Header {
    std_msgs::Header {
        stamp: builtin_interfaces::Time {
            sec: header.stamp.sec,
            nanosec: header.stamp.nanosec,
        },
        frame_id: header.frame_id.clone(),
    }
}

fn to_point(point: &trajectory_msgs::JointTrajectoryPoint) -> r2r_trajectory::JointTrajectoryPoint {
    r2r_trajectory::JointTrajectoryPoint {
        positions: point.positions.clone(),
        velocities: point.velocities.clone(),
        accelerations: point.accelerations.clone(),
        effort: point.effort.clone(),
        time_from_start: to_duration(&point.time_from_start),
    }
}

fn from_point(point: &r2r_trajectory::JointTrajectoryPoint) -> trajectory_msgs::JointTrajectoryPoint {
    trajectory_msgs::JointTrajectoryPoint {
        positions: point.positions.clone(),
        velocities: point.velocities.clone(),
        accelerations: point.accelerations.clone(),
        effort: point.effort.clone(),
        time_from_start: from_duration(&point.time_from_start),
    }
}

fn to_tolerance(tolerance: &control_msgs::JointTolerance) -> r2r_control::JointTolerance {
    r2r_control::JointTolerance {
        name: tolerance.name.clone(),
        position: tolerance.position,
        velocity: tolerance.velocity,
        acceleration: tolerance.acceleration,
    }
}

pub(crate) fn to_goal(
    goal: &control_msgs::FollowJointTrajectory::Goal,
) -> FollowJointTrajectory::Goal {
    FollowJointTrajectory::Goal {
        trajectory: r2r_trajectory::JointTrajectory {
            header: to_header(&goal.trajectory.header),
            joint_names: goal.trajectory.joint_names.clone(),
            points: goal.trajectory.points.iter().map(to_point).collect(),
        },
        path_tolerance: goal.path_tolerance.iter().map(to_tolerance).collect(),
        goal_tolerance: goal.goal_tolerance.iter().map(to_tolerance).collect(),
        goal_time_tolerance: to_duration(&goal.goal_time_tolerance),
        ..Default::default()
    }
}

pub(crate) fn from_result(
    result: FollowJointTrajectory::Result,
) -> control_msgs::FollowJointTrajectory::Result {
    control_msgs::FollowJointTrajectory::Result {
        error_code: result.error_code,
        error_string: result.error_string,
    }
}

pub(crate) fn from_feedback(
    feedback: &FollowJointTrajectory::Feedback,
) -> control_msgs::FollowJointTrajectory::Feedback {
    control_msgs::FollowJointTrajectory::Feedback {
        header: from_header(&feedback.header),
        joint_names: feedback.joint_names.clone(),
        desired: from_point(&feedback.desired),
        actual: from_point(&feedback.actual),
        error: from_point(&feedback.error),
    }
}

pub(crate) fn from_status(status: r2r::GoalStatus) -> GoalStatus {
    match status {
        r2r::GoalStatus::Unknown => GoalStatus::Unknown,
        r2r::GoalStatus::Accepted => GoalStatus::Accepted,
        r2r::GoalStatus::Executing => GoalStatus::Executing,
        r2r::GoalStatus::Canceling => GoalStatus::Canceling,
        r2r::GoalStatus::Succeeded => GoalStatus::Succeeded,
        r2r::GoalStatus::Canceled => GoalStatus::Canceled,
        r2r::GoalStatus::Aborted => GoalStatus::Aborted,
    }
}
