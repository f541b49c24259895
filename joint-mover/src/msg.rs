//! Plain Rust mirrors of the ROS2 messages carried by the
//! `control_msgs/FollowJointTrajectory` action.
#![allow(non_snake_case)]

/// [builtin_interfaces](https://github.com/ros2/rcl_interfaces/tree/HEAD/builtin_interfaces)
pub mod builtin_interfaces {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Time {
        pub sec: i32,
        pub nanosec: u32,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Duration {
        pub sec: i32,
        pub nanosec: u32,
    }

    impl Duration {
        pub const ZERO: Self = Self { sec: 0, nanosec: 0 };
    }

    impl From<std::time::Duration> for Duration {
        fn from(d: std::time::Duration) -> Self {
            Self {
                sec: d.as_secs().try_into().unwrap_or(i32::MAX),
                nanosec: d.subsec_nanos(),
            }
        }
    }

    impl From<Duration> for std::time::Duration {
        /// Negative durations are clamped to zero.
        fn from(d: Duration) -> Self {
            if d.sec < 0 {
                return std::time::Duration::ZERO;
            }
            std::time::Duration::new(d.sec as u64, d.nanosec)
        }
    }
}

/// [std_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/std_msgs)
pub mod std_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Header {
        pub stamp: builtin_interfaces::Time,
        pub frame_id: String,
    }
}

/// [trajectory_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/trajectory_msgs)
pub mod trajectory_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct JointTrajectory {
        pub header: std_msgs::Header,
        pub joint_names: Vec<String>,
        pub points: Vec<JointTrajectoryPoint>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct JointTrajectoryPoint {
        pub positions: Vec<f64>,
        pub velocities: Vec<f64>,
        pub accelerations: Vec<f64>,
        pub effort: Vec<f64>,
        pub time_from_start: builtin_interfaces::Duration,
    }
}

/// [control_msgs](https://github.com/ros-controls/control_msgs/tree/HEAD/control_msgs)
pub mod control_msgs {
    pub mod FollowJointTrajectory {
        use serde::{Deserialize, Serialize};

        use crate::msg::*;

        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Goal {
            pub trajectory: trajectory_msgs::JointTrajectory,
            pub path_tolerance: Vec<control_msgs::JointTolerance>,
            pub goal_tolerance: Vec<control_msgs::JointTolerance>,
            pub goal_time_tolerance: builtin_interfaces::Duration,
        }

        #[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Result {
            pub error_code: i32,
            pub error_string: String,
        }

        impl Result {
            pub const GOAL_TOLERANCE_VIOLATED: i32 = -5;
            pub const INVALID_GOAL: i32 = -1;
            pub const INVALID_JOINTS: i32 = -2;
            pub const OLD_HEADER_TIMESTAMP: i32 = -3;
            pub const PATH_TOLERANCE_VIOLATED: i32 = -4;
            pub const SUCCESSFUL: i32 = 0;

            /// Returns the name of the error code constant, if the code is one
            /// the controller defines.
            pub fn error_code_name(&self) -> Option<&'static str> {
                Some(match self.error_code {
                    Self::SUCCESSFUL => "SUCCESSFUL",
                    Self::INVALID_GOAL => "INVALID_GOAL",
                    Self::INVALID_JOINTS => "INVALID_JOINTS",
                    Self::OLD_HEADER_TIMESTAMP => "OLD_HEADER_TIMESTAMP",
                    Self::PATH_TOLERANCE_VIOLATED => "PATH_TOLERANCE_VIOLATED",
                    Self::GOAL_TOLERANCE_VIOLATED => "GOAL_TOLERANCE_VIOLATED",
                    _ => return None,
                })
            }
        }

        #[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Feedback {
            pub header: std_msgs::Header,
            pub joint_names: Vec<String>,
            pub desired: trajectory_msgs::JointTrajectoryPoint,
            pub actual: trajectory_msgs::JointTrajectoryPoint,
            pub error: trajectory_msgs::JointTrajectoryPoint,
        }
    }

    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct JointTolerance {
        pub name: String,
        pub position: f64,
        pub velocity: f64,
        pub acceleration: f64,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_duration_from_std() {
        let d = builtin_interfaces::Duration::from(Duration::from_millis(2500));
        assert_eq!(d.sec, 2);
        assert_eq!(d.nanosec, 500_000_000);

        let d = builtin_interfaces::Duration::from(Duration::from_secs(u64::MAX));
        assert_eq!(d.sec, i32::MAX);
    }

    #[test]
    fn test_duration_to_std() {
        let d = builtin_interfaces::Duration {
            sec: 1,
            nanosec: 5,
        };
        assert_eq!(Duration::from(d), Duration::new(1, 5));
        let d = builtin_interfaces::Duration { sec: -3, nanosec: 0 };
        assert_eq!(Duration::from(d), Duration::ZERO);
    }

    #[test]
    fn test_error_code_name() {
        use control_msgs::FollowJointTrajectory::Result;
        let name = |error_code| {
            Result {
                error_code,
                ..Default::default()
            }
            .error_code_name()
        };
        assert_eq!(name(0), Some("SUCCESSFUL"));
        assert_eq!(name(-4), Some("PATH_TOLERANCE_VIOLATED"));
        assert_eq!(name(-5), Some("GOAL_TOLERANCE_VIOLATED"));
        assert_eq!(name(42), None);
    }

    #[test]
    fn test_goal_deserialize_with_defaults() {
        let goal: control_msgs::FollowJointTrajectory::Goal = serde_json::from_str(
            r#"{"trajectory":{"joint_names":["j"],"points":[{"positions":[1.0]}]}}"#,
        )
        .unwrap();
        assert_eq!(goal.trajectory.joint_names, vec!["j".to_owned()]);
        assert_eq!(goal.trajectory.points.len(), 1);
        assert!(goal.trajectory.points[0].velocities.is_empty());
        assert_eq!(goal.goal_time_tolerance, builtin_interfaces::Duration::ZERO);
    }
}
