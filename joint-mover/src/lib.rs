//! Send a single `control_msgs/FollowJointTrajectory` goal and report how the
//! controller finished it.
//!
//! The controller endpoint is abstracted by [`FollowJointTrajectoryClient`];
//! `joint-mover-ros2` provides the ROS2 implementation and
//! [`DummyFollowJointTrajectoryClient`] an in-process one.

mod clients;
mod error;
pub mod goal;
pub mod msg;
mod mover;
mod traits;

pub use clients::*;
pub use error::*;
pub use mover::*;
pub use traits::*;

// re-export
pub use async_trait::async_trait;
