//! [`joint_mover`] implementation using ROS2.
#![cfg(feature = "ros2")]
#![warn(
    future_incompatible,
    missing_docs,
    rust_2018_idioms,
    single_use_lifetimes,
    unreachable_pub
)]
#![warn(clippy::default_trait_access, clippy::wildcard_imports)]

mod conversion;
mod node;
mod ros2_follow_joint_trajectory_client;

pub use node::*;
pub use ros2_follow_joint_trajectory_client::*;
// re-export
pub use r2r;
