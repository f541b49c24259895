mod follow_joint_trajectory_client;

pub use follow_joint_trajectory_client::*;
