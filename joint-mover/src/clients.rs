mod dummy_follow_joint_trajectory_client;
mod tracing_client;

pub use dummy_follow_joint_trajectory_client::*;
pub use tracing_client::*;
