use futures::stream::StreamExt;
use joint_mover::{
    async_trait, msg::control_msgs, Error, FollowJointTrajectoryClient, GoalResponse, GoalResult,
    ResultFuture,
};
use r2r::control_msgs::action::FollowJointTrajectory;
use tracing::{debug, trace};

use crate::{conversion, Node};

/// [`FollowJointTrajectoryClient`] implementation for ROS2.
///
/// The node must be spinning (see [`Node::spawn_spin_task`]) for any of the
/// futures returned by this client to make progress.
pub struct Ros2FollowJointTrajectoryClient {
    action_client: r2r::ActionClient<FollowJointTrajectory::Action>,
    action_name: String,
    // keep not to be dropped
    _node: Node,
}

impl Ros2FollowJointTrajectoryClient {
    /// Creates a new `Ros2FollowJointTrajectoryClient` from the full name of a
    /// control_msgs/FollowJointTrajectory action.
    #[track_caller]
    pub fn new(node: Node, action_name: &str) -> Result<Self, Error> {
        let action_client = node
            .r2r()
            .create_action_client::<FollowJointTrajectory::Action>(action_name)
            .map_err(|e| Error::Connection {
                message: format!("failed to create action client for {action_name}: {e}"),
            })?;
        debug!(%action_name, "created action client");
        Ok(Self {
            action_client,
            action_name: action_name.to_owned(),
            _node: node,
        })
    }
}

impl std::fmt::Debug for Ros2FollowJointTrajectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ros2FollowJointTrajectoryClient")
            .field("action_name", &self.action_name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl FollowJointTrajectoryClient for Ros2FollowJointTrajectoryClient {
    fn action_name(&self) -> String {
        self.action_name.clone()
    }

    async fn wait_for_server(&self) -> Result<(), Error> {
        let unavailable = |e: r2r::Error| Error::ServerUnavailable {
            action_name: self.action_name.clone(),
            message: e.to_string(),
        };
        let is_available = r2r::Node::is_available(&self.action_client).map_err(unavailable)?;
        is_available.await.map_err(unavailable)
    }

    async fn send_goal(
        &self,
        goal: control_msgs::FollowJointTrajectory::Goal,
    ) -> Result<GoalResponse, Error> {
        let send_goal_request = self
            .action_client
            .send_goal_request(conversion::to_goal(&goal))
            .map_err(|e| Error::Connection {
                message: format!("failed to send goal to {}: {e}", self.action_name),
            })?;
        let (goal, result, feedback) = match send_goal_request.await {
            Ok(accepted) => accepted,
            Err(r2r::Error::GoalRejected) => return Ok(GoalResponse::Rejected),
            Err(e) => {
                return Err(Error::Connection {
                    message: format!("no response to goal from {}: {e}", self.action_name),
                })
            }
        };
        debug!(goal_id = %goal.uuid, "goal accepted");

        tokio::spawn(async move {
            feedback
                .for_each(|feedback| {
                    let feedback = conversion::from_feedback(&feedback);
                    trace!(?feedback, "feedback");
                    std::future::ready(())
                })
                .await
        });

        let action_name = self.action_name.clone();
        Ok(GoalResponse::Accepted(ResultFuture::new(async move {
            // keep the goal handle alive until the result arrives
            let _goal = goal;
            let (status, result) = result.await.map_err(|e| Error::ResultLost {
                action_name,
                message: e.to_string(),
            })?;
            Ok(GoalResult {
                status: conversion::from_status(status),
                result: conversion::from_result(result),
            })
        })))
    }
}
