use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    error::Error,
    goal,
    msg::control_msgs::FollowJointTrajectory,
    traits::{FollowJointTrajectoryClient, GoalResponse, GoalStatus},
};

/// How a goal ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The controller refused the goal. No result was requested.
    Rejected,
    /// The controller accepted the goal and reported a result for it.
    Completed {
        status: GoalStatus,
        error_code: i32,
        error_string: String,
    },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Rejected => None,
            Self::Completed { error_code, .. } => Some(*error_code),
        }
    }
}

/// Sends one goal to a [`FollowJointTrajectoryClient`] and waits for the
/// controller to finish it.
#[derive(Debug)]
pub struct JointMover<C> {
    client: C,
}

impl<C> JointMover<C>
where
    C: FollowJointTrajectoryClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Moves the shoulder lift joint to its fixed target, see [`goal::shoulder_goal`].
    pub async fn run(&self) -> Result<Outcome, Error> {
        self.send(goal::shoulder_goal()).await
    }

    /// Sends `goal`, waits for it to be accepted, then waits for its result.
    pub async fn send(&self, goal: FollowJointTrajectory::Goal) -> Result<Outcome, Error> {
        let action_name = self.client.action_name();
        debug!(%action_name, "waiting for action server");
        self.client.wait_for_server().await?;

        info!(
            %action_name,
            joint_names = ?goal.trajectory.joint_names,
            num_points = goal.trajectory.points.len(),
            "sending goal"
        );
        let result = match self.client.send_goal(goal).await? {
            GoalResponse::Rejected => {
                error!(%action_name, "Goal rejected :(");
                return Ok(Outcome::Rejected);
            }
            GoalResponse::Accepted(result) => {
                debug!(%action_name, "goal accepted, waiting for result");
                result.await?
            }
        };

        let error_code = result.result.error_code;
        info!(
            status = ?result.status,
            error_code_name = result.result.error_code_name().unwrap_or("UNKNOWN"),
            error_string = %result.result.error_string,
            "Motion completed with error code: {error_code}"
        );
        Ok(Outcome::Completed {
            status: result.status,
            error_code,
            error_string: result.result.error_string,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::DummyFollowJointTrajectoryClient;

    #[tokio::test]
    async fn test_outcome_accessors() {
        let mover = JointMover::new(DummyFollowJointTrajectoryClient::rejecting());
        let outcome = mover.run().await.unwrap();
        assert!(outcome.is_rejected());
        assert_eq!(outcome.error_code(), None);

        let mover = JointMover::new(DummyFollowJointTrajectoryClient::accepting(-5));
        let outcome = mover.run().await.unwrap();
        assert!(!outcome.is_rejected());
        assert_eq!(outcome.error_code(), Some(-5));
    }
}
