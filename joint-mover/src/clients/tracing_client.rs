use async_trait::async_trait;
use tracing::trace;

use crate::{
    error::Error,
    msg::control_msgs::FollowJointTrajectory,
    traits::{FollowJointTrajectoryClient, GoalResponse, ResultFuture},
};

/// Wraps a client and emits a `trace` event for every call made through it.
#[derive(Debug)]
pub struct Tracing<T>(T);

impl<T> Tracing<T> {
    pub fn new(v: T) -> Self {
        Self(v)
    }

    pub fn get_ref(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Tracing<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[async_trait]
impl<T: FollowJointTrajectoryClient> FollowJointTrajectoryClient for Tracing<T> {
    fn action_name(&self) -> String {
        let action_name = self.0.action_name();
        trace!(method = "FollowJointTrajectoryClient::action_name", %action_name);
        action_name
    }

    async fn wait_for_server(&self) -> Result<(), Error> {
        trace!(method = "FollowJointTrajectoryClient::wait_for_server");
        self.0.wait_for_server().await
    }

    async fn send_goal(&self, goal: FollowJointTrajectory::Goal) -> Result<GoalResponse, Error> {
        trace!(method = "FollowJointTrajectoryClient::send_goal", ?goal);
        let response = self.0.send_goal(goal).await?;
        Ok(match response {
            GoalResponse::Rejected => {
                trace!(method = "FollowJointTrajectoryClient::send_goal", accepted = false);
                GoalResponse::Rejected
            }
            GoalResponse::Accepted(result) => {
                trace!(method = "FollowJointTrajectoryClient::send_goal", accepted = true);
                GoalResponse::Accepted(ResultFuture::new(async move {
                    let result = result.await;
                    trace!(method = "GoalResponse::Accepted::result", ?result);
                    result
                }))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clients::DummyFollowJointTrajectoryClient, goal::shoulder_goal};

    #[tokio::test]
    async fn test_tracing_passthrough() {
        let client = Tracing::new(DummyFollowJointTrajectoryClient::accepting(3));
        assert_eq!(client.action_name(), client.get_ref().action_name);
        client.wait_for_server().await.unwrap();
        let GoalResponse::Accepted(result) = client.send_goal(shoulder_goal()).await.unwrap()
        else {
            panic!("expected the goal to be accepted");
        };
        assert_eq!(result.await.unwrap().result.error_code, 3);

        let inner = client.into_inner();
        assert_eq!(inner.wait_for_server_count(), 1);
        assert_eq!(inner.result_request_count(), 1);
    }

    #[tokio::test]
    async fn test_tracing_rejected() {
        let client: Tracing<_> = DummyFollowJointTrajectoryClient::rejecting().into();
        let response = client.send_goal(shoulder_goal()).await.unwrap();
        assert!(!response.is_accepted());
    }
}
