use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::{
    error::Error,
    goal::DEFAULT_ACTION_NAME,
    msg::control_msgs::FollowJointTrajectory,
    traits::{FollowJointTrajectoryClient, GoalResponse, GoalResult, GoalStatus, ResultFuture},
};

/// Dummy FollowJointTrajectoryClient for debug or tests.
///
/// Answers every goal the same way and remembers what it was asked.
#[derive(Debug)]
pub struct DummyFollowJointTrajectoryClient {
    pub action_name: String,
    pub accept: bool,
    pub result: GoalResult,
    pub goals: Mutex<Vec<FollowJointTrajectory::Goal>>,
    wait_for_server_count: AtomicUsize,
    result_request_count: Arc<AtomicUsize>,
}

impl DummyFollowJointTrajectoryClient {
    pub fn new(accept: bool, result: GoalResult) -> Self {
        Self {
            action_name: DEFAULT_ACTION_NAME.to_owned(),
            accept,
            result,
            goals: Mutex::new(Vec::new()),
            wait_for_server_count: AtomicUsize::new(0),
            result_request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Accepts every goal and finishes it with `error_code`.
    pub fn accepting(error_code: i32) -> Self {
        Self::new(
            true,
            GoalResult {
                status: GoalStatus::Succeeded,
                result: FollowJointTrajectory::Result {
                    error_code,
                    error_string: String::new(),
                },
            },
        )
    }

    /// Rejects every goal.
    pub fn rejecting() -> Self {
        Self::new(
            false,
            GoalResult {
                status: GoalStatus::Unknown,
                result: FollowJointTrajectory::Result::default(),
            },
        )
    }

    pub fn with_action_name(mut self, action_name: impl Into<String>) -> Self {
        self.action_name = action_name.into();
        self
    }

    /// Returns the goals received so far.
    pub fn sent_goals(&self) -> Vec<FollowJointTrajectory::Goal> {
        self.goals.lock().unwrap().clone()
    }

    pub fn wait_for_server_count(&self) -> usize {
        self.wait_for_server_count.load(Ordering::SeqCst)
    }

    /// Returns how many times a result was actually awaited.
    pub fn result_request_count(&self) -> usize {
        self.result_request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FollowJointTrajectoryClient for DummyFollowJointTrajectoryClient {
    fn action_name(&self) -> String {
        self.action_name.clone()
    }

    async fn wait_for_server(&self) -> Result<(), Error> {
        self.wait_for_server_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn send_goal(&self, goal: FollowJointTrajectory::Goal) -> Result<GoalResponse, Error> {
        self.goals.lock().unwrap().push(goal);
        if !self.accept {
            return Ok(GoalResponse::Rejected);
        }
        let result = self.result.clone();
        let count = self.result_request_count.clone();
        Ok(GoalResponse::Accepted(ResultFuture::new(async move {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(result)
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::shoulder_goal;

    #[tokio::test]
    async fn test_accepting() {
        let client = DummyFollowJointTrajectoryClient::accepting(-4);
        assert_eq!(client.action_name(), DEFAULT_ACTION_NAME);
        client.wait_for_server().await.unwrap();
        assert_eq!(client.wait_for_server_count(), 1);

        let response = client.send_goal(shoulder_goal()).await.unwrap();
        assert_eq!(client.sent_goals(), vec![shoulder_goal()]);
        let GoalResponse::Accepted(result) = response else {
            panic!("expected the goal to be accepted");
        };
        // nothing is counted until the result is awaited
        assert_eq!(client.result_request_count(), 0);
        let result = result.await.unwrap();
        assert_eq!(client.result_request_count(), 1);
        assert_eq!(result.status, GoalStatus::Succeeded);
        assert_eq!(result.result.error_code, -4);
    }

    #[tokio::test]
    async fn test_rejecting() {
        let client = DummyFollowJointTrajectoryClient::rejecting().with_action_name("/arm");
        assert_eq!(client.action_name(), "/arm");
        let response = client.send_goal(shoulder_goal()).await.unwrap();
        assert!(matches!(response, GoalResponse::Rejected));
        assert_eq!(client.sent_goals().len(), 1);
        assert_eq!(client.result_request_count(), 0);
    }
}
