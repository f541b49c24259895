use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use async_trait::async_trait;
use auto_impl::auto_impl;
use futures::future::{BoxFuture, FutureExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Error, msg::control_msgs::FollowJointTrajectory};

/// Terminal (or last known) state of an action goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GoalStatus {
    Unknown,
    Accepted,
    Executing,
    Canceling,
    Succeeded,
    Canceled,
    Aborted,
}

/// What the controller finally reported for an accepted goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub status: GoalStatus,
    pub result: FollowJointTrajectory::Result,
}

/// Future that resolves once an accepted goal has finished.
///
/// Awaiting it is how the result is requested: dropping it without awaiting
/// leaves the motion running on the controller but the result is never read.
pub struct ResultFuture(BoxFuture<'static, Result<GoalResult, Error>>);

impl ResultFuture {
    pub fn new(future: impl Future<Output = Result<GoalResult, Error>> + Send + 'static) -> Self {
        Self(future.boxed())
    }

    /// Creates a future that resolves immediately with the given result.
    pub fn ready(result: GoalResult) -> Self {
        Self::new(async move { Ok(result) })
    }
}

impl Future for ResultFuture {
    type Output = Result<GoalResult, Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.as_mut().poll(cx)
    }
}

impl fmt::Debug for ResultFuture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultFuture").finish_non_exhaustive()
    }
}

/// Answer of the controller to a goal request.
#[derive(Debug)]
pub enum GoalResponse {
    Accepted(ResultFuture),
    Rejected,
}

impl GoalResponse {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[async_trait]
#[auto_impl(Box, Arc)]
pub trait FollowJointTrajectoryClient: Send + Sync {
    /// Returns the name of the action this client sends goals to.
    fn action_name(&self) -> String;

    /// Waits until the action server is available.
    ///
    /// There is no timeout: this returns only once the server shows up or the
    /// underlying connection fails.
    async fn wait_for_server(&self) -> Result<(), Error>;

    /// Sends the goal and waits until the controller accepts or rejects it.
    ///
    /// A rejection is reported as [`GoalResponse::Rejected`], not as an error.
    async fn send_goal(&self, goal: FollowJointTrajectory::Goal) -> Result<GoalResponse, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_future_ready() {
        let result = GoalResult {
            status: GoalStatus::Succeeded,
            result: FollowJointTrajectory::Result {
                error_code: -4,
                error_string: "path".to_owned(),
            },
        };
        let got = tokio_test::block_on(ResultFuture::ready(result.clone())).unwrap();
        assert_eq!(got, result);
    }

    #[test]
    fn test_goal_response() {
        assert!(!GoalResponse::Rejected.is_accepted());
        let accepted = GoalResponse::Accepted(ResultFuture::new(async {
            Err(Error::Connection {
                message: "lost".to_owned(),
            })
        }));
        assert!(accepted.is_accepted());
        assert_eq!(
            format!("{accepted:?}"),
            "Accepted(ResultFuture { .. })".to_owned()
        );
    }
}
