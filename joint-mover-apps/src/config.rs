use std::path::Path;

use joint_mover::{
    goal::{DEFAULT_ACTION_NAME, DEFAULT_NODE_NAME},
    msg::control_msgs::FollowJointTrajectory,
    DummyFollowJointTrajectoryClient, FollowJointTrajectoryClient, GoalResult, GoalStatus,
    Tracing,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Ros2ClientConfig {
    /// Full name of the control_msgs/FollowJointTrajectory action.
    #[serde(default = "default_action_name")]
    pub action_name: String,
}

impl Default for Ros2ClientConfig {
    fn default() -> Self {
        Self {
            action_name: default_action_name(),
        }
    }
}

/// In-process controller that answers every goal the same way.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DummyClientConfig {
    #[serde(default = "default_true")]
    pub accept: bool,
    #[serde(default)]
    pub error_code: i32,
    #[serde(default)]
    pub error_string: String,
    /// Status reported together with the result of an accepted goal.
    #[serde(default = "default_dummy_status")]
    pub status: GoalStatus,
}

impl Default for DummyClientConfig {
    fn default() -> Self {
        Self {
            accept: true,
            error_code: 0,
            error_string: String::new(),
            status: default_dummy_status(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(tag = "type", content = "args")]
#[serde(deny_unknown_fields)]
pub enum ClientConfig {
    Ros2(Ros2ClientConfig),
    Dummy(DummyClientConfig),
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::Ros2(Ros2ClientConfig::default())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JointMoverConfig {
    // TOML format has a restriction that if a table itself contains tables,
    // all keys with non-table values must be emitted first.
    // Therefore, these fields must be located at the start of the struct.
    #[serde(default = "default_node_name")]
    pub node_name: String,
    #[serde(default)]
    pub namespace: String,
    /// Interval of the ROS2 spin task in milliseconds.
    #[serde(default = "default_spin_interval_ms")]
    pub spin_interval_ms: u64,

    #[serde(default)]
    pub client: ClientConfig,
}

fn default_node_name() -> String {
    DEFAULT_NODE_NAME.to_owned()
}

fn default_action_name() -> String {
    DEFAULT_ACTION_NAME.to_owned()
}

fn default_spin_interval_ms() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_dummy_status() -> GoalStatus {
    GoalStatus::Succeeded
}

impl Default for JointMoverConfig {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            namespace: String::new(),
            spin_interval_ms: default_spin_interval_ms(),
            client: ClientConfig::default(),
        }
    }
}

impl JointMoverConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| Error::NoFile(path.to_owned(), e))?;
        Self::from_str(&s, path)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let config: JointMoverConfig =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.to_owned(), e))?;
        debug!(?path, ?config, "loaded config");
        Ok(config)
    }

    /// Creates the client described by this config, wrapped with
    /// [`joint_mover::Tracing`].
    ///
    /// For ROS2 this also creates the node and starts spinning it, so it must
    /// be called from within a tokio runtime.
    pub fn create_client(&self) -> Result<Box<dyn FollowJointTrajectoryClient>, Error> {
        match &self.client {
            ClientConfig::Dummy(config) => {
                let result = GoalResult {
                    status: config.status,
                    result: FollowJointTrajectory::Result {
                        error_code: config.error_code,
                        error_string: config.error_string.clone(),
                    },
                };
                Ok(Box::new(Tracing::new(DummyFollowJointTrajectoryClient::new(
                    config.accept,
                    result,
                ))))
            }
            ClientConfig::Ros2(config) => self.create_ros2_client(config),
        }
    }

    #[cfg(feature = "ros2")]
    fn create_ros2_client(
        &self,
        config: &Ros2ClientConfig,
    ) -> Result<Box<dyn FollowJointTrajectoryClient>, Error> {
        use std::time::Duration;

        use joint_mover_ros2::{Node, Ros2FollowJointTrajectoryClient};

        let node = Node::new(&self.node_name, &self.namespace)?;
        let node_name = node.fully_qualified_name()?;
        info!(%node_name, "created ROS2 node");
        let client = Ros2FollowJointTrajectoryClient::new(node.clone(), &config.action_name)?;
        node.spawn_spin_task(Duration::from_millis(self.spin_interval_ms));
        Ok(Box::new(Tracing::new(client)))
    }

    #[cfg(not(feature = "ros2"))]
    fn create_ros2_client(
        &self,
        config: &Ros2ClientConfig,
    ) -> Result<Box<dyn FollowJointTrajectoryClient>, Error> {
        Err(Error::ConfigRequireRos2(config.action_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JointMoverConfig::default();
        assert_eq!(config.node_name, "joint_mover");
        assert_eq!(config.namespace, "");
        assert_eq!(
            config.client,
            ClientConfig::Ros2(Ros2ClientConfig {
                action_name: "/scaled_joint_trajectory_controller/follow_joint_trajectory"
                    .to_owned()
            })
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = JointMoverConfig::from_str("", "empty.toml").unwrap();
        assert_eq!(config, JointMoverConfig::default());
    }

    #[test]
    fn test_default_config_roundtrip() {
        let s = toml::to_string(&JointMoverConfig::default()).unwrap();
        let config = JointMoverConfig::from_str(&s, "default.toml").unwrap();
        assert_eq!(config, JointMoverConfig::default());
    }

    #[test]
    fn test_dummy_config() {
        let s = r#"
node_name = "mover"

[client]
type = "Dummy"
[client.args]
accept = false
"#;
        let config = JointMoverConfig::from_str(s, "dummy.toml").unwrap();
        assert_eq!(config.node_name, "mover");
        assert_eq!(
            config.client,
            ClientConfig::Dummy(DummyClientConfig {
                accept: false,
                error_code: 0,
                error_string: String::new(),
                status: GoalStatus::Succeeded,
            })
        );
    }

    #[tokio::test]
    async fn test_dummy_aborted_status() {
        let s = r#"
[client]
type = "Dummy"
[client.args]
error_code = -5
status = "Aborted"
"#;
        let config = JointMoverConfig::from_str(s, "aborted.toml").unwrap();
        let outcome = joint_mover::JointMover::new(config.create_client().unwrap())
            .run()
            .await
            .unwrap();
        assert_eq!(
            outcome,
            joint_mover::Outcome::Completed {
                status: GoalStatus::Aborted,
                error_code: -5,
                error_string: String::new(),
            }
        );
    }

    #[test]
    fn test_unknown_field() {
        let err = JointMoverConfig::from_str("joint_names = [\"a\"]", "bad.toml").unwrap_err();
        assert!(matches!(err, Error::TomlParseFailure(..)), "{err:?}");
    }

    #[test]
    fn test_missing_file() {
        let err = JointMoverConfig::new("no/such/config.toml").unwrap_err();
        assert!(matches!(err, Error::NoFile(..)), "{err:?}");
    }

    #[cfg(not(feature = "ros2"))]
    #[test]
    fn test_ros2_client_requires_feature() {
        let Err(err) = JointMoverConfig::default().create_client() else {
            panic!("expected ConfigRequireRos2");
        };
        assert!(matches!(err, Error::ConfigRequireRos2(..)), "{err:?}");
    }

    #[tokio::test]
    async fn test_create_dummy_client() {
        let config = JointMoverConfig {
            client: ClientConfig::Dummy(DummyClientConfig {
                error_code: -2,
                ..Default::default()
            }),
            ..Default::default()
        };
        let client = config.create_client().unwrap();
        assert_eq!(client.action_name(), DEFAULT_ACTION_NAME);
        let outcome = joint_mover::JointMover::new(client).run().await.unwrap();
        assert_eq!(outcome.error_code(), Some(-2));
    }
}
