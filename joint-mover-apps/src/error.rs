use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("joint-mover-apps: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("joint-mover-apps: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("joint-mover-apps: Client for {:?} requires ros2 feature.", .0)]
    ConfigRequireRos2(String),
    #[error("joint-mover-apps: joint-mover: {:?}", .0)]
    JointMover(#[from] joint_mover::Error),
}
