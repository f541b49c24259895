use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("joint-mover: Connection error : {}", message)]
    Connection { message: String },
    #[error("joint-mover: Action server {} is not available : {}", action_name, message)]
    ServerUnavailable {
        action_name: String,
        message: String,
    },
    #[error("joint-mover: Result of goal {} was lost : {}", action_name, message)]
    ResultLost {
        action_name: String,
        message: String,
    },
    #[error("joint-mover: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
