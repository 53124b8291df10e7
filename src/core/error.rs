use thiserror::Error;

#[derive(Error, Debug)]
pub enum FightError {
    #[error("Invalid game speed: {0}")]
    InvalidSpeed(String),

    #[error("Unknown combatant: {0}")]
    UnknownTarget(String),

    #[error("Combatant already defeated: {0}")]
    TargetDefeated(String),

    #[error("Tick loop is already running")]
    AlreadyRunning,

    #[error("Tick loop is not running")]
    NotRunning,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Engine stopped")]
    EngineStopped,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl FightError {
    /// Errors the controller recovers from by ignoring the request
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FightError::InvalidSpeed(_)
                | FightError::UnknownTarget(_)
                | FightError::TargetDefeated(_)
                | FightError::AlreadyRunning
                | FightError::NotRunning
        )
    }
}

pub type Result<T> = std::result::Result<T, FightError>;
