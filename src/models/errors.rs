use crate::models::constants::{DefeatReason, Device};
use std::fmt;

/// Game-specific error types. The `Display` text is the report shown to the player.
#[derive(Debug)]
pub enum GameError {
    /// Out-of-range course, warp or units; nothing was changed
    InputRejected(String),
    /// Not enough energy or torpedoes; nothing was changed
    ResourceExhausted(String),
    /// Command refused because a device is damaged
    SubsystemInoperable(Device),
    /// The mission is over
    GameEnding(DefeatReason),
    /// Every klingon is destroyed; the mission is over
    MissionAccomplished,
    /// Failed to parse user input
    ParseError(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// True once the mission is over; everything else is recovered with a report.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameError::GameEnding(_) | GameError::MissionAccomplished)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InputRejected(msg) => write!(f, "{}", msg),
            GameError::ResourceExhausted(msg) => write!(f, "{}", msg),
            GameError::SubsystemInoperable(device) => write!(f, "{}", device.inoperable_message()),
            GameError::GameEnding(reason) => match reason {
                DefeatReason::ShipDestroyed => write!(f, "THE ENTERPRISE HAS BEEN DESTROYED"),
                DefeatReason::StarbasesDestroyed => write!(f, "YOU HAVE BEEN RELIEVED OF COMMAND"),
                DefeatReason::TimeExpired => write!(f, "YOUR MISSION TIME HAS EXPIRED"),
                DefeatReason::Resigned => write!(f, "YOU HAVE RESIGNED YOUR COMMAND"),
            },
            GameError::MissionAccomplished => write!(f, "THE FEDERATION HAS BEEN SAVED !!!"),
            GameError::ParseError(_) => write!(f, "?REENTER"),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<std::num::ParseFloatError> for GameError {
    fn from(err: std::num::ParseFloatError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsystem_error_uses_device_message() {
        let err = GameError::SubsystemInoperable(Device::PhotonTubes);
        assert_eq!(err.to_string(), "PHOTON TUBES ARE NOT OPERATIONAL");
    }

    #[test]
    fn only_mission_end_is_terminal() {
        assert!(GameError::GameEnding(DefeatReason::TimeExpired).is_terminal());
        assert!(GameError::MissionAccomplished.is_terminal());
        assert!(!GameError::InputRejected("x".into()).is_terminal());
        assert!(!GameError::SubsystemInoperable(Device::PhaserControl).is_terminal());
    }

    #[test]
    fn parse_errors_convert() {
        let err: GameError = "abc".parse::<f64>().unwrap_err().into();
        assert!(matches!(err, GameError::ParseError(_)));
    }
}
