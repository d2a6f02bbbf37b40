use std::fmt;

pub const START_LABEL: &str = "Start Pose Estimation";
pub const STOP_LABEL: &str = "Stop Pose Estimation";

/// What the status line shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Running,
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Click '{START_LABEL}' to begin."),
            Self::Loading => f.write_str("Loading model... Please wait."),
            Self::Running => f.write_str("Pose Estimation is running..."),
            Self::Failed(msg) => write!(f, "Error: {msg}"),
        }
    }
}

pub fn toggle_label(running: bool) -> &'static str {
    if running {
        STOP_LABEL
    } else {
        START_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Status::Idle.to_string(), "Click 'Start Pose Estimation' to begin.");
        assert_eq!(Status::Loading.to_string(), "Loading model... Please wait.");
        assert_eq!(Status::Running.to_string(), "Pose Estimation is running...");
        assert_eq!(
            Status::Failed("camera unavailable".into()).to_string(),
            "Error: camera unavailable"
        );
    }

    #[test]
    fn labels() {
        assert_eq!(toggle_label(false), "Start Pose Estimation");
        assert_eq!(toggle_label(true), "Stop Pose Estimation");
    }
}
