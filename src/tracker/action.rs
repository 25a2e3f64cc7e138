use std::fmt::Display;

/// Command sent by a menu click. Anything that isn't a known command is kept as
/// [Action::Unrecognized] and only settles the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Research,
    Work,
    Stop,
    Reset,
    Unrecognized(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Research => "research",
            Action::Work => "work",
            Action::Stop => "stop",
            Action::Reset => "reset",
            Action::Unrecognized(v) => v,
        }
    }
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        match value {
            "research" => Action::Research,
            "work" => Action::Work,
            "stop" => Action::Stop,
            "reset" => Action::Reset,
            other => Action::Unrecognized(other.to_string()),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Action;

    #[test]
    fn parses_known_actions() {
        for action in [Action::Research, Action::Work, Action::Stop, Action::Reset] {
            assert_eq!(Action::from(action.as_str()), action);
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Action::from("Work"), Action::Unrecognized("Work".into()));
        assert_eq!(Action::from(""), Action::Unrecognized("".into()));
        assert_eq!(Action::from("pause").to_string(), "pause");
    }
}
