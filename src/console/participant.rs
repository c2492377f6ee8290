use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    /// Types `row col` on the console.
    Human,
    /// Picks uniformly among the vacant fields.
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParticipantKind(pub String);

impl Display for UnknownParticipantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown participant kind {:?}, expected \"human\" or \"computer\"",
            self.0
        )
    }
}

impl std::error::Error for UnknownParticipantKind {}

impl FromStr for ParticipantKind {
    type Err = UnknownParticipantKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(ParticipantKind::Human),
            "computer" | "random" => Ok(ParticipantKind::Computer),
            _ => Err(UnknownParticipantKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub kind: ParticipantKind,
}

impl Participant {
    pub fn new(name: impl Into<String>, kind: ParticipantKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, ParticipantKind::Human)
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, ParticipantKind::Computer)
    }

    pub fn is_human(&self) -> bool {
        self.kind == ParticipantKind::Human
    }
}
