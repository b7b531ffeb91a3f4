use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The prize currently being played for.
///
/// Any tier can follow any other; the operator is free to go back if a
/// claim turns out to be wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Ambo,
    Terno,
    Quaterna,
    Cinquina,
    Tombola,
    #[serde(alias = "SUPERBINGO")]
    SuperBingo,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Ambo,
        Tier::Terno,
        Tier::Quaterna,
        Tier::Cinquina,
        Tier::Tombola,
        Tier::SuperBingo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Ambo => "Ambo",
            Tier::Terno => "Terno",
            Tier::Quaterna => "Quaterna",
            Tier::Cinquina => "Cinquina",
            Tier::Tombola => "Tombola",
            Tier::SuperBingo => "SuperBingo",
        }
    }

    /// The following prize, saturating at `SuperBingo`.
    pub fn next(self) -> Tier {
        let idx = Tier::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tier::ALL[(idx + 1).min(Tier::ALL.len() - 1)]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier '{}'", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Tier::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownTier(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ambo() {
        assert_eq!(Tier::default(), Tier::Ambo);
    }

    #[test]
    fn next_walks_the_ladder_and_saturates() {
        assert_eq!(Tier::Ambo.next(), Tier::Terno);
        assert_eq!(Tier::Tombola.next(), Tier::SuperBingo);
        assert_eq!(Tier::SuperBingo.next(), Tier::SuperBingo);
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("Terno".parse::<Tier>(), Ok(Tier::Terno));
        assert_eq!(" cinquina ".parse::<Tier>(), Ok(Tier::Cinquina));
        assert_eq!("SUPERBINGO".parse::<Tier>(), Ok(Tier::SuperBingo));
        assert!("Bingo".parse::<Tier>().is_err());
    }

    #[test]
    fn serializes_by_label_and_accepts_legacy_caps() {
        assert_eq!(serde_json::to_string(&Tier::Quaterna).unwrap(), "\"Quaterna\"");
        let legacy: Tier = serde_json::from_str("\"SUPERBINGO\"").unwrap();
        assert_eq!(legacy, Tier::SuperBingo);
    }
}
