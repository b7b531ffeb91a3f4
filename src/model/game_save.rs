use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::tier::Tier;

/// On-disk record of one game, also used as the read-only snapshot handed
/// to anything outside the session.
///
/// Field names follow the JSON files written by earlier versions, so old
/// saves keep loading. `log`, `last_number` and `state` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSave {
    pub name: String,
    pub numbers: Vec<u8>,

    #[serde(with = "date_format")]
    pub date: NaiveDateTime,

    #[serde(default)]
    pub log: Vec<String>,

    #[serde(default)]
    pub last_number: Option<u8>,

    #[serde(default)]
    pub state: Tier,
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::model::game_session::TIMESTAMP_FORMAT;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
