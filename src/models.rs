use crate::date::CalendarDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub date: CalendarDate,
    pub mood: String,
    #[serde(default)]
    pub note: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_check_ins: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_check_in_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub enable_notifications: bool,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_notifications: true,
            theme: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    SoSo,
    Sad,
    Tired,
    Excited,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::SoSo,
        Mood::Sad,
        Mood::Tired,
        Mood::Excited,
        Mood::Calm,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::SoSo => "😐",
            Mood::Sad => "😔",
            Mood::Tired => "😤",
            Mood::Excited => "🤩",
            Mood::Calm => "😌",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.symbol() == symbol)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::SoSo => "So-so",
            Mood::Sad => "Sad",
            Mood::Tired => "Tired",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub symbol: &'static str,
    pub label: &'static str,
}

impl From<Mood> for MoodOption {
    fn from(mood: Mood) -> Self {
        Self {
            symbol: mood.symbol(),
            label: mood.label(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    pub records: Vec<CheckInRecord>,
    pub stats: UserStats,
    pub today: CalendarDate,
    pub has_checked_in_today: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct FortuneQuery {
    #[serde(default)]
    pub refresh: bool,
}
