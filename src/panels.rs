use serde::Serialize;
use std::{collections::HashMap, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Calendar,
    CheckIn,
    Fortune,
}

impl PanelKind {
    pub fn path(self) -> &'static str {
        match self {
            PanelKind::Calendar => "/",
            PanelKind::CheckIn => "/checkin",
            PanelKind::Fortune => "/fortune",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::Calendar => "Ritual calendar",
            PanelKind::CheckIn => "Daily check-in",
            PanelKind::Fortune => "Today's fortune",
        }
    }
}

impl FromStr for PanelKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendar" => Ok(PanelKind::Calendar),
            "checkin" => Ok(PanelKind::CheckIn),
            "fortune" => Ok(PanelKind::Fortune),
            _ => Err(()),
        }
    }
}

/// Palette commands; each opens or reveals one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenCalendar,
    CheckIn,
    ShowFortune,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::OpenCalendar, Command::CheckIn, Command::ShowFortune];

    pub fn id(self) -> &'static str {
        match self {
            Command::OpenCalendar => "daily-ritual.openCalendar",
            Command::CheckIn => "daily-ritual.checkIn",
            Command::ShowFortune => "daily-ritual.showFortune",
        }
    }

    pub fn panel(self) -> PanelKind {
        match self {
            Command::OpenCalendar => PanelKind::Calendar,
            Command::CheckIn => PanelKind::CheckIn,
            Command::ShowFortune => PanelKind::Fortune,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelHandle {
    pub id: u64,
    pub kind: PanelKind,
    pub title: &'static str,
    pub path: &'static str,
    pub reveals: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelOpened {
    pub panel: PanelHandle,
    pub created: bool,
}

/// At most one live panel per kind.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    live: HashMap<PanelKind, PanelHandle>,
    next_id: u64,
}

impl PanelRegistry {
    /// Reveals the live panel of `kind`, or creates and registers one.
    pub fn open(&mut self, kind: PanelKind) -> PanelOpened {
        if let Some(handle) = self.live.get_mut(&kind) {
            handle.reveals += 1;
            return PanelOpened {
                panel: handle.clone(),
                created: false,
            };
        }

        self.next_id += 1;
        let handle = PanelHandle {
            id: self.next_id,
            kind,
            title: kind.title(),
            path: kind.path(),
            reveals: 0,
        };
        self.live.insert(kind, handle.clone());
        PanelOpened {
            panel: handle,
            created: true,
        }
    }

    pub fn get(&self, kind: PanelKind) -> Option<&PanelHandle> {
        self.live.get(&kind)
    }

    pub fn close(&mut self, kind: PanelKind) -> Option<PanelHandle> {
        self.live.remove(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_open_reveals_existing() {
        let mut registry = PanelRegistry::default();
        let first = registry.open(PanelKind::Fortune);
        assert!(first.created);

        let second = registry.open(PanelKind::Fortune);
        assert!(!second.created);
        assert_eq!(second.panel.id, first.panel.id);
        assert_eq!(second.panel.reveals, 1);
    }

    #[test]
    fn kinds_are_independent() {
        let mut registry = PanelRegistry::default();
        let calendar = registry.open(PanelKind::Calendar);
        let checkin = registry.open(PanelKind::CheckIn);
        assert!(calendar.created && checkin.created);
        assert_ne!(calendar.panel.id, checkin.panel.id);
    }

    #[test]
    fn close_allows_a_fresh_panel() {
        let mut registry = PanelRegistry::default();
        let first = registry.open(PanelKind::CheckIn);
        assert!(registry.close(PanelKind::CheckIn).is_some());
        assert!(registry.get(PanelKind::CheckIn).is_none());

        let again = registry.open(PanelKind::CheckIn);
        assert!(again.created);
        assert_ne!(again.panel.id, first.panel.id);
        assert!(registry.close(PanelKind::Calendar).is_none());
    }

    #[test]
    fn commands_map_to_panels() {
        assert_eq!(
            Command::from_id("daily-ritual.showFortune").map(Command::panel),
            Some(PanelKind::Fortune)
        );
        assert_eq!(Command::from_id("daily-ritual.checkIn"), Some(Command::CheckIn));
        assert!(Command::from_id("daily-ritual.unknown").is_none());
        assert_eq!("checkin".parse::<PanelKind>(), Ok(PanelKind::CheckIn));
    }
}
