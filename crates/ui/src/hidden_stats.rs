//! The set of stats the player chose to hide.
//!
//! The host owns the canonical comma-separated string (`hiddenStats`). The UI
//! keeps a parsed copy, applies toggles optimistically, sends the new string
//! through `setHiddenStats`, and replaces its copy with whatever string the
//! host pushes back next.

use bevy::log::debug;

use crate::stat_descriptors::StatId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenStatSet {
    hidden: [bool; StatId::COUNT],
}

impl HiddenStatSet {
    /// Parse a comma-separated id list. Unknown ids are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut set = Self::default();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.parse::<StatId>() {
                Ok(id) => set.hidden[id.index()] = true,
                Err(err) => debug!("[HiddenStats] dropping {}", err),
            }
        }
        set
    }

    /// Ids in display order, joined with commas. Empty when nothing is hidden.
    pub fn serialize(&self) -> String {
        self.iter().map(StatId::as_str).collect::<Vec<_>>().join(",")
    }

    /// Replace the set with a host-pushed string. Returns whether the set
    /// changed.
    pub fn load(&mut self, raw: &str) -> bool {
        let parsed = Self::parse(raw);
        if parsed == *self {
            return false;
        }
        *self = parsed;
        true
    }

    /// Flip `id` and return the string to send to the host.
    ///
    /// Returns `None`, leaving the set untouched, when the toggle would hide
    /// the last visible stat.
    pub fn toggle(&mut self, id: StatId) -> Option<String> {
        let slot = id.index();
        if !self.hidden[slot] && self.visible_count() <= 1 {
            debug!("[HiddenStats] refusing to hide {}, it is the last visible stat", id);
            return None;
        }
        self.hidden[slot] = !self.hidden[slot];
        Some(self.serialize())
    }

    /// Show every stat again. Returns whether anything was hidden.
    pub fn reset(&mut self) -> bool {
        let changed = !self.is_empty();
        self.hidden = [false; StatId::COUNT];
        changed
    }

    pub fn is_hidden(&self, id: StatId) -> bool {
        self.hidden[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = StatId> + '_ {
        StatId::ALL.into_iter().filter(|id| self.hidden[id.index()])
    }

    pub fn len(&self) -> usize {
        self.hidden.iter().filter(|h| **h).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn visible_count(&self) -> usize {
        StatId::COUNT - self.len()
    }

    pub fn all_hidden(&self) -> bool {
        self.visible_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_unknown_ids() {
        let set = HiddenStatSet::parse("electricityAvailability,bogusId");
        assert_eq!(set.iter().collect::<Vec<_>>(), [StatId::ElectricityAvailability]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_empty_and_stray_commas() {
        assert!(HiddenStatSet::parse("").is_empty());
        assert!(HiddenStatSet::parse(",,").is_empty());
        let set = HiddenStatSet::parse(" crimeRate , ,fireHazard");
        assert!(set.is_hidden(StatId::CrimeRate));
        assert!(set.is_hidden(StatId::FireHazard));
    }

    #[test]
    fn test_serialize_uses_display_order() {
        let set = HiddenStatSet::parse("unemployment,crimeRate,waterAvailability,crimeRate");
        assert_eq!(set.serialize(), "waterAvailability,crimeRate,unemployment");
    }

    #[test]
    fn test_toggle_twice_converges_to_empty() {
        let mut set = HiddenStatSet::default();
        let first = set.toggle(StatId::CrimeRate).unwrap();
        assert_eq!(first, "crimeRate");
        // Host echo.
        assert!(!set.load(&first));

        let second = set.toggle(StatId::CrimeRate).unwrap();
        assert_eq!(second, "");
        assert!(!set.load(&second));
        assert_eq!(set, HiddenStatSet::parse(""));
    }

    #[test]
    fn test_optimistic_toggle_reconciles_with_host() {
        let mut set = HiddenStatSet::default();
        set.toggle(StatId::ParkingAvailability);
        // Host answers with a different authoritative value.
        assert!(set.load("mailAvailability"));
        assert!(!set.is_hidden(StatId::ParkingAvailability));
        assert!(set.is_hidden(StatId::MailAvailability));
    }

    #[test]
    fn test_cannot_hide_last_visible_stat() {
        let all_but_one: Vec<&str> = StatId::ALL[1..].iter().map(|id| id.as_str()).collect();
        let mut set = HiddenStatSet::parse(&all_but_one.join(","));
        assert_eq!(set.visible_count(), 1);
        assert_eq!(set.toggle(StatId::ElectricityAvailability), None);
        assert!(!set.is_hidden(StatId::ElectricityAvailability));
        // Showing another stat is still allowed.
        assert!(set.toggle(StatId::Unemployment).is_some());
        assert_eq!(set.visible_count(), 2);
    }

    #[test]
    fn test_all_hidden_from_host_push() {
        let all: Vec<&str> = StatId::ALL.iter().map(|id| id.as_str()).collect();
        let mut set = HiddenStatSet::default();
        assert!(set.load(&all.join(",")));
        assert!(set.all_hidden());
        assert!(set.reset());
        assert!(set.is_empty());
        assert!(!set.reset());
    }
}
