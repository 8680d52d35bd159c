//! User settings stored alongside the entries.
//!
//! Every field carries a serde default so settings written by older
//! versions load with the missing keys back-filled (forward-compatible
//! merge, no schema version on disk).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub enabled_sections: EnabledSections,
    pub theme: Theme,
    pub reminder_time: Option<String>, // "HH:MM"
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_sections: EnabledSections::default(),
            theme: Theme::System,
            reminder_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnabledSections {
    pub day_rating: bool,
    pub energy: bool,
    pub accomplishments: bool,
    pub challenges: bool,
    pub notes: bool,
}

impl Default for EnabledSections {
    fn default() -> Self {
        Self {
            day_rating: true,
            energy: true,
            accomplishments: true,
            challenges: true,
            notes: true,
        }
    }
}

impl EnabledSections {
    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::DayRating => self.day_rating,
            Section::Energy => self.energy,
            Section::Accomplishments => self.accomplishments,
            Section::Challenges => self.challenges,
            Section::Notes => self.notes,
        }
    }

    pub fn set(&mut self, section: Section, enabled: bool) {
        match section {
            Section::DayRating => self.day_rating = enabled,
            Section::Energy => self.energy = enabled,
            Section::Accomplishments => self.accomplishments = enabled,
            Section::Challenges => self.challenges = enabled,
            Section::Notes => self.notes = enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

/// Toggleable form sections, addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    DayRating,
    Energy,
    Accomplishments,
    Challenges,
    Notes,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::DayRating,
        Section::Energy,
        Section::Accomplishments,
        Section::Challenges,
        Section::Notes,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::DayRating => "How Was Your Day",
            Section::Energy => "Energy Level",
            Section::Accomplishments => "Accomplishments",
            Section::Challenges => "Challenges",
            Section::Notes => "Additional Notes",
        }
    }
}
