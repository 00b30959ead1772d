// src/records.rs
//
// Typed records produced by the extractors. All values originate as
// spreadsheet text; absent trailing columns default rather than error.
// `header()`/`to_row()` give the CSV/TSV shape, serde gives the JSON one.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Program,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Program => "program",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationStatus {
    Open,
    Closed,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Open => "OPEN",
            RegistrationStatus::Closed => "CLOSED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: String,
    pub category: EventCategory,
    pub description: String,
    pub image: String,
    pub registration_link: String,
    pub registration_status: RegistrationStatus,
    pub calendar_link: String,
    pub date: String,
}

impl Event {
    pub fn header() -> Vec<String> {
        ["Title", "Category", "Description", "Image", "Registration link",
         "Registration status", "Calendar link", "Date"]
            .map(String::from).to_vec()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            s!(self.category.as_str()),
            self.description.clone(),
            self.image.clone(),
            self.registration_link.clone(),
            s!(self.registration_status.as_str()),
            self.calendar_link.clone(),
            self.date.clone(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fanfic {
    pub author: String,
    pub title: String,
    pub description: String,
    pub cover: String,
    pub link: String,
}

impl Fanfic {
    pub fn header() -> Vec<String> {
        ["Author", "Title", "Description", "Cover", "Link"].map(String::from).to_vec()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.author.clone(),
            self.title.clone(),
            self.description.clone(),
            self.cover.clone(),
            self.link.clone(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TeamCategory {
    Faculty,
    Core,
}

impl TeamCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamCategory::Faculty => "Faculty",
            TeamCategory::Core => "Core",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub category: TeamCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl TeamMember {
    pub fn header() -> Vec<String> {
        ["Name", "Role", "Category", "Image", "LinkedIn", "GitHub"].map(String::from).to_vec()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.role.clone(),
            s!(self.category.as_str()),
            self.image.clone().unwrap_or_default(),
            self.linkedin.clone().unwrap_or_default(),
            self.github.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySize {
    Small,
    Medium,
    Large,
}

impl GallerySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySize::Small => "small",
            GallerySize::Medium => "medium",
            GallerySize::Large => "large",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    pub size: GallerySize,
}

impl GalleryItem {
    pub fn header() -> Vec<String> {
        ["Source", "Alt", "Size"].map(String::from).to_vec()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![self.src.clone(), self.alt.clone(), s!(self.size.as_str())]
    }
}

/// Singleton: title + date of the next thing worth counting down to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountdownEntry {
    pub title: String,
    pub date: String,
}

impl CountdownEntry {
    pub fn header() -> Vec<String> {
        ["Title", "Date"].map(String::from).to_vec()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![self.title.clone(), self.date.clone()]
    }
}

/// The 4-color brand palette plus logo name. The one record that outlives
/// a run: cached as JSON, last good value wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub colors: Vec<String>,
    pub logo: String,
}

impl ThemePalette {
    /// Canonical palette used whenever resolution comes up empty.
    pub fn fallback() -> Self {
        Self {
            colors: crate::theme::FALLBACK_COLORS.map(String::from).to_vec(),
            logo: s!(crate::theme::LOGO_TOKEN),
        }
    }
}
