//! Itinerary sections
//!
//! A section is a free-form block of an itinerary being drafted (travel leg,
//! hotel stay, ...). Every field except the id is raw form text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::SectionId;

pub const DEFAULT_SECTION_DESCRIPTION: &str = "All the necessary information about this section. \
This can be anything like travel section, hotel, or any other activity.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text such as "Jun 1 to Jun 4"
    #[serde(default)]
    pub date_range: String,
    /// Raw budget entry; parsed only when totals are requested
    #[serde(default)]
    pub budget: String,
}

impl Section {
    pub fn new(id: SectionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: DEFAULT_SECTION_DESCRIPTION.to_string(),
            date_range: String::new(),
            budget: String::new(),
        }
    }

    pub fn field(&self, field: SectionField) -> &str {
        match field {
            SectionField::Title => &self.title,
            SectionField::Description => &self.description,
            SectionField::DateRange => &self.date_range,
            SectionField::Budget => &self.budget,
        }
    }

    pub(crate) fn field_mut(&mut self, field: SectionField) -> &mut String {
        match field {
            SectionField::Title => &mut self.title,
            SectionField::Description => &mut self.description,
            SectionField::DateRange => &mut self.date_range,
            SectionField::Budget => &mut self.budget,
        }
    }
}

/// The editable fields of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionField {
    Title,
    Description,
    DateRange,
    Budget,
}

impl fmt::Display for SectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DateRange => "date_range",
            Self::Budget => "budget",
        };
        f.write_str(name)
    }
}

impl FromStr for SectionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "date_range" | "dates" => Ok(Self::DateRange),
            "budget" => Ok(Self::Budget),
            other => Err(format!("unknown section field: {}", other)),
        }
    }
}
