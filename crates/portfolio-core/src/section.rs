//! Page sections, in display order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Portfolio,
    Skills,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id / anchor fragment
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Nav link label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// `href` of the nav link pointing here
    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Accepts `"about"` as well as `"#about"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("skills".parse::<Section>().unwrap(), Section::Skills);
        assert_eq!("#contact".parse::<Section>().unwrap(), Section::Contact);
        assert!("blog".parse::<Section>().is_err());
    }

    #[test]
    fn test_display_order() {
        let ids: Vec<_> = Section::ALL.iter().map(Section::id).collect();
        assert_eq!(ids, ["home", "about", "portfolio", "skills", "contact"]);
    }
}
