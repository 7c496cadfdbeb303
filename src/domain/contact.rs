//! Contact domain model and avatar codes.
//!
//! This module defines the core `Contact` type representing one directory entry,
//! together with the `AvatarCode` enum mapping wire codes to the five fixed
//! avatars a contact card can display. Contacts are append-only for the session
//! lifetime: they are created by form submission or loaded from the fixture/fetch
//! payload, and never updated or deleted.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Avatar selection for a contact card.
///
/// Each variant corresponds to one of the five fixed avatar images of the
/// directory. On the wire (fixture file and fetch payload) avatars are encoded
/// as short string codes; any unrecognized code deserializes to [`AvatarCode::Default`],
/// mirroring the card renderer's fallback behavior.
///
/// # Wire codes
///
/// | Variant       | Code |
/// |---------------|------|
/// | `Default`     | `""` |
/// | `Female`      | `"f"` |
/// | `Male`        | `"m"` |
/// | `ElderFemale` | `"ef"` |
/// | `ElderMale`   | `"em"` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarCode {
    /// Placeholder avatar used when no specific avatar was chosen.
    #[default]
    Default,
    /// Female avatar.
    Female,
    /// Male avatar.
    Male,
    /// Elder female avatar.
    ElderFemale,
    /// Elder male avatar.
    ElderMale,
}

impl AvatarCode {
    /// All avatar codes in form-selection order.
    ///
    /// Used by the form's avatar field to cycle through the available avatars.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Female,
        Self::Male,
        Self::ElderFemale,
        Self::ElderMale,
    ];

    /// Parses a wire code into an avatar code.
    ///
    /// Unknown codes fall back to [`AvatarCode::Default`] instead of failing,
    /// so a fixture or fetch payload with unexpected avatar values still
    /// produces a renderable contact.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::domain::AvatarCode;
    ///
    /// assert_eq!(AvatarCode::from_code("f"), AvatarCode::Female);
    /// assert_eq!(AvatarCode::from_code("em"), AvatarCode::ElderMale);
    /// assert_eq!(AvatarCode::from_code("bogus"), AvatarCode::Default);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "f" => Self::Female,
            "m" => Self::Male,
            "ef" => Self::ElderFemale,
            "em" => Self::ElderMale,
            _ => Self::Default,
        }
    }

    /// Returns the wire code for this avatar.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Female => "f",
            Self::Male => "m",
            Self::ElderFemale => "ef",
            Self::ElderMale => "em",
        }
    }

    /// Returns the short glyph shown in the card's avatar slot.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Default => "( ? )",
            Self::Female => "( F )",
            Self::Male => "( M )",
            Self::ElderFemale => "( EF )",
            Self::ElderMale => "( EM )",
        }
    }

    /// Returns the human-readable label shown in the avatar selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Placeholder",
            Self::Female => "Female",
            Self::Male => "Male",
            Self::ElderFemale => "Elder female",
            Self::ElderMale => "Elder male",
        }
    }

    /// Returns the next avatar in selection order, wrapping around.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::domain::AvatarCode;
    ///
    /// assert_eq!(AvatarCode::Default.next(), AvatarCode::Female);
    /// assert_eq!(AvatarCode::ElderMale.next(), AvatarCode::Default);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Default => Self::Female,
            Self::Female => Self::Male,
            Self::Male => Self::ElderFemale,
            Self::ElderFemale => Self::ElderMale,
            Self::ElderMale => Self::Default,
        }
    }
}

impl Serialize for AvatarCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AvatarCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// Represents one entry in the contact directory.
///
/// Contacts carry a session-unique numeric id (timestamp-derived for
/// form-submitted contacts), display fields, and an avatar selection. The
/// struct deserializes directly from the bundled fixture and from the fetch
/// payload; a missing `avatar` field defaults to [`AvatarCode::Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier within the session.
    pub id: i64,
    /// Display name, at least two characters for form-created contacts.
    pub name: String,
    /// Phone number, free-form.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Avatar selection for the contact card.
    #[serde(default)]
    pub avatar: AvatarCode,
}

impl Contact {
    /// Returns whether this contact matches a search query.
    ///
    /// A contact matches when its name or phone contains the query as a
    /// case-insensitive substring. The caller passes the query already
    /// lowercased so filtering a list lowercases it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::domain::{AvatarCode, Contact};
    ///
    /// let contact = Contact {
    ///     id: 1,
    ///     name: "Jo Smith".to_string(),
    ///     phone: "555-1234".to_string(),
    ///     email: "jo@example.com".to_string(),
    ///     avatar: AvatarCode::Default,
    /// };
    ///
    /// assert!(contact.matches_query("smith"));
    /// assert!(contact.matches_query("555-12"));
    /// assert!(!contact.matches_query("jo@example.com"));
    /// ```
    #[must_use]
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.phone.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str) -> Contact {
        Contact {
            id: 1,
            name: name.to_string(),
            phone: phone.to_string(),
            email: "test@example.com".to_string(),
            avatar: AvatarCode::Default,
        }
    }

    #[test]
    fn unknown_avatar_code_falls_back_to_default() {
        assert_eq!(AvatarCode::from_code("x"), AvatarCode::Default);
        assert_eq!(AvatarCode::from_code(""), AvatarCode::Default);
    }

    #[test]
    fn avatar_cycle_visits_all_variants() {
        let mut seen = vec![];
        let mut current = AvatarCode::Default;
        for _ in 0..AvatarCode::ALL.len() {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(current, AvatarCode::Default);
        assert_eq!(seen, AvatarCode::ALL.to_vec());
    }

    #[test]
    fn contact_deserializes_with_unknown_avatar() {
        let json = r#"{"id": 3, "name": "Ada", "phone": "555", "email": "ada@x.com", "avatar": "zz"}"#;
        let parsed: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.avatar, AvatarCode::Default);
    }

    #[test]
    fn contact_deserializes_without_avatar_field() {
        let json = r#"{"id": 4, "name": "Ada", "phone": "555", "email": "ada@x.com"}"#;
        let parsed: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.avatar, AvatarCode::Default);
    }

    #[test]
    fn query_matches_name_and_phone_case_insensitively() {
        let c = contact("Grace Hopper", "202-555-0143");
        assert!(c.matches_query("grace"));
        assert!(c.matches_query("hOpPeR".to_lowercase().as_str()));
        assert!(c.matches_query("555-01"));
        assert!(!c.matches_query("turing"));
    }
}
