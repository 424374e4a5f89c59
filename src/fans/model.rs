//! Fan records and the page they belong to.

use std::fmt;

/// Host prefix for profile links.
const PROFILE_LINK_PREFIX: &str = "https://www.facebook.com/";

/// A user profile: opaque id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    /// Opaque user id.
    pub id: String,
    /// Full display name.
    pub name: String,
}

impl Profile {
    /// Creates a profile.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Canonical link to this profile.
    #[must_use]
    pub fn link(&self) -> String {
        format!("{PROFILE_LINK_PREFIX}{}", self.id)
    }
}

/// How a user became a fan of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanKind {
    /// The user likes the page.
    Like,
    /// The user follows the page.
    Follow,
}

impl FanKind {
    /// Both kinds in fetch order.
    pub const ALL: [FanKind; 2] = [FanKind::Like, FanKind::Follow];

    /// Key the listing endpoint uses to select likers or followers.
    #[must_use]
    pub fn endpoint_key(self) -> &'static str {
        match self {
            Self::Like => "PEOPLE_WHO_LIKE_THIS_PAGE",
            Self::Follow => "PEOPLE_WHO_FOLLOW_THIS_PAGE",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Follow => "Follow",
        }
    }
}

impl fmt::Display for FanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user who likes or follows a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fan {
    /// Who.
    pub profile: Profile,
    /// When the relationship was created, seconds since epoch truncated to 32 bits.
    pub timestamp: i32,
    /// Which listing produced this record.
    pub kind: FanKind,
}

/// All fans of a page: likers in pagination order, then followers.
///
/// A user who both likes and follows appears once per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanCollection {
    fans: Vec<Fan>,
}

impl FanCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch, keeping order.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = Fan>) {
        self.fans.extend(batch);
    }

    /// Number of fan records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fans.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fans.is_empty()
    }

    /// Iterates records in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fan> {
        self.fans.iter()
    }

    /// Number of records of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: FanKind) -> usize {
        self.fans.iter().filter(|fan| fan.kind == kind).count()
    }

    /// Records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Fan] {
        &self.fans
    }
}

impl From<Vec<Fan>> for FanCollection {
    fn from(fans: Vec<Fan>) -> Self {
        Self { fans }
    }
}

impl IntoIterator for FanCollection {
    type Item = Fan;
    type IntoIter = std::vec::IntoIter<Fan>;

    fn into_iter(self) -> Self::IntoIter {
        self.fans.into_iter()
    }
}

impl<'a> IntoIterator for &'a FanCollection {
    type Item = &'a Fan;
    type IntoIter = std::slice::Iter<'a, Fan>;

    fn into_iter(self) -> Self::IntoIter {
        self.fans.iter()
    }
}

/// A page resolved to its internal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Internal numeric id.
    pub id: String,
    /// Human-readable name used to open the page.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(id: &str, kind: FanKind) -> Fan {
        Fan {
            profile: Profile::new(id, format!("User {id}")),
            timestamp: 1_600_000_000,
            kind,
        }
    }

    #[test]
    fn test_profile_link_concatenates_host_prefix() {
        let profile = Profile::new("100004", "Jane Doe");
        assert_eq!(profile.link(), "https://www.facebook.com/100004");
    }

    #[test]
    fn test_fan_kind_names_and_keys() {
        assert_eq!(FanKind::Like.to_string(), "Like");
        assert_eq!(FanKind::Follow.to_string(), "Follow");
        assert_eq!(FanKind::Like.endpoint_key(), "PEOPLE_WHO_LIKE_THIS_PAGE");
        assert_eq!(FanKind::Follow.endpoint_key(), "PEOPLE_WHO_FOLLOW_THIS_PAGE");
        assert_eq!(FanKind::ALL, [FanKind::Like, FanKind::Follow]);
    }

    #[test]
    fn test_collection_keeps_duplicates_across_kinds() {
        let mut fans = FanCollection::new();
        fans.extend(vec![fan("1", FanKind::Like)]);
        fans.extend(vec![fan("1", FanKind::Follow), fan("2", FanKind::Follow)]);

        assert_eq!(fans.len(), 3);
        assert_eq!(fans.count_of(FanKind::Like), 1);
        assert_eq!(fans.count_of(FanKind::Follow), 2);
        let ids: Vec<_> = fans.iter().map(|f| f.profile.id.as_str()).collect();
        assert_eq!(ids, ["1", "1", "2"]);
    }
}
