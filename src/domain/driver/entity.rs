//! Driver entity and related types

use crate::domain::team::TeamId;

/// Driver identifier, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(i64);

impl DriverId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Titular flag, kept in the form it was submitted or read back in
///
/// The store column is an integer and accepts any value it can hold. Only
/// `true` or the stored value `1` mean titular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitularFlag {
    Bool(bool),
    Stored(i64),
}

impl TitularFlag {
    pub fn is_titular(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Stored(value) => *value == 1,
        }
    }

    /// Value written to the store's integer column
    pub fn stored(&self) -> i64 {
        match self {
            Self::Bool(flag) => i64::from(*flag),
            Self::Stored(value) => *value,
        }
    }
}

impl Default for TitularFlag {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<bool> for TitularFlag {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for TitularFlag {
    fn from(value: i64) -> Self {
        Self::Stored(value)
    }
}

/// Fields submitted when creating or replacing a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub name: String,
    pub team_id: TeamId,
    pub titular: TitularFlag,
}

impl NewDriver {
    pub fn new(name: impl Into<String>, team_id: TeamId, titular: impl Into<TitularFlag>) -> Self {
        Self {
            name: name.into(),
            team_id,
            titular: titular.into(),
        }
    }

    /// Merge a store-assigned id into the submitted fields
    pub fn into_driver(self, id: DriverId) -> Driver {
        Driver::new(id, self.name, self.team_id, self.titular)
    }
}

/// Driver entity
///
/// `team_id` is a plain reference; nothing checks that the team exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    name: String,
    team_id: TeamId,
    titular: TitularFlag,
}

impl Driver {
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        team_id: TeamId,
        titular: impl Into<TitularFlag>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            team_id,
            titular: titular.into(),
        }
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// The flag as submitted or as stored
    pub fn titular(&self) -> TitularFlag {
        self.titular
    }

    pub fn is_titular(&self) -> bool {
        self.titular.is_titular()
    }
}

/// Driver as nested under its team: the team id is implied by nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    pub id: DriverId,
    pub name: String,
    pub is_titular: bool,
}

impl From<&Driver> for DriverSummary {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id(),
            name: driver.name().to_string(),
            is_titular: driver.is_titular(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_is_titular_when_stored() {
        assert!(TitularFlag::Stored(1).is_titular());
        assert!(!TitularFlag::Stored(0).is_titular());
        assert!(!TitularFlag::Stored(2).is_titular());
        assert!(!TitularFlag::Stored(-1).is_titular());
    }

    #[test]
    fn test_stored_value() {
        assert_eq!(TitularFlag::Bool(true).stored(), 1);
        assert_eq!(TitularFlag::Bool(false).stored(), 0);
        assert_eq!(TitularFlag::Stored(2).stored(), 2);
        assert_eq!(TitularFlag::default(), TitularFlag::Bool(false));
    }

    #[test]
    fn test_driver_keeps_submitted_form() {
        let driver = NewDriver::new("Yuki Tsunoda", TeamId::new(1), 1_i64)
            .into_driver(DriverId::new(22));

        assert_eq!(driver.titular(), TitularFlag::Stored(1));
        assert!(driver.is_titular());
    }

    #[test]
    fn test_new_driver_into_driver() {
        let driver = NewDriver::new("Max Verstappen", TeamId::new(1), true)
            .into_driver(DriverId::new(33));

        assert_eq!(driver.id(), DriverId::new(33));
        assert_eq!(driver.name(), "Max Verstappen");
        assert_eq!(driver.team_id(), TeamId::new(1));
        assert!(driver.is_titular());
    }

    #[test]
    fn test_summary_drops_team_reference() {
        let driver = Driver::new(DriverId::new(2), "Liam Lawson", TeamId::new(1), false);
        let summary = DriverSummary::from(&driver);

        assert_eq!(summary.id, DriverId::new(2));
        assert_eq!(summary.name, "Liam Lawson");
        assert!(!summary.is_titular);
    }
}
