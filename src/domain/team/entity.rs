//! Team entity and related types

use crate::domain::driver::DriverSummary;

/// Team identifier, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields submitted when creating or replacing a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Merge a store-assigned id into the submitted fields
    pub fn into_team(self, id: TeamId) -> Team {
        Team::new(id, self.name)
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Read-only view of a team nested with its drivers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWithDrivers {
    team: Team,
    drivers: Vec<DriverSummary>,
}

impl TeamWithDrivers {
    pub fn new(team: Team, drivers: Vec<DriverSummary>) -> Self {
        Self { team, drivers }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn drivers(&self) -> &[DriverSummary] {
        &self.drivers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_into_team_keeps_fields() {
        let team = NewTeam::new("Red Bull Racing").into_team(TeamId::new(4));

        assert_eq!(team.id(), TeamId::new(4));
        assert_eq!(team.name(), "Red Bull Racing");
    }

    #[test]
    fn test_team_with_drivers_starts_with_given_roster() {
        let team = Team::new(TeamId::new(1), "McLaren");
        let view = TeamWithDrivers::new(team.clone(), Vec::new());

        assert_eq!(view.team(), &team);
        assert!(view.drivers().is_empty());
    }
}
