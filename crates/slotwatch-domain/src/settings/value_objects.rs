use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;

/// The durable monitoring state: criteria plus the on/off flag.
///
/// This is the only state that survives a process restart; the timer is
/// always re-derived from it, never assumed live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSettings {
    pub criteria: Criteria,
    pub active: bool,
}

impl MonitorSettings {
    pub fn new(criteria: Criteria, active: bool) -> Self {
        Self { criteria, active }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_inactive() {
        let settings = MonitorSettings::default();
        assert!(!settings.active);
        assert!(settings.criteria.is_unconstrained());
    }
}
