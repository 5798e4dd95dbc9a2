use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::entities::record::Record;
use crate::domain::format::clean_equip;

/// The (system, category, equipment) selection. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub system: Option<String>,
    pub category: Option<String>,
    pub equipment: Option<String>,
}

impl FilterSelection {
    pub fn matches(&self, record: &Record) -> bool {
        fn slot_matches(selected: &Option<String>, value: &str) -> bool {
            selected.as_deref().map_or(true, |wanted| wanted == value)
        }

        slot_matches(&self.system, &record.system)
            && slot_matches(&self.category, &record.category)
            && slot_matches(&self.equipment, &record.equipment)
    }

    pub fn is_unset(&self) -> bool {
        self.system.is_none() && self.category.is_none() && self.equipment.is_none()
    }
}

/// An equipment entry: `value` is the raw name used for matching, `label` is what is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentOption {
    pub value: String,
    pub label: String,
}

/// Cascading filter state: the current selection plus the option lists it allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selection: FilterSelection,
    systems: Vec<String>,
    categories: Vec<String>,
    equipment: Vec<EquipmentOption>,
}

impl FilterState {
    pub fn new(systems: &[String], rows: &[Record]) -> Self {
        Self {
            selection: FilterSelection::default(),
            systems: systems.to_vec(),
            categories: category_options(rows, None),
            equipment: Vec::new(),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn equipment(&self) -> &[EquipmentOption] {
        &self.equipment
    }

    pub fn select_system(&mut self, rows: &[Record], system: Option<String>) {
        let system = system.filter(|value| {
            let offered = self.systems.contains(value);
            if !offered {
                warn!(system = %value, "ignoring system that is not offered");
            }
            offered
        });
        debug!(system = ?system, "system filter changed");
        self.selection = FilterSelection {
            system,
            category: None,
            equipment: None,
        };
        self.categories = category_options(rows, self.selection.system.as_deref());
        self.equipment.clear();
    }

    pub fn select_category(&mut self, rows: &[Record], category: Option<String>) {
        let category = category.filter(|value| {
            let offered = self.categories.contains(value);
            if !offered {
                warn!(category = %value, "ignoring category that is not offered");
            }
            offered
        });
        debug!(category = ?category, "category filter changed");
        self.selection.category = category;
        self.selection.equipment = None;
        self.equipment = equipment_options(
            rows,
            self.selection.system.as_deref(),
            self.selection.category.as_deref(),
        );
    }

    pub fn select_equipment(&mut self, equipment: Option<String>) {
        let equipment = equipment.filter(|value| {
            let offered = self.equipment.iter().any(|option| &option.value == value);
            if !offered {
                warn!(equipment = %value, "ignoring equipment that is not offered");
            }
            offered
        });
        debug!(equipment = ?equipment, "equipment filter changed");
        self.selection.equipment = equipment;
    }

    /// Back to "everything": categories and equipment listed over all rows.
    pub fn clear(&mut self, rows: &[Record]) {
        self.select_system(rows, None);
        self.select_category(rows, None);
    }
}

fn distinct_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

pub fn category_options(rows: &[Record], system: Option<&str>) -> Vec<String> {
    distinct_non_empty(
        rows.iter()
            .filter(|row| system.map_or(true, |wanted| row.system == wanted))
            .map(|row| row.category.as_str()),
    )
}

pub fn equipment_options(
    rows: &[Record],
    system: Option<&str>,
    category: Option<&str>,
) -> Vec<EquipmentOption> {
    distinct_non_empty(
        rows.iter()
            .filter(|row| system.map_or(true, |wanted| row.system == wanted))
            .filter(|row| category.map_or(true, |wanted| row.category == wanted))
            .map(|row| row.equipment.as_str()),
    )
    .into_iter()
    .map(|value| EquipmentOption {
        label: clean_equip(&value),
        value,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(system: &str, category: &str, equipment: &str) -> Record {
        Record {
            system: system.to_string(),
            category: category.to_string(),
            equipment: equipment.to_string(),
            ..Record::default()
        }
    }

    fn sample_systems() -> Vec<String> {
        vec!["SCADA".to_string(), "BMS".to_string()]
    }

    fn sample_rows() -> Vec<Record> {
        vec![
            row("SCADA", "Network", "1.1 Core Switch"),
            row("SCADA", "Servers", "2.1 Historian"),
            row("BMS", "Network", "1.2 Edge Router"),
            row("BMS", "", "3 Chiller PLC"),
            row("SCADA", "Network", "1.1 Core Switch"),
            row("BMS", " HVAC ", ""),
        ]
    }

    #[test]
    fn initial_state_lists_all_categories_and_no_equipment() {
        let rows = sample_rows();
        let state = FilterState::new(&sample_systems(), &rows);

        assert!(state.selection().is_unset());
        assert_eq!(state.categories(), ["Network", "Servers", "HVAC"]);
        assert!(state.equipment().is_empty());
    }

    #[test]
    fn selecting_system_narrows_categories_and_resets_downstream() {
        let rows = sample_rows();
        let mut state = FilterState::new(&sample_systems(), &rows);
        state.select_category(&rows, Some("Network".to_string()));
        state.select_equipment(Some("1.1 Core Switch".to_string()));

        state.select_system(&rows, Some("BMS".to_string()));

        assert_eq!(state.categories(), ["Network", "HVAC"]);
        assert_eq!(state.selection().category, None);
        assert_eq!(state.selection().equipment, None);
        assert!(state.equipment().is_empty());

        state.select_system(&rows, None);
        assert_eq!(state.categories(), ["Network", "Servers", "HVAC"]);
    }

    #[test]
    fn selecting_category_lists_cleaned_equipment() {
        let rows = sample_rows();
        let mut state = FilterState::new(&sample_systems(), &rows);
        state.select_system(&rows, Some("SCADA".to_string()));

        state.select_category(&rows, Some("Network".to_string()));

        assert_eq!(
            state.equipment(),
            [EquipmentOption {
                value: "1.1 Core Switch".to_string(),
                label: "Core Switch".to_string(),
            }]
        );
        assert_eq!(state.selection().equipment, None);
    }

    #[test]
    fn selecting_all_categories_lists_equipment_for_the_system() {
        let rows = sample_rows();
        let mut state = FilterState::new(&sample_systems(), &rows);
        state.select_system(&rows, Some("BMS".to_string()));

        state.select_category(&rows, None);

        let values = state
            .equipment()
            .iter()
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>();
        assert_eq!(values, ["1.2 Edge Router", "3 Chiller PLC"]);
    }

    #[test]
    fn selections_outside_offered_lists_stay_unset() {
        let rows = sample_rows();
        let mut state = FilterState::new(&sample_systems(), &rows);
        state.select_system(&rows, Some("BMS".to_string()));

        state.select_category(&rows, Some("Servers".to_string()));
        assert_eq!(state.selection().category, None);

        state.select_equipment(Some("2.1 Historian".to_string()));
        assert_eq!(state.selection().equipment, None);
    }

    #[test]
    fn unknown_system_leaves_every_slot_unset() {
        let rows = sample_rows();
        let mut state = FilterState::new(&sample_systems(), &rows);
        state.select_system(&rows, Some("SCADA".to_string()));
        state.select_category(&rows, Some("Network".to_string()));

        state.select_system(&rows, Some("nope".to_string()));

        assert!(state.selection().is_unset());
        assert_eq!(state.categories(), ["Network", "Servers", "HVAC"]);
        assert!(state.equipment().is_empty());
    }

    #[test]
    fn clear_resets_selection_and_lists_everything() {
        let rows = sample_rows();
        let mut state = FilterState::new(&sample_systems(), &rows);
        state.select_system(&rows, Some("SCADA".to_string()));
        state.select_category(&rows, Some("Servers".to_string()));
        state.select_equipment(Some("2.1 Historian".to_string()));

        state.clear(&rows);

        assert!(state.selection().is_unset());
        assert_eq!(state.categories(), ["Network", "Servers", "HVAC"]);
        assert_eq!(state.equipment().len(), 4);
    }

    #[test]
    fn selection_matches_by_exact_equality() {
        let record = row("SCADA", "Network", "1.1 Core Switch");
        let mut selection = FilterSelection::default();
        assert!(selection.matches(&record));

        selection.equipment = Some("Core Switch".to_string());
        assert!(!selection.matches(&record));

        selection.equipment = Some("1.1 Core Switch".to_string());
        selection.system = Some("SCADA".to_string());
        assert!(selection.matches(&record));
    }
}
