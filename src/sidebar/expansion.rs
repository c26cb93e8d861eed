//! Expansion state of the sidebar groups.
//!
//! At most one group is expanded at any time. The state is a single optional
//! group index, so "two groups open" cannot be represented, and every change
//! goes through `ExpansionState::transition`.

use super::menu::MenuConfig;
use crate::state::ScreenId;
use log::*;

/// Inputs that can change which group is expanded.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionEvent {
    /// The header of the group at this index was pressed.
    HeaderPressed(usize),
    /// A sub-item was selected.
    SubItemPressed,
    /// The active screen changed to a screen the sidebar did not select.
    ActiveScreenChanged(ScreenId),
}

/// Which group, if any, is currently expanded.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionState {
    expanded: Option<usize>,
}

impl ExpansionState {
    /// Return the state with every group closed.
    ///
    pub fn collapsed() -> Self {
        ExpansionState { expanded: None }
    }

    /// Return the state derived from the active screen: the group owning the
    /// screen is expanded, or everything is closed if no group owns it.
    ///
    pub fn reconciled(menu: &MenuConfig, active: ScreenId) -> Self {
        ExpansionState {
            expanded: menu.owner_of(active),
        }
    }

    pub fn expanded_group(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, group: usize) -> bool {
        self.expanded == Some(group)
    }

    pub fn is_collapsed(&self) -> bool {
        self.expanded.is_none()
    }

    /// Apply one event and return the resulting state.
    ///
    pub fn transition(self, menu: &MenuConfig, event: ExpansionEvent) -> Self {
        match event {
            ExpansionEvent::HeaderPressed(index) => match menu.group(index) {
                Some(group) if group.is_expandable() => {
                    if self.is_expanded(index) {
                        ExpansionState::collapsed()
                    } else {
                        ExpansionState {
                            expanded: Some(index),
                        }
                    }
                }
                Some(_) => ExpansionState::collapsed(),
                None => {
                    warn!("Ignoring press on unknown menu group {}", index);
                    self
                }
            },
            ExpansionEvent::SubItemPressed => ExpansionState::collapsed(),
            ExpansionEvent::ActiveScreenChanged(screen) => {
                ExpansionState::reconciled(menu, screen)
            }
        }
    }

    /// Return `(group name, expanded)` for every expandable group, in menu
    /// order.
    ///
    pub fn entries<'a>(&self, menu: &'a MenuConfig) -> Vec<(&'a str, bool)> {
        menu.groups()
            .iter()
            .enumerate()
            .filter(|(_, group)| group.is_expandable())
            .map(|(index, group)| (group.name.as_str(), self.is_expanded(index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn menu() -> MenuConfig {
        MenuConfig::poultry_farm()
    }

    fn index(menu: &MenuConfig, name: &str) -> usize {
        menu.position(name).unwrap()
    }

    #[test]
    fn collapsed_by_default() {
        assert!(ExpansionState::default().is_collapsed());
        assert_eq!(ExpansionState::default(), ExpansionState::collapsed());
    }

    #[test]
    fn reconciled_expands_owner() {
        let menu = menu();
        let state = ExpansionState::reconciled(&menu, ScreenId::FlockStockScreen);
        assert_eq!(state.expanded_group(), Some(index(&menu, "Flocks")));
    }

    #[test]
    fn reconciled_collapses_for_leaf_screen() {
        let state = ExpansionState::reconciled(&menu(), ScreenId::DashboardScreen);
        assert!(state.is_collapsed());
    }

    #[test]
    fn header_press_expands_collapsed_group() {
        let menu = menu();
        let eggs = index(&menu, "Eggs");
        let state = ExpansionState::collapsed().transition(&menu, ExpansionEvent::HeaderPressed(eggs));
        assert!(state.is_expanded(eggs));
    }

    #[test]
    fn header_press_twice_returns_to_start() {
        let menu = menu();
        let eggs = index(&menu, "Eggs");
        let start = ExpansionState::collapsed();
        let once = start.transition(&menu, ExpansionEvent::HeaderPressed(eggs));
        let twice = once.transition(&menu, ExpansionEvent::HeaderPressed(eggs));
        assert!(once.is_expanded(eggs));
        assert_eq!(twice, start);

        let expanded = ExpansionState::reconciled(&menu, ScreenId::EggSaleScreen);
        let closed = expanded.transition(&menu, ExpansionEvent::HeaderPressed(eggs));
        assert!(closed.is_collapsed());
        assert_eq!(
            closed.transition(&menu, ExpansionEvent::HeaderPressed(eggs)),
            expanded
        );
    }

    #[test]
    fn header_press_switches_groups_in_one_step() {
        let menu = menu();
        let flocks = index(&menu, "Flocks");
        let feed = index(&menu, "Feed");
        let state = ExpansionState::reconciled(&menu, ScreenId::MortalityScreen);
        let next = state.transition(&menu, ExpansionEvent::HeaderPressed(feed));
        assert!(next.is_expanded(feed));
        assert!(!next.is_expanded(flocks));
    }

    #[test]
    fn leaf_header_press_collapses_from_any_state() {
        let menu = menu();
        let dashboard = index(&menu, "Dashboard");
        let mut starts = vec![ExpansionState::collapsed()];
        for (i, group) in menu.groups().iter().enumerate() {
            if group.is_expandable() {
                starts.push(ExpansionState { expanded: Some(i) });
            }
        }
        for start in starts {
            let next = start.transition(&menu, ExpansionEvent::HeaderPressed(dashboard));
            assert!(next.is_collapsed());
        }
    }

    #[test]
    fn sub_item_press_collapses() {
        let menu = menu();
        let state = ExpansionState::reconciled(&menu, ScreenId::LedgerScreen);
        assert!(state
            .transition(&menu, ExpansionEvent::SubItemPressed)
            .is_collapsed());
    }

    #[test]
    fn active_screen_change_overrides_prior_state() {
        let menu = menu();
        for (i, group) in menu.groups().iter().enumerate() {
            for item in group.sub_items() {
                for start in [
                    ExpansionState::collapsed(),
                    ExpansionState { expanded: Some(0) },
                    ExpansionState {
                        expanded: Some(menu.len() - 1),
                    },
                ] {
                    let next =
                        start.transition(&menu, ExpansionEvent::ActiveScreenChanged(item.screen));
                    assert_eq!(next.expanded_group(), Some(i));
                }
            }
        }
    }

    #[test]
    fn unknown_group_press_is_ignored() {
        let menu = menu();
        let state = ExpansionState::reconciled(&menu, ScreenId::EggStockScreen);
        assert_eq!(
            state.transition(&menu, ExpansionEvent::HeaderPressed(menu.len() + 3)),
            state
        );
    }

    #[test]
    fn entries_report_single_expanded_group() {
        let menu = menu();
        let state = ExpansionState::reconciled(&menu, ScreenId::FlockStockScreen);
        assert_eq!(
            state.entries(&menu),
            vec![
                ("Flocks", true),
                ("Eggs", false),
                ("Vaccinations", false),
                ("Feed", false),
                ("Finance", false),
                ("Management", false),
            ]
        );
    }

    #[test]
    fn random_event_sequences_keep_mutual_exclusion() {
        let menu = menu();
        let mut rng = rand::thread_rng();
        let mut state = ExpansionState::collapsed();
        for _ in 0..2000 {
            let event = match rng.gen_range(0..3) {
                0 => ExpansionEvent::HeaderPressed(rng.gen_range(0..menu.len())),
                1 => ExpansionEvent::SubItemPressed,
                _ => ExpansionEvent::ActiveScreenChanged(
                    ScreenId::ALL[rng.gen_range(0..ScreenId::ALL.len())],
                ),
            };
            state = state.transition(&menu, event);
            let open = state
                .entries(&menu)
                .iter()
                .filter(|(_, expanded)| *expanded)
                .count();
            assert!(open <= 1);
        }
    }
}
