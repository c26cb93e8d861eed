//! Sidebar navigation and expansion controller.
//!
//! The controller turns menu presses into either a navigation request (leaf
//! groups and sub-items) or a local expansion toggle (expandable groups). It
//! also reacts to changes of the externally owned active screen so that back
//! navigation or a deep link re-opens the group owning the new screen.

use super::error::MenuConfigError;
use super::expansion::{ExpansionEvent, ExpansionState};
use super::menu::MenuConfig;
use crate::state::ScreenId;
use log::*;
use std::collections::VecDeque;

/// The owner of the active screen and of the navigation capability.
///
/// The controller never writes the active screen itself; it reports the new
/// value and asks for the transition through this trait.
pub trait SidebarHost {
    /// Record `screen` as the new active screen.
    fn active_screen_changed(&mut self, screen: ScreenId);

    /// Ask the navigator to show `screen`. Returns true if the transition
    /// will be confirmed later through `sync_active_screen`.
    fn navigate_to(&mut self, screen: ScreenId) -> bool;

    /// Show the logout confirmation dialog.
    fn request_logout(&mut self);
}

/// A row currently shown in the sidebar.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Group(usize),
    SubItem { group: usize, item: usize },
    Logout,
}

/// Owns the expansion state and the keyboard cursor over the sidebar rows.
///
#[derive(Debug, Clone)]
pub struct SidebarController {
    menu: MenuConfig,
    expansion: ExpansionState,
    observed_screen: ScreenId,
    /// Screens selected here whose navigation is not confirmed yet, oldest
    /// first.
    pending: VecDeque<ScreenId>,
    cursor: usize,
}

impl SidebarController {
    /// Validate `menu` and return a controller reconciled against the initial
    /// active screen.
    ///
    pub fn new(menu: MenuConfig, active: ScreenId) -> Result<Self, MenuConfigError> {
        menu.validate()?;
        let expansion = ExpansionState::reconciled(&menu, active);
        let mut controller = SidebarController {
            menu,
            expansion,
            observed_screen: active,
            pending: VecDeque::new(),
            cursor: 0,
        };
        if let Some(group) = expansion.expanded_group() {
            controller.select_row(SidebarRow::Group(group));
        }
        debug!(
            "Sidebar mounted on {} with group {:?} expanded",
            active,
            controller.expanded_group_name()
        );
        Ok(controller)
    }

    pub fn menu(&self) -> &MenuConfig {
        &self.menu
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    /// Return the name of the expanded group, if any.
    ///
    pub fn expanded_group_name(&self) -> Option<&str> {
        self.expansion
            .expanded_group()
            .and_then(|index| self.menu.group(index))
            .map(|group| group.name.as_str())
    }

    /// React to the current active screen. The expansion is re-derived only
    /// when the screen differs from the last one the controller saw and is
    /// not the confirmation of a selection made in the sidebar.
    ///
    /// Returns false if `active` confirms a selection that a later one has
    /// already superseded, in which case the caller should keep showing the
    /// newer screen.
    ///
    pub fn sync_active_screen(&mut self, active: ScreenId) -> bool {
        if self.pending.front() == Some(&active) {
            self.pending.pop_front();
            if !self.pending.is_empty() {
                debug!("Ignoring superseded confirmation of {}", active);
                return false;
            }
            self.observed_screen = active;
            return true;
        }
        if active == self.observed_screen {
            return true;
        }
        self.observed_screen = active;
        self.apply(ExpansionEvent::ActiveScreenChanged(active));
        true
    }

    /// Return the number of sidebar selections still awaiting confirmation.
    ///
    pub fn pending_confirmations(&self) -> usize {
        self.pending.len()
    }

    /// Handle a press on the header of the group at `group`.
    ///
    pub fn on_group_header_press(&mut self, group: usize, host: &mut impl SidebarHost) {
        let target = match self.menu.group(group) {
            Some(menu_group) => menu_group.direct_screen(),
            None => {
                warn!("Ignoring press on unknown menu group {}", group);
                return;
            }
        };
        if let Some(screen) = target {
            self.select_screen(screen, host);
        }
        self.apply(ExpansionEvent::HeaderPressed(group));
    }

    /// Handle a press on sub-item `item` of the group at `group`. The menu
    /// closes after the selection.
    ///
    pub fn on_sub_item_press(&mut self, group: usize, item: usize, host: &mut impl SidebarHost) {
        let screen = match self
            .menu
            .group(group)
            .and_then(|menu_group| menu_group.sub_items().get(item))
        {
            Some(sub_item) => sub_item.screen,
            None => {
                warn!("Ignoring press on unknown sub-item {} of group {}", item, group);
                return;
            }
        };
        self.select_screen(screen, host);
        self.apply(ExpansionEvent::SubItemPressed);
    }

    /// Returns true if the header of `group` should be drawn as active.
    ///
    pub fn is_group_highlighted(&self, group: usize, active: ScreenId) -> bool {
        self.expansion.is_expanded(group)
            || self
                .menu
                .group(group)
                .and_then(|menu_group| menu_group.direct_screen())
                == Some(active)
    }

    /// Return the rows currently shown: every group header, the sub-items of
    /// the expanded group under its header, then the logout row.
    ///
    pub fn visible_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for (index, group) in self.menu.groups().iter().enumerate() {
            rows.push(SidebarRow::Group(index));
            if self.expansion.is_expanded(index) {
                rows.extend(
                    (0..group.sub_items().len())
                        .map(|item| SidebarRow::SubItem { group: index, item }),
                );
            }
        }
        rows.push(SidebarRow::Logout);
        rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<SidebarRow> {
        self.visible_rows().get(self.cursor).copied()
    }

    /// Move the cursor down, wrapping to the first row.
    ///
    pub fn next_row(&mut self) -> &mut Self {
        let len = self.visible_rows().len();
        self.cursor = if self.cursor + 1 < len { self.cursor + 1 } else { 0 };
        self
    }

    /// Move the cursor up, wrapping to the last row.
    ///
    pub fn previous_row(&mut self) -> &mut Self {
        let len = self.visible_rows().len();
        self.cursor = if self.cursor > 0 { self.cursor - 1 } else { len - 1 };
        self
    }

    /// Press the row under the cursor.
    ///
    pub fn press_selected(&mut self, host: &mut impl SidebarHost) {
        match self.selected_row() {
            Some(SidebarRow::Group(group)) => self.on_group_header_press(group, host),
            Some(SidebarRow::SubItem { group, item }) => self.on_sub_item_press(group, item, host),
            Some(SidebarRow::Logout) => host.request_logout(),
            None => {}
        }
    }

    fn select_screen(&mut self, screen: ScreenId, host: &mut impl SidebarHost) {
        self.observed_screen = screen;
        host.active_screen_changed(screen);
        if host.navigate_to(screen) {
            self.pending.push_back(screen);
        }
    }

    fn apply(&mut self, event: ExpansionEvent) {
        let previous_row = self.selected_row();
        self.expansion = self.expansion.transition(&self.menu, event);
        debug!(
            "Sidebar {:?} -> expanded {:?}",
            event,
            self.expanded_group_name()
        );
        match previous_row {
            Some(SidebarRow::SubItem { group, item }) => {
                if !self.select_row(SidebarRow::SubItem { group, item }) {
                    self.select_row(SidebarRow::Group(group));
                }
            }
            Some(row) => {
                self.select_row(row);
            }
            None => self.cursor = 0,
        }
    }

    /// Move the cursor onto `row` if it is visible. Returns whether it was.
    ///
    fn select_row(&mut self, row: SidebarRow) -> bool {
        match self.visible_rows().iter().position(|visible| *visible == row) {
            Some(position) => {
                self.cursor = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[derive(Default)]
    struct RecordingHost {
        active_changes: Vec<ScreenId>,
        navigations: Vec<ScreenId>,
        logout_requests: usize,
    }

    impl SidebarHost for RecordingHost {
        fn active_screen_changed(&mut self, screen: ScreenId) {
            self.active_changes.push(screen);
        }

        fn navigate_to(&mut self, screen: ScreenId) -> bool {
            self.navigations.push(screen);
            true
        }

        fn request_logout(&mut self) {
            self.logout_requests += 1;
        }
    }

    fn controller(active: ScreenId) -> SidebarController {
        SidebarController::new(MenuConfig::poultry_farm(), active).unwrap()
    }

    fn group(controller: &SidebarController, name: &str) -> usize {
        controller.menu().position(name).unwrap()
    }

    fn item(controller: &SidebarController, group: usize, label: &str) -> usize {
        controller.menu().group(group).unwrap()
            .sub_items()
            .iter()
            .position(|item| item.label == label)
            .unwrap()
    }

    #[test]
    fn new_rejects_invalid_menu() {
        let result = SidebarController::new(MenuConfig::new(vec![]), ScreenId::DashboardScreen);
        assert_eq!(result.err(), Some(MenuConfigError::Empty));
    }

    #[test]
    fn mount_expands_group_of_initial_screen() {
        let sidebar = controller(ScreenId::FlockStockScreen);
        assert_eq!(sidebar.expanded_group_name(), Some("Flocks"));
        assert_eq!(
            sidebar.selected_row(),
            Some(SidebarRow::Group(group(&sidebar, "Flocks")))
        );
    }

    #[test]
    fn mount_on_dashboard_is_collapsed() {
        let sidebar = controller(ScreenId::DashboardScreen);
        assert!(sidebar.expansion().is_collapsed());
        assert_eq!(sidebar.cursor(), 0);
    }

    #[test]
    fn farm_scenario() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::FlockStockScreen);
        let menu = sidebar.menu().clone();
        assert_eq!(
            sidebar.expansion().entries(&menu),
            vec![
                ("Flocks", true),
                ("Eggs", false),
                ("Vaccinations", false),
                ("Feed", false),
                ("Finance", false),
                ("Management", false),
            ]
        );

        let eggs = group(&sidebar, "Eggs");
        sidebar.on_group_header_press(eggs, &mut host);
        assert_eq!(
            sidebar.expansion().entries(&menu),
            vec![
                ("Flocks", false),
                ("Eggs", true),
                ("Vaccinations", false),
                ("Feed", false),
                ("Finance", false),
                ("Management", false),
            ]
        );
        assert!(host.active_changes.is_empty());
        assert!(host.navigations.is_empty());

        let egg_sale = item(&sidebar, eggs, "Egg Sale");
        sidebar.on_sub_item_press(eggs, egg_sale, &mut host);
        assert_eq!(host.active_changes, vec![ScreenId::EggSaleScreen]);
        assert_eq!(host.navigations, vec![ScreenId::EggSaleScreen]);
        assert!(sidebar.expansion().is_collapsed());

        // the shell feeds the new active screen back
        sidebar.sync_active_screen(ScreenId::EggSaleScreen);
        assert!(sidebar.expansion().is_collapsed());
        assert_eq!(host.active_changes.len(), 1);
        assert_eq!(host.navigations.len(), 1);
    }

    #[test]
    fn leaf_header_press_navigates_and_collapses() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::FeedStockScreen);
        let dashboard = group(&sidebar, "Dashboard");
        sidebar.on_group_header_press(dashboard, &mut host);
        assert!(sidebar.expansion().is_collapsed());
        assert_eq!(host.active_changes, vec![ScreenId::DashboardScreen]);
        assert_eq!(host.navigations, vec![ScreenId::DashboardScreen]);
    }

    #[test]
    fn expandable_header_press_does_not_navigate() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let finance = group(&sidebar, "Finance");
        sidebar.on_group_header_press(finance, &mut host);
        sidebar.on_group_header_press(finance, &mut host);
        assert!(sidebar.expansion().is_collapsed());
        assert!(host.navigations.is_empty());
        assert!(host.active_changes.is_empty());
    }

    #[test]
    fn external_change_reopens_owning_group() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let vaccinations = group(&sidebar, "Vaccinations");
        sidebar.on_group_header_press(group(&sidebar, "Feed"), &mut host);

        sidebar.sync_active_screen(ScreenId::VaccinationRecordScreen);
        assert_eq!(sidebar.expansion().expanded_group(), Some(vaccinations));

        sidebar.sync_active_screen(ScreenId::DashboardScreen);
        assert!(sidebar.expansion().is_collapsed());
    }

    #[test]
    fn external_change_to_each_sub_screen_expands_its_group() {
        let mut host = RecordingHost::default();
        let menu = MenuConfig::poultry_farm();
        for (index, menu_group) in menu.groups().iter().enumerate() {
            for sub_item in menu_group.sub_items() {
                let mut sidebar = controller(ScreenId::DashboardScreen);
                sidebar.on_group_header_press(menu.len() - 1, &mut host);
                sidebar.sync_active_screen(sub_item.screen);
                assert_eq!(sidebar.expansion().expanded_group(), Some(index));
            }
        }
    }

    #[test]
    fn repeated_sync_with_same_screen_is_noop() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::EggStockScreen);
        let eggs = group(&sidebar, "Eggs");
        sidebar.on_group_header_press(eggs, &mut host);
        assert!(sidebar.expansion().is_collapsed());
        sidebar.sync_active_screen(ScreenId::EggStockScreen);
        assert!(sidebar.expansion().is_collapsed());
    }

    #[test]
    fn highlight_follows_expansion_or_direct_screen() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let dashboard = group(&sidebar, "Dashboard");
        let flocks = group(&sidebar, "Flocks");
        assert!(sidebar.is_group_highlighted(dashboard, ScreenId::DashboardScreen));
        assert!(!sidebar.is_group_highlighted(flocks, ScreenId::DashboardScreen));

        sidebar.on_group_header_press(flocks, &mut host);
        assert!(sidebar.is_group_highlighted(flocks, ScreenId::DashboardScreen));
        assert!(!sidebar.is_group_highlighted(dashboard, ScreenId::FlocksScreen));
    }

    #[test]
    fn visible_rows_include_expanded_sub_items() {
        let sidebar = controller(ScreenId::DashboardScreen);
        let collapsed = sidebar.visible_rows();
        assert_eq!(collapsed.len(), sidebar.menu().len() + 1);
        assert_eq!(collapsed.last(), Some(&SidebarRow::Logout));

        let sidebar = controller(ScreenId::EggSaleScreen);
        let eggs = group(&sidebar, "Eggs");
        let rows = sidebar.visible_rows();
        assert_eq!(rows.len(), sidebar.menu().len() + 1 + 3);
        assert_eq!(rows[eggs], SidebarRow::Group(eggs));
        assert_eq!(rows[eggs + 1], SidebarRow::SubItem { group: eggs, item: 0 });
        assert_eq!(rows[eggs + 3], SidebarRow::SubItem { group: eggs, item: 2 });
    }

    #[test]
    fn cursor_wraps_around() {
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let len = sidebar.visible_rows().len();
        sidebar.previous_row();
        assert_eq!(sidebar.cursor(), len - 1);
        assert_eq!(sidebar.selected_row(), Some(SidebarRow::Logout));
        sidebar.next_row();
        assert_eq!(sidebar.cursor(), 0);
    }

    #[test]
    fn keyboard_selection_of_sub_item() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let flocks = group(&sidebar, "Flocks");

        sidebar.next_row();
        assert_eq!(sidebar.selected_row(), Some(SidebarRow::Group(flocks)));
        sidebar.press_selected(&mut host);
        assert_eq!(sidebar.expanded_group_name(), Some("Flocks"));
        assert_eq!(sidebar.selected_row(), Some(SidebarRow::Group(flocks)));

        sidebar.next_row().next_row();
        assert_eq!(
            sidebar.selected_row(),
            Some(SidebarRow::SubItem { group: flocks, item: 1 })
        );
        sidebar.press_selected(&mut host);
        assert_eq!(host.navigations, vec![ScreenId::FlockStockScreen]);
        assert!(sidebar.expansion().is_collapsed());
        assert_eq!(sidebar.selected_row(), Some(SidebarRow::Group(flocks)));
    }

    #[test]
    fn cursor_stays_on_group_when_switching() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::FlocksScreen);
        let feed = group(&sidebar, "Feed");
        while sidebar.selected_row() != Some(SidebarRow::Group(feed)) {
            sidebar.next_row();
        }
        sidebar.press_selected(&mut host);
        assert_eq!(sidebar.expanded_group_name(), Some("Feed"));
        assert_eq!(sidebar.selected_row(), Some(SidebarRow::Group(feed)));
    }

    #[test]
    fn logout_row_requests_logout() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let expansion = sidebar.expansion();
        sidebar.previous_row();
        sidebar.press_selected(&mut host);
        assert_eq!(host.logout_requests, 1);
        assert!(host.navigations.is_empty());
        assert_eq!(sidebar.expansion(), expansion);
    }

    #[test]
    fn unknown_presses_are_ignored() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::EggSaleScreen);
        let expansion = sidebar.expansion();
        sidebar.on_group_header_press(99, &mut host);
        sidebar.on_sub_item_press(0, 0, &mut host);
        sidebar.on_sub_item_press(group(&sidebar, "Eggs"), 42, &mut host);
        assert_eq!(sidebar.expansion(), expansion);
        assert!(host.navigations.is_empty());
    }

    #[test]
    fn queued_selections_stay_collapsed_when_confirmed_late() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let flocks = group(&sidebar, "Flocks");
        let eggs = group(&sidebar, "Eggs");

        sidebar.on_group_header_press(flocks, &mut host);
        let mortality = item(&sidebar, flocks, "Mortality");
        sidebar.on_sub_item_press(flocks, mortality, &mut host);
        sidebar.on_group_header_press(eggs, &mut host);
        let egg_sale = item(&sidebar, eggs, "Egg Sale");
        sidebar.on_sub_item_press(eggs, egg_sale, &mut host);
        assert_eq!(
            host.navigations,
            vec![ScreenId::MortalityScreen, ScreenId::EggSaleScreen]
        );
        assert_eq!(sidebar.pending_confirmations(), 2);

        // confirmations arrive in request order
        assert!(!sidebar.sync_active_screen(ScreenId::MortalityScreen));
        assert!(sidebar.expansion().is_collapsed());
        assert!(sidebar.sync_active_screen(ScreenId::EggSaleScreen));
        assert!(sidebar.expansion().is_collapsed());
        assert_eq!(sidebar.pending_confirmations(), 0);

        // later foreign changes still re-derive
        assert!(sidebar.sync_active_screen(ScreenId::MortalityScreen));
        assert_eq!(sidebar.expanded_group_name(), Some("Flocks"));
    }

    #[test]
    fn unconfirmed_selection_is_not_queued() {
        struct DetachedHost;

        impl SidebarHost for DetachedHost {
            fn active_screen_changed(&mut self, _screen: ScreenId) {}

            fn navigate_to(&mut self, _screen: ScreenId) -> bool {
                false
            }

            fn request_logout(&mut self) {}
        }

        let mut sidebar = controller(ScreenId::DashboardScreen);
        let feed = group(&sidebar, "Feed");
        sidebar.on_group_header_press(feed, &mut DetachedHost);
        sidebar.on_sub_item_press(feed, 0, &mut DetachedHost);
        assert_eq!(sidebar.pending_confirmations(), 0);

        sidebar.sync_active_screen(ScreenId::DashboardScreen);
        sidebar.sync_active_screen(ScreenId::FeedStockScreen);
        assert_eq!(sidebar.expanded_group_name(), Some("Feed"));
    }

    #[test]
    fn random_interaction_keeps_invariants() {
        let mut host = RecordingHost::default();
        let mut sidebar = controller(ScreenId::DashboardScreen);
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            match rng.gen_range(0..5) {
                0 => sidebar.on_group_header_press(rng.gen_range(0..sidebar.menu().len()), &mut host),
                1 => {
                    sidebar.sync_active_screen(ScreenId::ALL[rng.gen_range(0..ScreenId::ALL.len())]);
                }
                2 => {
                    sidebar.next_row();
                }
                3 => {
                    sidebar.previous_row();
                }
                _ => sidebar.press_selected(&mut host),
            }
            let menu = sidebar.menu().clone();
            let open = sidebar
                .expansion()
                .entries(&menu)
                .iter()
                .filter(|(_, expanded)| *expanded)
                .count();
            assert!(open <= 1);
            assert!(sidebar.cursor() < sidebar.visible_rows().len());
        }
    }
}
