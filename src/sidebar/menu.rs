//! Sidebar menu configuration.
//!
//! A menu is an ordered list of groups. A group either navigates directly to a
//! screen (a leaf group such as the dashboard) or expands into an ordered list
//! of sub-items, each of which navigates to exactly one screen.

use super::error::MenuConfigError;
use crate::state::ScreenId;
use std::collections::{HashMap, HashSet};

/// Opaque icon handle. The sidebar never interprets it; the renderer prints it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Icon(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }
}

/// A navigation target nested under an expandable group.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItem {
    pub label: String,
    pub icon: Icon,
    pub screen: ScreenId,
}

impl SubItem {
    pub fn new(label: impl Into<String>, icon: Icon, screen: ScreenId) -> Self {
        SubItem {
            label: label.into(),
            icon,
            screen,
        }
    }
}

/// What pressing a group header does.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// Navigates straight to a screen.
    Leaf(ScreenId),
    /// Expands to reveal sub-items.
    Expandable(Vec<SubItem>),
}

/// A top-level sidebar entry.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub name: String,
    pub icon: Icon,
    pub kind: GroupKind,
}

impl MenuGroup {
    /// Return a group that navigates directly to `screen`.
    ///
    pub fn leaf(name: impl Into<String>, icon: Icon, screen: ScreenId) -> Self {
        MenuGroup {
            name: name.into(),
            icon,
            kind: GroupKind::Leaf(screen),
        }
    }

    /// Return a group that expands into `items`.
    ///
    pub fn expandable(name: impl Into<String>, icon: Icon, items: Vec<SubItem>) -> Self {
        MenuGroup {
            name: name.into(),
            icon,
            kind: GroupKind::Expandable(items),
        }
    }

    pub fn direct_screen(&self) -> Option<ScreenId> {
        match self.kind {
            GroupKind::Leaf(screen) => Some(screen),
            GroupKind::Expandable(_) => None,
        }
    }

    pub fn sub_items(&self) -> &[SubItem] {
        match &self.kind {
            GroupKind::Leaf(_) => &[],
            GroupKind::Expandable(items) => items,
        }
    }

    pub fn is_expandable(&self) -> bool {
        matches!(self.kind, GroupKind::Expandable(_))
    }

    /// Returns true if one of the group's sub-items targets `screen`.
    ///
    pub fn contains_sub_screen(&self, screen: ScreenId) -> bool {
        self.sub_items().iter().any(|item| item.screen == screen)
    }
}

/// Immutable sidebar menu definition.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    groups: Vec<MenuGroup>,
}

impl MenuConfig {
    /// Return a new menu from the given groups. Call `validate` before use.
    ///
    pub fn new(groups: Vec<MenuGroup>) -> Self {
        MenuConfig { groups }
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&MenuGroup> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Return the index of the group with the given name.
    ///
    pub fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|group| group.name == name)
    }

    /// Return the index of the expandable group whose sub-items contain
    /// `screen`, if any. Leaf groups never own a screen in this sense.
    ///
    pub fn owner_of(&self, screen: ScreenId) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.contains_sub_screen(screen))
    }

    /// Return the group name and item label leading to `screen`.
    ///
    pub fn breadcrumb(&self, screen: ScreenId) -> Option<(&str, &str)> {
        self.groups.iter().find_map(|group| match &group.kind {
            GroupKind::Leaf(target) if *target == screen => {
                Some((group.name.as_str(), group.name.as_str()))
            }
            GroupKind::Leaf(_) => None,
            GroupKind::Expandable(items) => items
                .iter()
                .find(|item| item.screen == screen)
                .map(|item| (group.name.as_str(), item.label.as_str())),
        })
    }

    /// Check the static invariants of the menu.
    ///
    pub fn validate(&self) -> Result<(), MenuConfigError> {
        if self.groups.is_empty() {
            return Err(MenuConfigError::Empty);
        }

        let mut names = HashSet::new();
        let mut claimed: HashMap<ScreenId, &str> = HashMap::new();
        for group in &self.groups {
            if !names.insert(group.name.as_str()) {
                return Err(MenuConfigError::DuplicateGroup(group.name.clone()));
            }
            let screens: Vec<ScreenId> = match &group.kind {
                GroupKind::Leaf(screen) => vec![*screen],
                GroupKind::Expandable(items) if items.is_empty() => {
                    return Err(MenuConfigError::EmptyGroup(group.name.clone()));
                }
                GroupKind::Expandable(items) => items.iter().map(|item| item.screen).collect(),
            };
            for screen in screens {
                if let Some(first) = claimed.insert(screen, group.name.as_str()) {
                    return Err(MenuConfigError::DuplicateScreen {
                        screen,
                        first: first.to_string(),
                        second: group.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Return the compiled-in poultry farm menu.
    ///
    pub fn poultry_farm() -> Self {
        MenuConfig::new(vec![
            MenuGroup::leaf("Dashboard", Icon::new("⌂"), ScreenId::DashboardScreen),
            MenuGroup::expandable(
                "Flocks",
                Icon::new("🐔"),
                vec![
                    SubItem::new("Flocks", Icon::new("•"), ScreenId::FlocksScreen),
                    SubItem::new("Flock Stock", Icon::new("•"), ScreenId::FlockStockScreen),
                    SubItem::new("Mortality", Icon::new("•"), ScreenId::MortalityScreen),
                ],
            ),
            MenuGroup::expandable(
                "Eggs",
                Icon::new("🥚"),
                vec![
                    SubItem::new(
                        "Egg Production",
                        Icon::new("•"),
                        ScreenId::EggProductionScreen,
                    ),
                    SubItem::new("Egg Stock", Icon::new("•"), ScreenId::EggStockScreen),
                    SubItem::new("Egg Sale", Icon::new("•"), ScreenId::EggSaleScreen),
                ],
            ),
            MenuGroup::expandable(
                "Vaccinations",
                Icon::new("💉"),
                vec![
                    SubItem::new(
                        "Schedule",
                        Icon::new("•"),
                        ScreenId::VaccinationScheduleScreen,
                    ),
                    SubItem::new(
                        "Records",
                        Icon::new("•"),
                        ScreenId::VaccinationRecordScreen,
                    ),
                ],
            ),
            MenuGroup::expandable(
                "Feed",
                Icon::new("🌾"),
                vec![
                    SubItem::new("Feed Stock", Icon::new("•"), ScreenId::FeedStockScreen),
                    SubItem::new(
                        "Feed Consumption",
                        Icon::new("•"),
                        ScreenId::FeedConsumptionScreen,
                    ),
                    SubItem::new(
                        "Feed Purchase",
                        Icon::new("•"),
                        ScreenId::FeedPurchaseScreen,
                    ),
                ],
            ),
            MenuGroup::expandable(
                "Finance",
                Icon::new("💰"),
                vec![
                    SubItem::new("Bird Sale", Icon::new("•"), ScreenId::BirdSaleScreen),
                    SubItem::new("Vouchers", Icon::new("•"), ScreenId::VoucherScreen),
                    SubItem::new("Ledger", Icon::new("•"), ScreenId::LedgerScreen),
                ],
            ),
            MenuGroup::expandable(
                "Management",
                Icon::new("⚙"),
                vec![
                    SubItem::new("Farms", Icon::new("•"), ScreenId::FarmsScreen),
                    SubItem::new("Users", Icon::new("•"), ScreenId::UsersScreen),
                    SubItem::new("Settings", Icon::new("•"), ScreenId::SettingsScreen),
                ],
            ),
        ])
    }
}
