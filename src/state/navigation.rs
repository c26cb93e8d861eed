//! Navigation-related state types.
//!
//! This module contains the screen identifiers the shell can navigate to and
//! the focus targets used to route keyboard input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Menu,
    Screen,
}

/// Identifies a navigable destination of the farm application.
///
/// The set is closed: every destination the sidebar or the navigator can
/// reach is listed here.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScreenId {
    DashboardScreen,
    FlocksScreen,
    FlockStockScreen,
    MortalityScreen,
    EggProductionScreen,
    EggStockScreen,
    EggSaleScreen,
    VaccinationScheduleScreen,
    VaccinationRecordScreen,
    FeedStockScreen,
    FeedConsumptionScreen,
    FeedPurchaseScreen,
    BirdSaleScreen,
    VoucherScreen,
    LedgerScreen,
    FarmsScreen,
    UsersScreen,
    SettingsScreen,
}

impl ScreenId {
    pub const ALL: [ScreenId; 18] = [
        ScreenId::DashboardScreen,
        ScreenId::FlocksScreen,
        ScreenId::FlockStockScreen,
        ScreenId::MortalityScreen,
        ScreenId::EggProductionScreen,
        ScreenId::EggStockScreen,
        ScreenId::EggSaleScreen,
        ScreenId::VaccinationScheduleScreen,
        ScreenId::VaccinationRecordScreen,
        ScreenId::FeedStockScreen,
        ScreenId::FeedConsumptionScreen,
        ScreenId::FeedPurchaseScreen,
        ScreenId::BirdSaleScreen,
        ScreenId::VoucherScreen,
        ScreenId::LedgerScreen,
        ScreenId::FarmsScreen,
        ScreenId::UsersScreen,
        ScreenId::SettingsScreen,
    ];

    /// Return the human readable title shown in the screen panel.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::DashboardScreen => "Dashboard",
            ScreenId::FlocksScreen => "Flocks",
            ScreenId::FlockStockScreen => "Flock Stock",
            ScreenId::MortalityScreen => "Mortality",
            ScreenId::EggProductionScreen => "Egg Production",
            ScreenId::EggStockScreen => "Egg Stock",
            ScreenId::EggSaleScreen => "Egg Sale",
            ScreenId::VaccinationScheduleScreen => "Vaccination Schedule",
            ScreenId::VaccinationRecordScreen => "Vaccination Records",
            ScreenId::FeedStockScreen => "Feed Stock",
            ScreenId::FeedConsumptionScreen => "Feed Consumption",
            ScreenId::FeedPurchaseScreen => "Feed Purchase",
            ScreenId::BirdSaleScreen => "Bird Sale",
            ScreenId::VoucherScreen => "Vouchers",
            ScreenId::LedgerScreen => "Ledger",
            ScreenId::FarmsScreen => "Farms",
            ScreenId::UsersScreen => "Users",
            ScreenId::SettingsScreen => "Settings",
        }
    }

    /// Return a one-line summary of what the screen manages.
    ///
    pub fn summary(&self) -> &'static str {
        match self {
            ScreenId::DashboardScreen => "Farm overview: live birds, daily eggs, feed on hand",
            ScreenId::FlocksScreen => "Flock intake and batch registration",
            ScreenId::FlockStockScreen => "Current bird count per flock",
            ScreenId::MortalityScreen => "Daily mortality entries per flock",
            ScreenId::EggProductionScreen => "Daily egg collection per flock",
            ScreenId::EggStockScreen => "Egg inventory by grade",
            ScreenId::EggSaleScreen => "Egg sales to customers",
            ScreenId::VaccinationScheduleScreen => "Upcoming vaccinations per flock",
            ScreenId::VaccinationRecordScreen => "Administered vaccinations",
            ScreenId::FeedStockScreen => "Feed inventory by type",
            ScreenId::FeedConsumptionScreen => "Daily feed consumption per flock",
            ScreenId::FeedPurchaseScreen => "Feed purchases from suppliers",
            ScreenId::BirdSaleScreen => "Live and culled bird sales",
            ScreenId::VoucherScreen => "Payment and receipt vouchers",
            ScreenId::LedgerScreen => "Account ledgers and balances",
            ScreenId::FarmsScreen => "Farms and sheds",
            ScreenId::UsersScreen => "User accounts and roles",
            ScreenId::SettingsScreen => "Application settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
