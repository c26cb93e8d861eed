//! Menu configuration error types.

use crate::state::ScreenId;

/// Static faults in a sidebar menu configuration.
///
/// These are detected once when the sidebar is constructed. A menu that fails
/// validation is never used.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuConfigError {
    /// The menu has no groups at all
    #[error("Menu configuration has no groups")]
    Empty,

    /// Two groups share a name
    #[error("Duplicate menu group name: {0}")]
    DuplicateGroup(String),

    /// An expandable group has no sub-items
    #[error("Menu group {0} has neither a screen nor sub-items")]
    EmptyGroup(String),

    /// The same screen is reachable from two places in the menu
    #[error("Screen {screen} is claimed by both {first} and {second}")]
    DuplicateScreen {
        screen: ScreenId,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_config_error_display() {
        let error = MenuConfigError::Empty;
        assert!(error.to_string().contains("no groups"));

        let error = MenuConfigError::DuplicateGroup("Eggs".to_string());
        assert!(error.to_string().contains("Duplicate menu group"));
        assert!(error.to_string().contains("Eggs"));

        let error = MenuConfigError::EmptyGroup("Feed".to_string());
        assert!(error.to_string().contains("Feed"));

        let error = MenuConfigError::DuplicateScreen {
            screen: ScreenId::EggSaleScreen,
            first: "Eggs".to_string(),
            second: "Finance".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("EggSaleScreen"));
        assert!(error_str.contains("Eggs"));
        assert!(error_str.contains("Finance"));
    }
}
