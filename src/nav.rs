use crate::state::Screen;

/// Static descriptor for one dashboard screen, shown in the header strip
/// and the help overlay.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub display_name: &'static str,
    pub screen: Screen,
    pub key: char,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const MAIN_NAV: [NavItem; 8] = [
    NavItem {
        display_name: "Data Grid",
        screen: Screen::DataGrid,
        key: '1',
        icon: "▤",
        description: "A grid of raw player statistics.",
    },
    NavItem {
        display_name: "Total Points",
        screen: Screen::TotalPoints,
        key: '2',
        icon: "▥",
        description: "Total points scored by each player in a specific season, broken down by goals and assists.",
    },
    NavItem {
        display_name: "Production",
        screen: Screen::Production,
        key: '3',
        icon: "◔",
        description: "Points per game compared to TOI per game for each player in a specific season.",
    },
    NavItem {
        display_name: "Shooting Efficiency",
        screen: Screen::ShootingEfficiency,
        key: '4',
        icon: "◎",
        description: "Shooting efficiency against total shots for each player in a specific season.",
    },
    NavItem {
        display_name: "Per Game Consistency",
        screen: Screen::PerGameConsistency,
        key: '5',
        icon: "✦",
        description: "Average consistency metrics for each player in a specific season.",
    },
    NavItem {
        display_name: "Scouting Heatmap",
        screen: Screen::ScoutingHeatmap,
        key: '6',
        icon: "▒",
        description: "Scouting grades against average points over time.",
    },
    NavItem {
        display_name: "Head To Head",
        screen: Screen::HeadToHead,
        key: '7',
        icon: "⚔",
        description: "Two players compared across the full stat line.",
    },
    NavItem {
        display_name: "Profile",
        screen: Screen::Profile,
        key: '8',
        icon: "⚙",
        description: "Display name and theme.",
    },
];

pub fn nav_for_screen(screen: Screen) -> Option<&'static NavItem> {
    MAIN_NAV.iter().find(|item| item.screen == screen)
}

pub fn screen_for_key(key: char) -> Option<Screen> {
    MAIN_NAV
        .iter()
        .find(|item| item.key == key)
        .map(|item| item.screen)
}
