//! Admin console state
//!
//! Game moderation, user list and site settings for one console instance.
//! Changes live only as long as the console does.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::config::PortalConfig;
use crate::error::AdminError;
use crate::model::Badge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Games,
    Users,
    Settings,
}

impl AdminTab {
    pub fn all() -> &'static [AdminTab] {
        &[AdminTab::Overview, AdminTab::Games, AdminTab::Users, AdminTab::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Games => "Games",
            AdminTab::Users => "Users",
            AdminTab::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Inactive,
}

impl GameStatus {
    pub fn toggled(self) -> Self {
        match self {
            GameStatus::Active => GameStatus::Inactive,
            GameStatus::Inactive => GameStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGame {
    pub id: u32,
    pub title: String,
    /// Display name, e.g. "Action"
    pub category: String,
    pub status: GameStatus,
    pub plays: u64,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Banned,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Banned => "banned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub status: UserStatus,
    pub joined: NaiveDate,
    pub plays: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub maintenance_mode: bool,
    pub allow_registration: bool,
    pub max_games_per_page: usize,
    pub featured_games_count: usize,
    pub enable_notifications: bool,
    pub enable_comments: bool,
}

impl SiteSettings {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            site_name: config.site_name.clone(),
            site_description: config.site_description.clone(),
            maintenance_mode: false,
            allow_registration: true,
            max_games_per_page: config.max_games_per_page,
            featured_games_count: config.featured_games_count,
            enable_notifications: true,
            enable_comments: true,
        }
    }
}

/// Toggleable site switches, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteToggle {
    MaintenanceMode,
    AllowRegistration,
    EnableNotifications,
    EnableComments,
}

impl SiteToggle {
    pub fn all() -> &'static [SiteToggle] {
        &[
            SiteToggle::MaintenanceMode,
            SiteToggle::AllowRegistration,
            SiteToggle::EnableNotifications,
            SiteToggle::EnableComments,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteToggle::MaintenanceMode => "Maintenance Mode",
            SiteToggle::AllowRegistration => "Allow Registration",
            SiteToggle::EnableNotifications => "Enable Notifications",
            SiteToggle::EnableComments => "Enable Comments",
        }
    }

    fn flag<'a>(&self, settings: &'a mut SiteSettings) -> &'a mut bool {
        match self {
            SiteToggle::MaintenanceMode => &mut settings.maintenance_mode,
            SiteToggle::AllowRegistration => &mut settings.allow_registration,
            SiteToggle::EnableNotifications => &mut settings.enable_notifications,
            SiteToggle::EnableComments => &mut settings.enable_comments,
        }
    }

    pub fn get(&self, settings: &SiteSettings) -> bool {
        match self {
            SiteToggle::MaintenanceMode => settings.maintenance_mode,
            SiteToggle::AllowRegistration => settings.allow_registration,
            SiteToggle::EnableNotifications => settings.enable_notifications,
            SiteToggle::EnableComments => settings.enable_comments,
        }
    }
}

/// Input from the "Add New Game" dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub title: String,
    pub category: String,
    pub plays: u64,
    pub featured: bool,
}

impl Default for NewGame {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: "Action".to_string(),
            plays: 0,
            featured: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub total_games: usize,
    pub active_games: usize,
    pub total_plays: u64,
    pub total_users: usize,
    pub active_users: usize,
}

#[derive(Debug, Clone)]
pub struct AdminConsole {
    games: Vec<AdminGame>,
    users: Vec<AdminUser>,
    settings: SiteSettings,
    tab: AdminTab,
}

/// Capitalize the first letter of a slug, e.g. "action" -> "Action"
fn title_case(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn demo_users() -> Vec<AdminUser> {
    let rows = [
        ("GamerPro99", "gamerpro99@email.com", UserStatus::Active, (2024, 10, 15), 155),
        ("SpeedKing", "speedking@email.com", UserStatus::Active, (2024, 11, 1), 89),
        ("PuzzleMaster", "puzzlemaster@email.com", UserStatus::Active, (2024, 11, 15), 234),
        ("ArcadeHero", "arcadehero@email.com", UserStatus::Banned, (2024, 9, 20), 45),
        ("NightRider", "nightrider@email.com", UserStatus::Active, (2024, 12, 1), 67),
    ];
    rows.into_iter()
        .zip(1..)
        .filter_map(|((username, email, status, (y, m, d), plays), id)| {
            Some(AdminUser {
                id,
                username: username.to_string(),
                email: email.to_string(),
                status,
                joined: NaiveDate::from_ymd_opt(y, m, d)?,
                plays,
            })
        })
        .collect()
}

impl AdminConsole {
    pub fn new(games: Vec<AdminGame>, users: Vec<AdminUser>, settings: SiteSettings) -> Self {
        Self {
            games,
            users,
            settings,
            tab: AdminTab::Overview,
        }
    }

    /// Console seeded from the catalog and the demo user list
    pub fn from_catalog(catalog: &Catalog, config: &PortalConfig) -> Self {
        let games = catalog
            .games()
            .iter()
            .zip(1..)
            .map(|(g, id)| AdminGame {
                id,
                title: g.title.clone(),
                category: title_case(&g.category),
                status: GameStatus::Active,
                plays: g.plays,
                featured: g.has_badge(Badge::Hot) || g.has_badge(Badge::Top),
            })
            .collect();
        Self::new(games, demo_users(), SiteSettings::from_config(config))
    }

    /// Category names offered by the add-game dialog
    pub fn category_options(catalog: &Catalog) -> Vec<String> {
        catalog.real_categories().map(|c| title_case(&c.slug)).collect()
    }

    pub fn games(&self) -> &[AdminGame] {
        &self.games
    }

    pub fn users(&self) -> &[AdminUser] {
        &self.users
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SiteSettings {
        &mut self.settings
    }

    pub fn toggle_setting(&mut self, toggle: SiteToggle) {
        let flag = toggle.flag(&mut self.settings);
        *flag = !*flag;
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    fn game_mut(&mut self, id: u32) -> Result<&mut AdminGame, AdminError> {
        self.games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(AdminError::UnknownGame(id))
    }

    pub fn toggle_status(&mut self, id: u32) -> Result<GameStatus, AdminError> {
        let game = self.game_mut(id)?;
        game.status = game.status.toggled();
        Ok(game.status)
    }

    pub fn toggle_featured(&mut self, id: u32) -> Result<bool, AdminError> {
        let game = self.game_mut(id)?;
        game.featured = !game.featured;
        Ok(game.featured)
    }

    /// Add a game to the top of the list, returning its id.
    ///
    /// A blank title is rejected and nothing changes.
    pub fn add_game(&mut self, new_game: NewGame) -> Result<u32, AdminError> {
        let title = new_game.title.trim();
        if title.is_empty() {
            tracing::warn!("rejected new game with empty title");
            return Err(AdminError::EmptyTitle);
        }
        let id = self.games.len() as u32 + 1;
        self.games.insert(
            0,
            AdminGame {
                id,
                title: title.to_string(),
                category: new_game.category,
                status: GameStatus::Active,
                plays: new_game.plays,
                featured: new_game.featured,
            },
        );
        tracing::info!(id, title, "game added");
        Ok(id)
    }

    pub fn stats(&self) -> AdminStats {
        AdminStats {
            total_games: self.games.len(),
            active_games: self.games.iter().filter(|g| g.status == GameStatus::Active).count(),
            total_plays: self.games.iter().map(|g| g.plays).sum(),
            total_users: self.users.len(),
            active_users: self.users.iter().filter(|u| u.status == UserStatus::Active).count(),
        }
    }

    /// Games whose title or category contains `term`, ignoring case
    pub fn filtered_games(&self, term: &str) -> Vec<AdminGame> {
        let term = term.to_lowercase();
        self.games
            .iter()
            .filter(|g| g.title.to_lowercase().contains(&term) || g.category.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Users whose username or email contains `term`, ignoring case
    pub fn filtered_users(&self, term: &str) -> Vec<AdminUser> {
        let term = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.username.to_lowercase().contains(&term) || u.email.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::abc_catalog;

    fn console() -> AdminConsole {
        AdminConsole::from_catalog(&abc_catalog(), &PortalConfig::default())
    }

    #[test]
    fn test_seeded_from_catalog() {
        let console = console();
        let titles: Vec<&str> = console.games().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha Strike", "Block Drop", "Cave Run"]);
        assert_eq!(console.games()[0].id, 1);
        assert_eq!(console.games()[0].category, "Action");
        // Only the hot game starts featured
        assert!(console.games()[0].featured);
        assert!(!console.games()[1].featured);
        assert_eq!(console.users().len(), 5);
        assert_eq!(console.settings().site_name, "GameVerse");
    }

    #[test]
    fn test_stats() {
        let mut console = console();
        let stats = console.stats();
        assert_eq!(stats.total_plays, 1500);
        assert_eq!(stats.active_games, 3);
        assert_eq!(stats.active_users, 4);

        console.toggle_status(2).unwrap();
        assert_eq!(console.stats().active_games, 2);
    }

    #[test]
    fn test_toggles() {
        let mut console = console();
        assert_eq!(console.toggle_status(1), Ok(GameStatus::Inactive));
        assert_eq!(console.toggle_status(1), Ok(GameStatus::Active));
        assert_eq!(console.toggle_featured(2), Ok(true));
        assert_eq!(console.toggle_featured(99), Err(AdminError::UnknownGame(99)));
    }

    #[test]
    fn test_add_game_rejects_blank_title() {
        let mut console = console();
        let result = console.add_game(NewGame {
            title: "   ".to_string(),
            ..NewGame::default()
        });
        assert_eq!(result, Err(AdminError::EmptyTitle));
        assert_eq!(console.games().len(), 3);
    }

    #[test]
    fn test_add_game_goes_first() {
        let mut console = console();
        let id = console
            .add_game(NewGame {
                title: " Star Miner ".to_string(),
                category: "Simulation".to_string(),
                plays: 10,
                featured: true,
            })
            .unwrap();
        assert_eq!(id, 4);
        let first = &console.games()[0];
        assert_eq!(first.title, "Star Miner");
        assert_eq!(first.status, GameStatus::Active);
        assert_eq!(console.stats().total_plays, 1510);
    }

    #[test]
    fn test_search_terms() {
        let console = console();
        let hits: Vec<u32> = console.filtered_games("ACTION").iter().map(|g| g.id).collect();
        assert_eq!(hits, vec![1, 3]);
        assert_eq!(console.filtered_games("").len(), 3);

        let users: Vec<String> = console
            .filtered_users("speed")
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(users, vec!["SpeedKing"]);
        assert_eq!(console.filtered_users("@email.com").len(), 5);
    }

    #[test]
    fn test_setting_toggles_and_tabs() {
        let mut console = console();
        assert!(!SiteToggle::MaintenanceMode.get(console.settings()));
        console.toggle_setting(SiteToggle::MaintenanceMode);
        assert!(console.settings().maintenance_mode);

        console.settings_mut().site_name = "Arcade Hub".to_string();
        assert_eq!(console.settings().site_name, "Arcade Hub");

        assert_eq!(console.tab(), AdminTab::Overview);
        console.set_tab(AdminTab::Users);
        assert_eq!(console.tab(), AdminTab::Users);
    }

    #[test]
    fn test_category_options() {
        assert_eq!(AdminConsole::category_options(&abc_catalog()), vec!["Action", "Puzzle"]);
        assert_eq!(title_case("rpg"), "Rpg");
    }
}
