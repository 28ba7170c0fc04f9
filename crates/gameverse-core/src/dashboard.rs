//! Player dashboard data

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Games,
    Achievements,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[DashboardTab::Overview, DashboardTab::Games, DashboardTab::Achievements]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Games => "My Games",
            DashboardTab::Achievements => "Achievements",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    /// Hours
    pub total_play_time: u32,
    pub achievements: u32,
    pub favorite_genre: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayRecord {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub play_count: u32,
    /// Hours
    pub total_play_time: f32,
    pub last_played: NaiveDate,
    pub high_score: u64,
    /// Stars out of five
    pub rating: u8,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    profile: UserProfile,
    history: Vec<PlayRecord>,
    tab: DashboardTab,
}

impl Dashboard {
    pub fn new(profile: UserProfile, history: Vec<PlayRecord>) -> Self {
        Self {
            profile,
            history,
            tab: DashboardTab::Overview,
        }
    }

    /// The signed-in demo player
    pub fn demo() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let profile = UserProfile {
            username: "GamerPro99".to_string(),
            email: "gamerpro99@email.com".to_string(),
            join_date: date(2024, 10, 15),
            level: 42,
            xp: 8450,
            xp_to_next_level: 10000,
            total_play_time: 156,
            achievements: 28,
            favorite_genre: "Action".to_string(),
        };
        let rows = [
            ("Neon Runner", "Action", 47, 24.5, date(2024, 12, 15), 125_000, 5),
            ("Crystal Quest", "Puzzle", 32, 18.2, date(2024, 12, 14), 89_500, 4),
            ("Speed Racer X", "Racing", 28, 15.8, date(2024, 12, 13), 156_000, 5),
            ("Galaxy Defender", "Shooter", 21, 12.3, date(2024, 12, 12), 78_000, 4),
            ("Mind Bender", "Puzzle", 15, 8.5, date(2024, 12, 10), 45_000, 3),
            ("Battle Arena", "Multiplayer", 12, 6.2, date(2024, 12, 8), 32_000, 4),
        ];
        let history = rows
            .into_iter()
            .zip(1..)
            .map(|((title, category, play_count, hours, last_played, high_score, rating), id)| PlayRecord {
                id,
                title: title.to_string(),
                category: category.to_string(),
                thumbnail: format!("https://picsum.photos/seed/game{}/400/300", id),
                play_count,
                total_play_time: hours,
                last_played,
                high_score,
                rating,
            })
            .collect();
        Self::new(profile, history)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn history(&self) -> &[PlayRecord] {
        &self.history
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn total_plays(&self) -> u32 {
        self.history.iter().map(|r| r.play_count).sum()
    }

    /// Progress towards the next level, 0..=100
    pub fn xp_percentage(&self) -> f32 {
        if self.profile.xp_to_next_level == 0 {
            return 100.0;
        }
        (self.profile.xp as f32 / self.profile.xp_to_next_level as f32 * 100.0).clamp(0.0, 100.0)
    }

    /// Up to `n` most recently played games, newest first
    pub fn recent(&self, n: usize) -> Vec<PlayRecord> {
        let mut records = self.history.clone();
        records.sort_by(|a, b| b.last_played.cmp(&a.last_played));
        records.truncate(n);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_totals() {
        let dashboard = Dashboard::demo();
        assert_eq!(dashboard.history().len(), 6);
        assert_eq!(dashboard.total_plays(), 155);
        assert!((dashboard.xp_percentage() - 84.5).abs() < 0.01);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let dashboard = Dashboard::demo();
        let titles: Vec<String> = dashboard.recent(4).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Neon Runner", "Crystal Quest", "Speed Racer X", "Galaxy Defender"]);
    }

    #[test]
    fn test_xp_percentage_is_clamped() {
        let mut profile = Dashboard::demo().profile().clone();
        profile.xp = 20_000;
        assert_eq!(Dashboard::new(profile.clone(), Vec::new()).xp_percentage(), 100.0);
        profile.xp_to_next_level = 0;
        assert_eq!(Dashboard::new(profile, Vec::new()).xp_percentage(), 100.0);
    }

    #[test]
    fn test_tabs() {
        let mut dashboard = Dashboard::demo();
        assert_eq!(dashboard.tab(), DashboardTab::Overview);
        dashboard.set_tab(DashboardTab::Achievements);
        assert_eq!(dashboard.tab(), DashboardTab::Achievements);
    }
}
