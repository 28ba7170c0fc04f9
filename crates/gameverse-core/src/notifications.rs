//! Notification center
//!
//! Owned by the page (or header bell) that created it; nothing here is
//! global.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    NewGame,
    Achievement,
    Update,
    Promo,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::NewGame => "🎮",
            NotificationKind::Achievement => "🏆",
            NotificationKind::Update => "🔄",
            NotificationKind::Promo => "🎉",
        }
    }

    /// CSS modifier used for the accent gradient
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::NewGame => "kind-new-game",
            NotificationKind::Achievement => "kind-achievement",
            NotificationKind::Update => "kind-update",
            NotificationKind::Promo => "kind-promo",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Relative age such as "2 min ago"
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        age_label(now - self.posted_at)
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

pub fn age_label(age: Duration) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if age.num_hours() < 24 {
        plural(age.num_hours(), "hour")
    } else if age.num_days() < 7 {
        plural(age.num_days(), "day")
    } else {
        plural(age.num_weeks(), "week")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    filter: NotificationFilter,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            items,
            filter: NotificationFilter::All,
        }
    }

    /// Demo feed, timestamps relative to `now`
    pub fn seed(now: DateTime<Utc>) -> Self {
        let entries = [
            (
                NotificationKind::NewGame,
                "New Game Added!",
                "Crystal Quest is now available to play. Explore magical worlds and collect gems in this exciting puzzle adventure!",
                Duration::minutes(2),
                false,
            ),
            (
                NotificationKind::Achievement,
                "Achievement Unlocked!",
                "You reached 1000 plays across all games. Keep playing to unlock more achievements!",
                Duration::hours(1),
                false,
            ),
            (
                NotificationKind::Update,
                "Game Updated",
                "Speed Racer X has new levels! 5 new challenging tracks have been added to test your skills.",
                Duration::hours(3),
                true,
            ),
            (
                NotificationKind::Promo,
                "🎉 Weekend Event!",
                "Double XP on all multiplayer games this weekend. Play now and level up faster!",
                Duration::hours(5),
                true,
            ),
            (
                NotificationKind::NewGame,
                "New Puzzle Game!",
                "Mind Bender is now live! Challenge your brain with 100+ unique puzzles.",
                Duration::days(1),
                true,
            ),
            (
                NotificationKind::Achievement,
                "New High Score!",
                "You beat your previous high score in Neon Runner. Can you beat it again?",
                Duration::days(2),
                true,
            ),
            (
                NotificationKind::Update,
                "System Maintenance Complete",
                "All systems are back online. Thank you for your patience!",
                Duration::days(3),
                true,
            ),
            (
                NotificationKind::Promo,
                "New Feature: Game Favorites",
                "You can now save your favorite games for quick access. Try it out!",
                Duration::weeks(1),
                true,
            ),
        ];

        let items = entries
            .into_iter()
            .zip(1..)
            .map(|((kind, title, message, age, read), id)| Notification {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
                posted_at: now - age,
                read,
            })
            .collect();
        Self::new(items)
    }

    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    /// Notifications passing the active filter
    pub fn visible(&self) -> Vec<Notification> {
        match self.filter {
            NotificationFilter::All => self.items.clone(),
            NotificationFilter::Unread => self.items.iter().filter(|n| !n.read).cloned().collect(),
        }
    }

    pub fn filter(&self) -> NotificationFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.filter = filter;
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Returns false when no notification has that id
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_seed_has_two_unread() {
        let center = NotificationCenter::seed(now());
        assert_eq!(center.all().len(), 8);
        assert_eq!(center.unread_count(), 2);
        assert_eq!(center.all()[0].id, 1);
    }

    #[test]
    fn test_unread_filter() {
        let mut center = NotificationCenter::seed(now());
        center.set_filter(NotificationFilter::Unread);
        let ids: Vec<u32> = center.visible().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);

        center.mark_read(1);
        let ids: Vec<u32> = center.visible().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);

        center.set_filter(NotificationFilter::All);
        assert_eq!(center.visible().len(), 8);
    }

    #[test]
    fn test_mark_all_and_delete() {
        let mut center = NotificationCenter::seed(now());
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);

        assert!(center.delete(3));
        assert!(!center.delete(3));
        assert!(!center.mark_read(42));
        assert_eq!(center.all().len(), 7);

        center.clear_all();
        assert!(center.is_empty());
    }

    #[test]
    fn test_age_labels() {
        let center = NotificationCenter::seed(now());
        let labels: Vec<String> = center.all().iter().map(|n| n.age_label(now())).collect();
        assert_eq!(
            labels,
            vec![
                "2 min ago",
                "1 hour ago",
                "3 hours ago",
                "5 hours ago",
                "1 day ago",
                "2 days ago",
                "3 days ago",
                "1 week ago",
            ]
        );
        assert_eq!(age_label(Duration::seconds(20)), "just now");
    }
}
