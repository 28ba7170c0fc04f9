mod home;
mod categories;
mod listings;
mod search;
mod notifications;
mod dashboard;
mod signin;
mod admin;

pub use home::HomePage;
pub use categories::CategoriesPage;
pub use listings::{TopPage, NewGamesPage, MultiplayerPage};
pub use search::SearchPage;
pub use notifications::NotificationsPage;
pub use dashboard::DashboardPage;
pub use signin::SignInPage;
pub use admin::AdminPage;
