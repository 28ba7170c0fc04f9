mod nav_link;
mod header;
mod footer;
mod hero;
mod category_filter;
mod game_grid;
mod game_carousel;

pub use nav_link::NavLink;
pub use header::Header;
pub use footer::Footer;
pub use hero::HeroSection;
pub use category_filter::CategoryFilter;
pub use game_grid::{GameGrid, GameCard};
pub use game_carousel::GameCarousel;
