//! Domain types shared by every analysis stage.

pub mod article;
pub mod bar;
pub mod sentiment;

pub use article::NewsArticle;
pub use bar::Bar;
pub use sentiment::DailySentiment;
