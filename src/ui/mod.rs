pub mod messages;
pub mod swipe;
