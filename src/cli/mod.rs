pub mod convert;
pub mod currencies;
pub mod setup;
pub mod show;
pub mod ui;
