// Drawing only: views read gallery state and return what the user asked for.
pub mod cards;
pub mod gallery;
pub mod ui_helpers;
