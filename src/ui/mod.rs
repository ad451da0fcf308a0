pub mod cards;
pub mod overlay;
pub mod panels;
