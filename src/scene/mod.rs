pub mod fade;
pub mod hero_intro;
pub mod preloader;
pub mod reveal;
pub mod sink;
pub mod spotlight;
pub mod sticky_cards;
