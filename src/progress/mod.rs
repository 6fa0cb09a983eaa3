pub mod band;
pub mod mapper;
pub mod stagger;
