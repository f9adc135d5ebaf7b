pub mod about;
pub mod element;
pub mod media;
pub mod project;
pub mod section;
