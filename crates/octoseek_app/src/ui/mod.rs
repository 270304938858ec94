pub mod input;
pub mod layout;
pub mod motion;
pub mod render;
