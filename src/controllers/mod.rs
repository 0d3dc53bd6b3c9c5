pub mod animation;
pub mod headless;
