pub mod app;
pub mod carousel;
pub mod motion;
pub mod sections;
pub mod theme;
pub mod window;
