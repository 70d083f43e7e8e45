pub mod look;
pub mod render;
pub mod span;
pub mod status;
pub mod trace;
pub mod window;
