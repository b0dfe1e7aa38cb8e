pub mod reveal;
pub mod scroll;
