pub mod double_long;
pub mod int128;
