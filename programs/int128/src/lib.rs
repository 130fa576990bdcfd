pub mod error;
pub mod math;

pub use error::ErrorCode;
pub use math::double_long::DoubleLong;
pub use math::int128::Int128;
