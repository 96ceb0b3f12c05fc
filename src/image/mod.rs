pub mod io;
pub mod rgba;

pub use self::io::RgbaBuffer;
pub use self::rgba::{gray_at, ImageRgba8};
