pub mod point;
pub mod reading;

pub use point::Point;
pub use reading::Reading;
