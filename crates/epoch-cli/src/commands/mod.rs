pub mod click;
pub mod dispatch;
pub mod range;
pub mod year;
