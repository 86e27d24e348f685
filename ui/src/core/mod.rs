pub mod accordion;
pub mod format;
pub mod platform;
pub mod rotation;
pub mod scroll;
pub mod timing;
