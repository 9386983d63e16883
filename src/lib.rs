pub mod draw;
pub mod helpers;
pub mod icon;
pub mod iconset;
pub mod logger;
