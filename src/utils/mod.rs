pub mod html;
pub mod path;
pub mod table;
pub mod time;
