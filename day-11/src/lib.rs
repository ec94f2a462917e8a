pub mod blink;
pub mod count_map;
pub mod driver;
pub mod error;
pub mod parser;
pub mod stone;

pub use count_map::CountMap;
pub use error::StoneError;
