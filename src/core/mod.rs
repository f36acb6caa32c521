pub mod locale;
pub mod mapping;
pub mod parser;
