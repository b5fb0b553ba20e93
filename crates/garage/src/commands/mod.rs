pub mod demo;
pub mod empty;
pub mod fix;
pub mod inspect;
pub mod list;
pub mod load;
pub mod remove;
pub mod validate;
