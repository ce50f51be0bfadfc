#[macro_use]
pub mod util;

mod builder;
