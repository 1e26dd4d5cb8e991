//! Small helpers shared by the controllers and the request parameter conversions.

pub mod extract;
pub mod parse;
pub mod validate;
