mod command_enum;
mod labels;

pub use command_enum::*;
