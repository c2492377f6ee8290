mod console;
mod generic;

pub use console::*;
pub use generic::*;
