mod aircraft;
mod states;

pub use aircraft::*;
pub use states::*;
