mod auction;
mod tokens;

pub use self::{auction::*, tokens::*};
