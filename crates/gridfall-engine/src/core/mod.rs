pub use self::{catalog::*, grid::*, shape::*};

pub(crate) mod catalog;
pub(crate) mod grid;
pub(crate) mod shape;
