//! Tiny helpers for turning numbers and words into plain English.

mod article;
mod casing;
mod frequency;
mod listing;
mod ordinal;
mod plural;

pub use article::a_or_an;
pub use casing::capitalize;
pub use frequency::times;
pub use listing::list;
pub use ordinal::order;
pub use plural::{count, plural};
