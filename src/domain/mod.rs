pub mod account;
pub mod resolution;

pub use account::{AccountInfo, ConstructionSlot};
pub use resolution::AccountMatch;
