mod character;
mod page;
mod question;

pub use character::{Character, CharacterRef, RiskLevel};
pub use page::PageId;
pub use question::Question;
