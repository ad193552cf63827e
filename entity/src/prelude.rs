pub use super::card::Entity as Card;
pub use super::deck::Entity as Deck;
pub use super::pack::Entity as Pack;
