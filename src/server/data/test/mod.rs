mod card;
mod deck;
