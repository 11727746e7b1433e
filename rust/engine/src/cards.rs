/// A card in the simplified game carries only its point value.
/// The range collapses face cards and aces into plain numbers.
pub type Card = u8;

/// Lowest card value a shoe can produce.
pub const CARD_MIN: Card = 2;
/// Highest card value a shoe can produce.
pub const CARD_MAX: Card = 11;
