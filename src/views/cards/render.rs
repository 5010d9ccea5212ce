// Render facade for cards: re-export the implementation from views::cards::items
// so external code keeps using views::cards::{event_card, CARD_WIDTH}.

pub use crate::views::cards::items::{event_card, CardResponse};

// Default card width used by the board grid (in logical pixels).
pub use crate::ui_constants::CARD_WIDTH;
