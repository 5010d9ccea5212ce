pub mod button;
pub mod items;
pub mod render;
pub mod state;

pub use render::{event_card, CardResponse, CARD_WIDTH};
