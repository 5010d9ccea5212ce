// UI constants gathered here instead of scattering magic numbers across views.

/// Default card width in logical pixels
pub const CARD_WIDTH: f32 = 320.0;

/// Gap between cards in the board grid
pub const CARD_GAP: f32 = 16.0;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of the card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Border radius of tag chips (pill shape at chip height 18)
    pub const CHIP_ROUNDING: f32 = 9.0;

    /// Tag chip height
    pub const CHIP_HEIGHT: f32 = 18.0;

    /// Minimum width of the registration button
    pub const BUTTON_MIN_WIDTH: f32 = 140.0;

    /// Vertical gap between the card and its expanded detail panel
    pub const DETAILS_GAP: f32 = 8.0;
}
