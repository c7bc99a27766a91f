// Layout numbers and limits shared by the views.

/// Longest card title accepted by the add form, in characters.
pub const MAX_TITLE_CHARS: usize = 50;

/// Card width in logical pixels
pub const CARD_WIDTH: f32 = 260.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 16.0;

pub const WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

pub mod spacing {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const XLARGE: f32 = 24.0;
}

pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    pub const ROUNDING: f32 = 8.0;

    /// Space between the title and the controls row
    pub const TITLE_GAP: f32 = 12.0;
}
