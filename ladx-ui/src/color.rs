use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

pub const GREY_7: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);

pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

// Dark green for success text on light backgrounds
pub const DARK_GREEN: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0x7A as f32 / 255.0,
    0x33 as f32 / 255.0,
); // #007A33

// =============================================================================
// BRAND COLORS
// =============================================================================

pub const PURPLE_LIGHT: Color = Color::from_rgb(
    0x7E as f32 / 255.0,
    0x57 as f32 / 255.0,
    0xC2 as f32 / 255.0,
); // #7E57C2

pub const PURPLE: Color = Color::from_rgb(
    0x5E as f32 / 255.0,
    0x35 as f32 / 255.0,
    0xB1 as f32 / 255.0,
); // #5E35B1

pub const PURPLE_DARK: Color = Color::from_rgb(
    0x45 as f32 / 255.0,
    0x27 as f32 / 255.0,
    0xA0 as f32 / 255.0,
); // #4527A0

pub const ORANGE: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0x98 as f32 / 255.0,
    0x00 as f32 / 255.0,
); // #FF9800

pub const ORANGE_DARK: Color = Color::from_rgb(
    0xF5 as f32 / 255.0,
    0x7C as f32 / 255.0,
    0x00 as f32 / 255.0,
); // #F57C00

// Transparent variant for selected backgrounds
pub const TRANSPARENT_PURPLE: Color = Color::from_rgba(
    0x5E as f32 / 255.0,
    0x35 as f32 / 255.0,
    0xB1 as f32 / 255.0,
    0.15,
);

// Light theme backgrounds
pub const LIGHT_BG: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xF8 as f32 / 255.0,
    0xF8 as f32 / 255.0,
); // #F8F8F8

pub const LIGHT_BORDER: Color = Color::from_rgb(
    0xA5 as f32 / 255.0,
    0xA5 as f32 / 255.0,
    0xA5 as f32 / 255.0,
); // #A5A5A5

pub const DARK_TEXT_PRIMARY: Color = Color::from_rgb(
    0x1A as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x1A as f32 / 255.0,
); // #1A1A1A

pub const DARK_TEXT_TERTIARY: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
); // #6B6B6B
