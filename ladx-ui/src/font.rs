use iced::{
    font::{Stretch, Style, Weight},
    Font,
};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    style: Style::Normal,
    stretch: Stretch::Normal,
    ..Font::DEFAULT
};

pub const MEDIUM: Font = Font {
    weight: Weight::Medium,
    style: Style::Normal,
    stretch: Stretch::Normal,
    ..Font::DEFAULT
};

pub const REGULAR: Font = Font::DEFAULT;
