use iced::{
    widget::pick_list::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let border = match status {
        Status::Opened => Some(theme.colors.buttons.primary.active.background),
        _ => theme.colors.text_inputs.primary.active.border,
    };
    Style {
        text_color: theme.colors.text.primary,
        placeholder_color: theme.colors.text_inputs.primary.active.placeholder,
        background: theme.colors.text_inputs.primary.active.background.into(),
        border: if let Some(color) = border {
            Border {
                radius: 8.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        handle_color: theme.colors.buttons.secondary.active.text,
    }
}

pub fn invalid(theme: &Theme, _status: Status) -> Style {
    Style {
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: theme.colors.text.error,
        },
        ..primary(theme, Status::Active)
    }
}
