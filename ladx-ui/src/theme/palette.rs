use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub radio_buttons: RadioButtons,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub border: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub info: ContainerPalette,
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadioButtons {
    pub dot: iced::Color,
    pub text: iced::Color,
    pub border: iced::Color,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BG,
                foreground: color::WHITE,
                scrollable: color::GREY_3,
            },
            text: Text {
                primary: color::DARK_TEXT_PRIMARY,
                secondary: color::DARK_TEXT_TERTIARY,
                warning: color::ORANGE_DARK,
                success: color::DARK_GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::PURPLE,
                        text: color::WHITE,
                        border: color::PURPLE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::PURPLE_DARK,
                        text: color::WHITE,
                        border: color::PURPLE_DARK.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::PURPLE_DARK,
                        text: color::WHITE,
                        border: color::PURPLE_DARK.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::PURPLE_LIGHT,
                        text: color::WHITE,
                        border: color::PURPLE_LIGHT.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::PURPLE,
                        border: color::PURPLE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_PURPLE,
                        text: color::PURPLE_DARK,
                        border: color::PURPLE_DARK.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT_PURPLE,
                        text: color::PURPLE_DARK,
                        border: color::PURPLE_DARK.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_3,
                        border: color::GREY_2.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_TEXT_PRIMARY,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PURPLE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::ORANGE_DARK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::ORANGE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_1),
                },
                border: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: None,
                    border: color::PURPLE.into(),
                },
            },
            notifications: Notifications {
                info: ContainerPalette {
                    background: color::WHITE,
                    text: color::DARK_TEXT_PRIMARY.into(),
                    border: Some(color::PURPLE),
                },
                success: ContainerPalette {
                    background: color::WHITE,
                    text: color::DARK_GREEN.into(),
                    border: Some(color::DARK_GREEN),
                },
                error: ContainerPalette {
                    background: color::WHITE,
                    text: color::RED.into(),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::DARK_TEXT_PRIMARY,
                        selection: color::PURPLE_LIGHT,
                        border: Some(color::LIGHT_BORDER),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_7,
                        selection: color::PURPLE_LIGHT,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::DARK_TEXT_PRIMARY,
                        selection: color::PURPLE_LIGHT,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_7,
                        selection: color::PURPLE_LIGHT,
                        border: Some(color::RED),
                    },
                },
            },
            radio_buttons: RadioButtons {
                dot: color::PURPLE,
                text: color::DARK_TEXT_PRIMARY,
                border: color::PURPLE,
            },
        }
    }
}
