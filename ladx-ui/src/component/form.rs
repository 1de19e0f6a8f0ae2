use iced::Length;

use crate::{color, component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    /// Replaces the value and clears any previous warning.
    pub fn edit(&mut self, value: String) {
        self.value = value;
        self.warning = None;
        self.valid = true;
    }

    /// Marks the value as invalid, or valid if `warning` is `None`.
    pub fn set_warning(&mut self, warning: Option<&'static str>) {
        self.valid = warning.is_none();
        self.warning = warning;
    }
}

pub struct Form<'a, Message> {
    label: Option<&'a str>,
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that trims input values before applying the `on_change` function.
    pub fn new_trimmed<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value)
                .on_input(move |s| on_change(s.trim().to_string())),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Hides the characters of the input, for passwords.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    /// Sets the message produced when the user presses enter.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(text::p2_regular))
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).color(color::RED))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

/// Labelled drop-down list.
///
/// When `options` is empty, a disabled input is rendered instead so that a dependent selection
/// (e.g. the state of a country) cannot be picked before its parent.
pub fn select<'a, T, Message, F>(
    label: &'a str,
    placeholder: &'a str,
    options: &'a [T],
    selected: Option<T>,
    warning: Option<&'a str>,
    on_select: F,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
    Message: Clone + 'a,
    F: 'a + Fn(T) -> Message,
{
    let field: Element<'a, Message> = if options.is_empty() {
        TextInput::new(placeholder, "")
            .padding(10)
            .width(Length::Fill)
            .into()
    } else {
        let pick = PickList::new(options, selected, on_select)
            .placeholder(placeholder)
            .padding(10)
            .width(Length::Fill);
        if warning.is_some() {
            pick.style(theme::pick_list::invalid).into()
        } else {
            pick.into()
        }
    };

    Column::new()
        .push(text::p2_regular(label))
        .push(field)
        .push_maybe(warning.map(|message| text::caption(message).color(color::RED)))
        .width(Length::Fill)
        .spacing(5)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_clears_warning() {
        let mut value = Value::<String>::default();
        value.set_warning(Some("Email is required."));
        assert!(!value.valid);
        assert_eq!(value.warning, Some("Email is required."));

        value.edit("alice@example.com".to_string());
        assert!(value.valid);
        assert_eq!(value.warning, None);
        assert_eq!(value.value, "alice@example.com");
    }
}
