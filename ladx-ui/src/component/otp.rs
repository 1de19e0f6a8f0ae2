use iced::{widget::text_input, Alignment, Length};

use crate::{component::text, widget::*};

pub const OTP_LENGTH: usize = 6;

/// Digits typed in the six boxes of a one-time passcode input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpCode {
    digits: [Option<char>; OTP_LENGTH],
}

impl OtpCode {
    /// Applies the content of box `index` as reported by the text input.
    ///
    /// A single ASCII digit or the empty string is accepted. Typing over a filled box keeps the
    /// new digit, whichever side of the old one the cursor was. A full code pasted into any box
    /// fills every box, even when the box already held a digit. Anything else is ignored and
    /// `false` is returned.
    pub fn set(&mut self, index: usize, value: &str) -> bool {
        if index >= OTP_LENGTH {
            return false;
        }

        if self.fill(value) {
            return true;
        }

        let old = self.digits[index];
        if let Some(old) = old {
            // Paste into a filled box, with the cursor after or before the old digit.
            if value.len() == OTP_LENGTH + 1 {
                let pasted = value
                    .strip_prefix(old)
                    .filter(|rest| rest.chars().all(|c| c.is_ascii_digit()))
                    .or_else(|| value.strip_suffix(old));
                if let Some(pasted) = pasted {
                    return self.fill(pasted);
                }
            }
        }

        let mut chars = value.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) => {
                self.digits[index] = None;
                true
            }
            (Some(c), None, _) if c.is_ascii_digit() => {
                self.digits[index] = Some(c);
                true
            }
            // Cursor after the existing digit: the input reports "<old><new>".
            (Some(first), Some(new), None) if Some(first) == old && new.is_ascii_digit() => {
                self.digits[index] = Some(new);
                true
            }
            // Cursor before the existing digit: the input reports "<new><old>".
            (Some(new), Some(last), None) if Some(last) == old && new.is_ascii_digit() => {
                self.digits[index] = Some(new);
                true
            }
            _ => false,
        }
    }

    /// Fills every box from a complete code.
    fn fill(&mut self, code: &str) -> bool {
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        for (slot, c) in self.digits.iter_mut().zip(code.chars()) {
            *slot = Some(c);
        }
        true
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.digits.get(index).copied().flatten()
    }

    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.digits = [None; OTP_LENGTH];
    }
}

/// Widget id of the box at `index`, used to move focus between boxes.
pub fn box_id(index: usize) -> text_input::Id {
    text_input::Id::new(format!("otp-{}", index))
}

pub fn view<'a, Message, F>(code: &OtpCode, on_input: F) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: 'a + Fn(usize, String) -> Message + Clone,
{
    let mut row = Row::new().spacing(10).align_y(Alignment::Center);
    for i in 0..OTP_LENGTH {
        let value = code.digit(i).map(String::from).unwrap_or_default();
        let on_input = on_input.clone();
        row = row.push(
            TextInput::new("", &value)
                .id(box_id(i))
                .on_input(move |s| on_input(i, s))
                .size(text::H2_SIZE)
                .padding(10)
                .width(Length::Fixed(52.0)),
        );
    }
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_keystroke_is_ignored() {
        let mut code = OtpCode::default();
        assert!(code.set(3, "5"));
        assert!(!code.set(3, "x"));
        assert_eq!(code.digit(3), Some('5'));
        // Typing a letter after the digit is ignored too.
        assert!(!code.set(3, "5x"));
        assert_eq!(code.digit(3), Some('5'));
    }

    #[test]
    fn typing_over_a_filled_box_replaces_it() {
        let mut code = OtpCode::default();
        code.set(0, "1");
        assert!(code.set(0, "17"));
        assert_eq!(code.digit(0), Some('7'));
    }

    #[test]
    fn typing_before_a_filled_box_digit_replaces_it() {
        let mut code = OtpCode::default();
        code.set(0, "5");
        assert!(code.set(0, "75"));
        assert_eq!(code.digit(0), Some('7'));
        assert!(!code.set(0, "x7"));
        assert_eq!(code.digit(0), Some('7'));
    }

    #[test]
    fn paste_into_a_filled_box() {
        let mut code = OtpCode::default();
        code.set(0, "5");
        assert!(code.set(0, "5123456"));
        assert_eq!(code.code(), "123456");

        code.clear();
        code.set(3, "9");
        assert!(code.set(3, "6543219"));
        assert_eq!(code.code(), "654321");

        assert!(!code.set(2, "412345a"));
        assert_eq!(code.code(), "654321");
    }

    #[test]
    fn empty_value_clears_the_box() {
        let mut code = OtpCode::default();
        code.set(2, "9");
        assert!(code.set(2, ""));
        assert_eq!(code.digit(2), None);
    }

    #[test]
    fn paste_fills_every_box() {
        let mut code = OtpCode::default();
        assert!(code.set(4, "123456"));
        assert!(code.is_complete());
        assert_eq!(code.code(), "123456");

        assert!(!code.set(0, "12345a"));
        assert_eq!(code.code(), "123456");

        code.clear();
        assert_eq!(code.code(), "");
        assert!(!code.is_complete());
    }

    #[test]
    fn out_of_range_box() {
        let mut code = OtpCode::default();
        assert!(!code.set(OTP_LENGTH, "1"));
        assert_eq!(code.digit(OTP_LENGTH), None);
    }

    #[test]
    fn partial_code_is_not_complete() {
        let mut code = OtpCode::default();
        for (i, d) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            code.set(i, d);
        }
        assert!(!code.is_complete());
        assert_eq!(code.code(), "12345");
    }
}
