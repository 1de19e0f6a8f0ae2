//! Countries served by LADX and their states.

pub const COUNTRIES: &[&str] = &["Rwanda", "Nigeria"];

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

const RWANDA_STATES: &[&str] = &[
    "Kigali",
    "Northern Province",
    "Western Province",
    "Eastern Province",
    "Southern Province",
];

const NIGERIA_STATES: &[&str] = &["Lagos", "Abuja", "Rivers", "Kaduna", "Kano"];

/// States of `country`, empty if the country is unknown.
pub fn states(country: &str) -> &'static [&'static str] {
    match country {
        "Rwanda" => RWANDA_STATES,
        "Nigeria" => NIGERIA_STATES,
        _ => &[],
    }
}

/// Selection of a country and one of its states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    country: Option<&'static str>,
    state: Option<&'static str>,
}

impl Region {
    pub fn country(&self) -> Option<&'static str> {
        self.country
    }

    pub fn state(&self) -> Option<&'static str> {
        self.state
    }

    /// Options of the state selector. The selector is disabled when this is empty.
    pub fn state_options(&self) -> &'static [&'static str] {
        self.country.map(states).unwrap_or(&[])
    }

    /// Selects a country, dropping the selected state if the new country does not have it.
    pub fn select_country(&mut self, country: &'static str) {
        self.country = Some(country);
        if let Some(state) = self.state {
            if !states(country).contains(&state) {
                self.state = None;
            }
        }
    }

    /// Selects a state. Ignored if it is not a state of the selected country.
    pub fn select_state(&mut self, state: &'static str) -> bool {
        if self.state_options().contains(&state) {
            self.state = Some(state);
            true
        } else {
            false
        }
    }
}
