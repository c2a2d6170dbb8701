use std::{fmt::Display, str::FromStr};

use atlas_google::geocode::GeocodeRequest;

use crate::address::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    ApiKey,
    Geocode,
    TravelTimes,
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tab::ApiKey => "api-key",
                Tab::Geocode => "geocode",
                Tab::TravelTimes => "travel-times",
            }
        )
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api-key" | "apiKey" => Ok(Tab::ApiKey),
            "geocode" => Ok(Tab::Geocode),
            "travel-times" | "travelTimes" => Ok(Tab::TravelTimes),
            other => Err(format!("Unknown tab: {other}")),
        }
    }
}

/// A single form input changing value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Street(String),
    PostalCode(String),
    City(String),
    State(String),
    Country(String),
    ApiKey(String),
    RememberApiKey(bool),
}

/// What has to happen to the remembered API key after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Keep,
    Persist,
    Forget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub api_key: String,
    pub remember_api_key: bool,
    pub address: Address,
    pub active_tab: Tab,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            remember_api_key: false,
            address: Address::example(),
            active_tab: Tab::default(),
        }
    }
}

impl SessionState {
    pub fn apply(&mut self, change: FieldChange) -> KeyAction {
        match change {
            FieldChange::Street(street) => self.address.street = street,
            FieldChange::PostalCode(postalcode) => self.address.postalcode = postalcode,
            FieldChange::City(city) => self.address.city = city,
            FieldChange::State(state) => self.address.state = state,
            FieldChange::Country(country) => self.address.country = country,
            FieldChange::ApiKey(api_key) => {
                self.api_key = api_key;
                if self.remember_api_key {
                    return KeyAction::Persist;
                }
            }
            FieldChange::RememberApiKey(remember) => {
                self.remember_api_key = remember;
                return if remember {
                    KeyAction::Persist
                } else {
                    KeyAction::Forget
                };
            }
        }

        KeyAction::Keep
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn geocode_request(&self) -> GeocodeRequest {
        GeocodeRequest {
            api_key: self.api_key.clone(),
            street: self.address.street.clone(),
            postalcode: self.address.postalcode.clone(),
            city: self.address.city.clone(),
            state: self.address.state.clone(),
            country: self.address.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_changes() {
        let mut session = SessionState::default();

        assert_eq!(
            session.apply(FieldChange::Street(String::from("Lange Voorhout 34"))),
            KeyAction::Keep
        );
        session.apply(FieldChange::PostalCode(String::from("2514 EG")));
        session.apply(FieldChange::City(String::from("Den Haag")));
        session.apply(FieldChange::State(String::from("Zuid-Holland")));
        session.apply(FieldChange::Country(String::from("Nederland")));

        assert_eq!(
            session.address,
            Address {
                street: String::from("Lange Voorhout 34"),
                postalcode: String::from("2514 EG"),
                city: String::from("Den Haag"),
                state: String::from("Zuid-Holland"),
                country: String::from("Nederland"),
            }
        );
    }

    #[test]
    fn test_api_key_persisted_only_when_remembered() {
        let mut session = SessionState::default();

        assert_eq!(
            session.apply(FieldChange::ApiKey(String::from("first"))),
            KeyAction::Keep
        );
        assert_eq!(
            session.apply(FieldChange::RememberApiKey(true)),
            KeyAction::Persist
        );
        assert_eq!(
            session.apply(FieldChange::ApiKey(String::from("second"))),
            KeyAction::Persist
        );
        assert_eq!(
            session.apply(FieldChange::RememberApiKey(false)),
            KeyAction::Forget
        );
        assert_eq!(session.api_key, "second");
        assert!(!session.remember_api_key);
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("api-key".parse::<Tab>(), Ok(Tab::ApiKey));
        assert_eq!("travelTimes".parse::<Tab>(), Ok(Tab::TravelTimes));
        assert_eq!(Tab::Geocode.to_string().parse::<Tab>(), Ok(Tab::Geocode));
        assert!("results".parse::<Tab>().is_err());
    }

    #[test]
    fn test_geocode_request() {
        let mut session = SessionState::default();
        session.apply(FieldChange::ApiKey(String::from("key")));

        let request = session.geocode_request();

        assert_eq!(request.api_key, "key");
        assert_eq!(request.street, "Leidseplein 2");
        assert_eq!(request.country, "Netherlands");
    }
}
