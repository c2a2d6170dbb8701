use serde::{Deserialize, Serialize};

/// Postal address as typed into the form. Nothing is validated.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub postalcode: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    /// The address the form starts out with.
    pub fn example() -> Self {
        Self {
            street: String::from("Leidseplein 2"),
            postalcode: String::from("1017 PT"),
            city: String::from("Amsterdam"),
            state: String::from("Noord-Holland"),
            country: String::from("Netherlands"),
        }
    }
}
