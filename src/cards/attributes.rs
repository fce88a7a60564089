//! Card attributes: elements and rarities.
//!
//! ## Element
//!
//! Every card and enemy carries exactly one element. `None` is a real
//! element for chaining purposes: two `None` cards link to each other.
//!
//! ## Rarity
//!
//! Display and reward data only; the battle rules never read it.

use serde::{Deserialize, Serialize};

/// Elemental attribute of a card or enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[default]
    None,
    Fire,
    Water,
    Earth,
    Wind,
    Thunder,
    Light,
    Dark,
}

impl Element {
    /// All elements in declaration order.
    pub const ALL: [Element; 8] = [
        Element::None,
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Wind,
        Element::Thunder,
        Element::Light,
        Element::Dark,
    ];

    /// Upper-case name as used in data files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Element::None => "NONE",
            Element::Fire => "FIRE",
            Element::Water => "WATER",
            Element::Earth => "EARTH",
            Element::Wind => "WIND",
            Element::Thunder => "THUNDER",
            Element::Light => "LIGHT",
            Element::Dark => "DARK",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown element: {s:?}"))
    }
}

/// Card rarity tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    R,
    SR,
    SSR,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_parse_case_insensitive() {
        assert_eq!(" fire ".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("THUNDER".parse::<Element>(), Ok(Element::Thunder));
        assert_eq!("none".parse::<Element>(), Ok(Element::None));
        assert!("plasma".parse::<Element>().is_err());
    }

    #[test]
    fn test_element_display_round_trip() {
        for element in Element::ALL {
            assert_eq!(element.to_string().parse::<Element>(), Ok(element));
        }
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::R < Rarity::SR);
        assert!(Rarity::SR < Rarity::SSR);
    }

    #[test]
    fn test_attribute_serialization() {
        let json = serde_json::to_string(&(Element::Water, Rarity::SSR)).unwrap();
        let back: (Element, Rarity) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, (Element::Water, Rarity::SSR));
    }
}
