//! The delivery fee policy.
//!
//! Modeled as an ordered list of (city pattern, fee) rules evaluated
//! top-to-bottom over the free-form destination text, with a flat fallback
//! fee and a free-shipping threshold on the order subtotal. The fee is cheap
//! to recompute and is evaluated fresh on every read.

use equippro_core::Price;

/// One per-city rule: a lowercase substring pattern and its fee.
#[derive(Debug, Clone)]
pub struct CityRule {
    /// Lowercase pattern matched against the lowercased destination text.
    pub pattern: String,
    pub fee: Price,
}

/// Delivery pricing rules.
#[derive(Debug, Clone)]
pub struct DeliveryPolicy {
    /// Subtotal strictly above this ships free, regardless of destination.
    free_shipping_threshold: Price,
    /// Ordered city rules; the first match wins.
    city_rules: Vec<CityRule>,
    /// Fee for destinations no rule matches, including empty text.
    default_fee: Price,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Price::from_rubles(500_000),
            city_rules: vec![
                CityRule {
                    pattern: "москва".to_string(),
                    fee: Price::from_rubles(5_000),
                },
                CityRule {
                    pattern: "санкт-петербург".to_string(),
                    fee: Price::from_rubles(7_000),
                },
            ],
            default_fee: Price::from_rubles(10_000),
        }
    }
}

impl DeliveryPolicy {
    /// Quote the delivery fee for a subtotal and a destination city.
    ///
    /// An empty cart needs no delivery; the free-shipping threshold takes
    /// precedence over city matching, so an over-threshold order to an
    /// unrecognized city still ships free. City matching is a
    /// case-insensitive substring test, first rule wins.
    #[must_use]
    pub fn fee(&self, subtotal: Price, destination: &str) -> Price {
        if subtotal.is_zero() {
            return Price::ZERO;
        }
        if subtotal > self.free_shipping_threshold {
            return Price::ZERO;
        }

        let destination = destination.to_lowercase();
        self.city_rules
            .iter()
            .find(|rule| destination.contains(&rule.pattern))
            .map_or(self.default_fee, |rule| rule.fee)
    }

    /// The free-shipping threshold, for display ("бесплатно от 500 000 ₽").
    #[must_use]
    pub const fn free_shipping_threshold(&self) -> Price {
        self.free_shipping_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(subtotal: i64, destination: &str) -> Price {
        DeliveryPolicy::default().fee(Price::from_rubles(subtotal), destination)
    }

    #[test]
    fn test_empty_cart_ships_free() {
        assert_eq!(fee(0, "Москва"), Price::ZERO);
        assert_eq!(fee(0, ""), Price::ZERO);
        assert_eq!(fee(0, "куда угодно"), Price::ZERO);
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        // Exactly at the threshold the normal rules still apply.
        assert_eq!(fee(500_000, "Новосибирск"), Price::from_rubles(10_000));
        assert_eq!(fee(500_001, "Новосибирск"), Price::ZERO);
    }

    #[test]
    fn test_threshold_beats_city_rules() {
        assert_eq!(fee(500_001, "Москва"), Price::ZERO);
        assert_eq!(fee(500_001, "Санкт-Петербург"), Price::ZERO);
    }

    #[test]
    fn test_city_fees() {
        assert_eq!(fee(100_000, "Москва"), Price::from_rubles(5_000));
        assert_eq!(fee(100_000, "Санкт-Петербург"), Price::from_rubles(7_000));
        assert_eq!(fee(100_000, "Новосибирск"), Price::from_rubles(10_000));
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        assert_eq!(fee(100_000, "г. МОСКВА, центр"), Price::from_rubles(5_000));
        assert_eq!(fee(100_000, "санкт-петербург"), Price::from_rubles(7_000));
    }

    #[test]
    fn test_first_rule_wins() {
        // Text matching both rules takes the first one's fee.
        assert_eq!(
            fee(100_000, "Москва или Санкт-Петербург"),
            Price::from_rubles(5_000)
        );
    }

    #[test]
    fn test_empty_destination_gets_default_fee() {
        assert_eq!(fee(100_000, ""), Price::from_rubles(10_000));
    }
}
