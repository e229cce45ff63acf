// Tax module - Malaysian income tax for companies and enterprises

pub mod rates;
pub mod schedule;

pub use rates::TaxBracket;
pub use schedule::{TaxBreakdown, TierCharge};

use rust_decimal::Decimal;

use crate::entity::EntityType;
use crate::error::TaxError;
use crate::utils::parse_profit;

/// Tax payable in whole Ringgit for the given entity type and net profit.
///
/// A loss or zero profit always yields zero.
pub fn calculate_tax(entity_type: EntityType, profit: Decimal) -> Decimal {
    schedule::breakdown(entity_type, profit).tax_payable
}

/// Same calculation as [`calculate_tax`], keeping the per-band lines
pub fn calculate_breakdown(entity_type: EntityType, profit: Decimal) -> TaxBreakdown {
    schedule::breakdown(entity_type, profit)
}

/// Breakdown for every entity type, in catalogue order
pub fn compare_entities(profit: Decimal) -> Vec<TaxBreakdown> {
    EntityType::ALL
        .iter()
        .map(|entity| schedule::breakdown(*entity, profit))
        .collect()
}

/// Calculate from raw user input.
///
/// The selector is validated first, so an unknown entity type is reported
/// even when the profit is also malformed.
pub fn calculate_tax_for(selector: &str, profit: &str) -> Result<Decimal, TaxError> {
    let entity_type: EntityType = selector.parse()?;
    let profit = parse_profit(profit)?;
    Ok(calculate_tax(entity_type, profit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sdn_bhd_two_tier() {
        assert_eq!(calculate_tax(EntityType::SdnBhd, dec!(500000)), dec!(85000));
        assert_eq!(calculate_tax(EntityType::SdnBhd, dec!(600000)), dec!(109000));
        assert_eq!(calculate_tax(EntityType::SdnBhd, dec!(100000)), dec!(17000));
    }

    #[test]
    fn test_sdn_bhd_matches_closed_formula() {
        for profit in [dec!(1), dec!(499999.99), dec!(500000.01), dec!(1234567.89)] {
            let expected = if profit <= dec!(500000) {
                profit * dec!(0.17)
            } else {
                dec!(500000) * dec!(0.17) + (profit - dec!(500000)) * dec!(0.24)
            };
            assert_eq!(
                calculate_tax(EntityType::SdnBhd, profit),
                schedule::round_to_ringgit(expected)
            );
        }
    }

    #[test]
    fn test_berhad_flat() {
        assert_eq!(calculate_tax(EntityType::Berhad, dec!(1000000)), dec!(240000));
        assert_eq!(calculate_tax(EntityType::Berhad, dec!(10)), dec!(2)); // 2.4
    }

    #[test]
    fn test_enterprise_progressive() {
        assert_eq!(calculate_tax(EntityType::Enterprise, dec!(5000)), Decimal::ZERO);
        assert_eq!(calculate_tax(EntityType::Enterprise, dec!(20000)), dec!(150));
        // 150 + 450 + 900 = 1500
        assert_eq!(calculate_tax(EntityType::Enterprise, dec!(50000)), dec!(1500));
        // 1500 + 2200 + 5700 = 9400
        assert_eq!(calculate_tax(EntityType::Enterprise, dec!(100000)), dec!(9400));
        // 9400 + 37500 + 39000 + 28000 = 113900
        assert_eq!(calculate_tax(EntityType::Enterprise, dec!(500000)), dec!(113900));
    }

    #[test]
    fn test_non_positive_profit_is_untaxed() {
        for entity in EntityType::ALL {
            assert_eq!(calculate_tax(entity, Decimal::ZERO), Decimal::ZERO);
            assert_eq!(calculate_tax(entity, dec!(-0.01)), Decimal::ZERO);
            assert_eq!(calculate_tax(entity, dec!(-1000000)), Decimal::ZERO);
        }
    }

    #[test]
    fn test_midpoint_rounds_up() {
        // 50 * 17% = 8.50
        assert_eq!(calculate_tax(EntityType::SdnBhd, dec!(50)), dec!(9));
        // 5150 -> 150 * 1% = 1.50
        assert_eq!(calculate_tax(EntityType::Enterprise, dec!(5150)), dec!(2));
    }

    #[test]
    fn test_tax_is_monotonic_in_profit() {
        for entity in EntityType::ALL {
            let mut previous = Decimal::ZERO;
            let mut profit = dec!(-1000);
            while profit <= dec!(1200000) {
                let tax = calculate_tax(entity, profit);
                assert!(tax >= previous, "{} tax fell at profit {}", entity, profit);
                assert!(tax >= Decimal::ZERO);
                assert_eq!(tax, tax.trunc(), "tax must be whole Ringgit");
                previous = tax;
                profit += dec!(2499.75);
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = calculate_breakdown(EntityType::Enterprise, dec!(321987.65));
        for _ in 0..5 {
            assert_eq!(calculate_breakdown(EntityType::Enterprise, dec!(321987.65)), first);
        }
    }

    #[test]
    fn test_compare_entities_order() {
        let results = compare_entities(dec!(600000));
        let entities: Vec<EntityType> = results.iter().map(|b| b.entity_type).collect();
        assert_eq!(entities, EntityType::ALL.to_vec());
        assert_eq!(results[0].tax_payable, dec!(109000));
        assert_eq!(results[2].tax_payable, dec!(144000));
    }

    #[test]
    fn test_calculate_tax_for_raw_input() {
        assert_eq!(calculate_tax_for("sdn_bhd", "RM 500,000").unwrap(), dec!(85000));
        assert_eq!(calculate_tax_for("Enterprise", "20000.00").unwrap(), dec!(150));
    }

    #[test]
    fn test_calculate_tax_for_rejects_bad_input() {
        assert!(matches!(
            calculate_tax_for("llp", "1000"),
            Err(TaxError::InvalidEntityType(_))
        ));
        assert!(matches!(
            calculate_tax_for("berhad", "lots"),
            Err(TaxError::InvalidProfitValue(_))
        ));
        // Entity type is checked before the profit
        assert!(matches!(
            calculate_tax_for("llp", "NaN"),
            Err(TaxError::InvalidEntityType(_))
        ));
    }
}
