use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use super::rates::TaxBracket;
use crate::entity::EntityType;

/// Income taxed inside a single band
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCharge {
    pub lower: Decimal,
    /// `None` for the unbounded top band
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    pub taxable: Decimal,
    pub tax: Decimal,
}

/// Full result of a tax calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub entity_type: EntityType,
    pub profit: Decimal,
    pub tiers: Vec<TierCharge>,
    pub gross_tax: Decimal,
    pub tax_payable: Decimal,
    pub effective_rate: Decimal,
}

/// Walk a marginal schedule from the bottom band up.
///
/// Each band taxes the lesser of the remaining profit and its width; the walk
/// stops as soon as the profit is used up. Non-positive profit yields no tiers.
pub fn walk_brackets(schedule: &[TaxBracket], profit: Decimal) -> Vec<TierCharge> {
    let mut tiers = Vec::new();
    let mut remaining = profit;
    let mut lower = Decimal::ZERO;

    for bracket in schedule {
        if remaining <= Decimal::ZERO {
            break;
        }

        let width = bracket.width();
        let taxable = match width {
            Some(w) => remaining.min(w),
            None => remaining,
        };
        let tax = taxable * bracket.rate();

        debug!(
            "Band from {} at {}%: taxable {} -> tax {}",
            lower, bracket.rate_percent, taxable, tax
        );

        tiers.push(TierCharge {
            lower,
            upper: width.map(|w| lower + w),
            rate: bracket.rate(),
            taxable,
            tax,
        });

        match width {
            Some(w) => {
                remaining -= w;
                lower += w;
            }
            None => remaining = Decimal::ZERO,
        }
    }

    tiers
}

/// Round to whole Ringgit, half away from zero
pub fn round_to_ringgit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Build the breakdown for one entity type
pub fn breakdown(entity_type: EntityType, profit: Decimal) -> TaxBreakdown {
    let tiers = walk_brackets(entity_type.schedule(), profit);
    let gross_tax: Decimal = tiers.iter().map(|t| t.tax).sum();
    let tax_payable = round_to_ringgit(gross_tax).max(Decimal::ZERO);

    debug!(
        "{} profit {}: gross tax {} rounded to {}",
        entity_type, profit, gross_tax, tax_payable
    );

    let effective_rate = if profit > Decimal::ZERO {
        (tax_payable / profit).round_dp(4)
    } else {
        Decimal::ZERO
    };

    TaxBreakdown {
        entity_type,
        profit,
        tiers,
        gross_tax,
        tax_payable,
        effective_rate,
    }
}
