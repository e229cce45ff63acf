//! Statutory rate schedules (Ringgit bands and marginal rates)

use rust_decimal::Decimal;

/// One band of a marginal schedule. `width: None` is the unbounded remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub width: Option<u32>,
    pub rate_percent: u32,
}

impl TaxBracket {
    const fn band(width: u32, rate_percent: u32) -> Self {
        Self {
            width: Some(width),
            rate_percent,
        }
    }

    const fn remainder(rate_percent: u32) -> Self {
        Self {
            width: None,
            rate_percent,
        }
    }

    /// Marginal rate as a fraction (17% -> 0.17)
    pub fn rate(&self) -> Decimal {
        Decimal::new(self.rate_percent as i64, 2)
    }

    pub fn width(&self) -> Option<Decimal> {
        self.width.map(Decimal::from)
    }
}

/// Sdn Bhd: preferential 17% on the first RM500,000
pub static SDN_BHD_SCHEDULE: &[TaxBracket] = &[
    TaxBracket::band(500_000, 17),
    TaxBracket::remainder(24),
];

/// Enterprise profit is taxed as the owner's personal income
pub static PERSONAL_SCHEDULE: &[TaxBracket] = &[
    TaxBracket::band(5_000, 0),
    TaxBracket::band(15_000, 1),
    TaxBracket::band(15_000, 3),
    TaxBracket::band(15_000, 6),
    TaxBracket::band(20_000, 11),
    TaxBracket::band(30_000, 19),
    TaxBracket::band(150_000, 25),
    TaxBracket::band(150_000, 26),
    TaxBracket::remainder(28),
];

pub static BERHAD_SCHEDULE: &[TaxBracket] = &[TaxBracket::remainder(24)];
