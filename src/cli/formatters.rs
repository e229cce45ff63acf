//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of tax calculation from presentation.

use colored::Colorize;
use cukai::entity::EntityType;
use cukai::tax::TaxBreakdown;
use cukai::utils::{format_decimal_my, format_rate, format_ringgit};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

/// Pretty JSON for any serializable result
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

/// Catalogue entry as emitted by `entities --json`
#[derive(Serialize)]
pub struct EntityJson {
    pub key: &'static str,
    pub display_name: &'static str,
    pub accounting_standard: &'static str,
    pub accounting_standard_full_name: &'static str,
    pub tax_description: &'static str,
}

pub fn entities_json() -> Vec<EntityJson> {
    EntityType::ALL
        .iter()
        .map(|entity| {
            let profile = entity.profile();
            EntityJson {
                key: entity.as_str(),
                display_name: profile.display_name,
                accounting_standard: profile.accounting_standard,
                accounting_standard_full_name: profile.accounting_standard_full_name,
                tax_description: profile.tax_description,
            }
        })
        .collect()
}

/// Band of a schedule as emitted by `brackets --json`
#[derive(Serialize)]
pub struct BracketJson {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

pub fn brackets_json(entity: EntityType) -> Vec<BracketJson> {
    let mut lower = Decimal::ZERO;
    entity
        .schedule()
        .iter()
        .map(|bracket| {
            let upper = bracket.width().map(|w| lower + w);
            let row = BracketJson {
                lower,
                upper,
                rate: bracket.rate(),
            };
            lower = upper.unwrap_or(lower);
            row
        })
        .collect()
}

fn band_label(lower: Decimal, upper: Option<Decimal>) -> String {
    match upper {
        Some(upper) => format!("{} - {}", format_ringgit(lower), format_ringgit(upper)),
        None => format!("above {}", format_ringgit(lower)),
    }
}

/// Format a single calculation, optionally with the per-band table
pub fn format_breakdown_table(breakdown: &TaxBreakdown, show_tiers: bool) -> String {
    let profile = breakdown.entity_type.profile();
    let mut output = format!(
        "\n{} {} ({})\n\n",
        "🧾".cyan().bold(),
        profile.display_name.bold(),
        profile.accounting_standard
    );

    if show_tiers && !breakdown.tiers.is_empty() {
        #[derive(Tabled)]
        struct TierRow {
            #[tabled(rename = "Band")]
            band: String,
            #[tabled(rename = "Rate")]
            rate: String,
            #[tabled(rename = "Taxable (RM)")]
            taxable: String,
            #[tabled(rename = "Tax (RM)")]
            tax: String,
        }

        let rows: Vec<TierRow> = breakdown
            .tiers
            .iter()
            .map(|t| TierRow {
                band: band_label(t.lower, t.upper),
                rate: format_rate(t.rate),
                taxable: format_decimal_my(t.taxable),
                tax: format_decimal_my(t.tax),
            })
            .collect();

        let mut table = Table::new(&rows);
        table.with(Style::modern());
        table.modify(Columns::new(1..), Alignment::right());
        output.push_str(&table.to_string());
        output.push_str("\n\n");
    }

    let profit = if breakdown.profit < Decimal::ZERO {
        format_ringgit(breakdown.profit).red().to_string()
    } else {
        format_ringgit(breakdown.profit)
    };

    output.push_str(&format!("{:<20} {}\n", "Net Profit:".bold(), profit));
    output.push_str(&format!(
        "{:<20} {}\n",
        "Tax Payable:".bold(),
        format_ringgit(breakdown.tax_payable).green()
    ));
    output.push_str(&format!(
        "{:<20} {}\n",
        "Effective Rate:".bold(),
        format_rate(breakdown.effective_rate)
    ));
    output.push_str(&format!(
        "{:<20} {}\n",
        "Rates:".bold(),
        profile.tax_description
    ));

    output
}

/// Side-by-side table of every entity type for one profit
pub fn format_comparison_table(results: &[TaxBreakdown]) -> String {
    #[derive(Tabled)]
    struct CompareRow {
        #[tabled(rename = "Entity")]
        entity: String,
        #[tabled(rename = "Standard")]
        standard: String,
        #[tabled(rename = "Tax Payable")]
        tax: String,
        #[tabled(rename = "Effective Rate")]
        rate: String,
    }

    let lowest = results.iter().map(|b| b.tax_payable).min();

    let rows: Vec<CompareRow> = results
        .iter()
        .map(|b| {
            let tax = format_ringgit(b.tax_payable);
            CompareRow {
                entity: b.entity_type.to_string(),
                standard: b.entity_type.profile().accounting_standard.to_string(),
                tax: if Some(b.tax_payable) == lowest {
                    tax.green().to_string()
                } else {
                    tax
                },
                rate: format_rate(b.effective_rate),
            }
        })
        .collect();

    let profit = results.first().map(|b| b.profit).unwrap_or_default();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.modify(Columns::new(2..), Alignment::right());

    format!(
        "\n{} Tax on net profit of {}\n\n{}\n",
        "📊".cyan().bold(),
        format_ringgit(profit),
        table
    )
}

pub fn format_entities_table() -> String {
    #[derive(Tabled)]
    struct EntityRow {
        #[tabled(rename = "Key")]
        key: &'static str,
        #[tabled(rename = "Entity")]
        name: &'static str,
        #[tabled(rename = "Standard")]
        standard: String,
        #[tabled(rename = "Tax")]
        tax: &'static str,
    }

    let rows: Vec<EntityRow> = entities_json()
        .into_iter()
        .map(|e| EntityRow {
            key: e.key,
            name: e.display_name,
            standard: format!("{} ({})", e.accounting_standard, e.accounting_standard_full_name),
            tax: e.tax_description,
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    format!("\n{}\n", table)
}

pub fn format_schedule_table(entity: EntityType) -> String {
    #[derive(Tabled)]
    struct BandRow {
        #[tabled(rename = "Chargeable Income")]
        band: String,
        #[tabled(rename = "Rate")]
        rate: String,
    }

    let rows: Vec<BandRow> = brackets_json(entity)
        .into_iter()
        .map(|b| BandRow {
            band: band_label(b.lower, b.upper),
            rate: format_rate(b.rate),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.modify(Columns::new(1..), Alignment::right());

    format!(
        "\n{} {} rate schedule\n\n{}\n",
        "📐".cyan().bold(),
        entity.to_string().bold(),
        table
    )
}
