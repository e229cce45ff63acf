//! Malaysian business entity types and their static reporting profile

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaxError;
use crate::tax::rates::{self, TaxBracket};

/// Legal entity types supported by the calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    SdnBhd,     // Private limited company
    Enterprise, // Sole proprietorship / partnership, personal rates
    Berhad,     // Public listed company
}

/// Descriptive attributes attached to an entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityProfile {
    pub display_name: &'static str,
    pub accounting_standard: &'static str,
    pub accounting_standard_full_name: &'static str,
    pub tax_description: &'static str,
}

const MPERS: &str = "Malaysian Private Entities Reporting Standard";
const MFRS: &str = "Malaysian Financial Reporting Standards";

static SDN_BHD_PROFILE: EntityProfile = EntityProfile {
    display_name: "Sdn Bhd",
    accounting_standard: "MPERS",
    accounting_standard_full_name: MPERS,
    tax_description: "17% on first RM500,000, 24% on remainder",
};

static ENTERPRISE_PROFILE: EntityProfile = EntityProfile {
    display_name: "Enterprise",
    accounting_standard: "MPERS",
    accounting_standard_full_name: MPERS,
    tax_description: "Personal income tax rates (0% - 28%)",
};

static BERHAD_PROFILE: EntityProfile = EntityProfile {
    display_name: "Berhad",
    accounting_standard: "MFRS",
    accounting_standard_full_name: MFRS,
    tax_description: "24% flat rate",
};

impl EntityType {
    /// Every entity type, in catalogue order
    pub const ALL: [EntityType; 3] = [
        EntityType::SdnBhd,
        EntityType::Enterprise,
        EntityType::Berhad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::SdnBhd => "SDN_BHD",
            EntityType::Enterprise => "ENTERPRISE",
            EntityType::Berhad => "BERHAD",
        }
    }

    pub fn profile(&self) -> &'static EntityProfile {
        match self {
            EntityType::SdnBhd => &SDN_BHD_PROFILE,
            EntityType::Enterprise => &ENTERPRISE_PROFILE,
            EntityType::Berhad => &BERHAD_PROFILE,
        }
    }

    /// Marginal bracket schedule used to tax this entity's profit
    pub fn schedule(&self) -> &'static [TaxBracket] {
        match self {
            EntityType::SdnBhd => rates::SDN_BHD_SCHEDULE,
            EntityType::Enterprise => rates::PERSONAL_SCHEDULE,
            EntityType::Berhad => rates::BERHAD_SCHEDULE,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().display_name)
    }
}

impl FromStr for EntityType {
    type Err = TaxError;

    /// Accepts `sdn_bhd`, `Sdn Bhd`, `SDN-BHD`, `enterprise`, `berhad`, `bhd`...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' ' | '.'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "sdnbhd" => Ok(EntityType::SdnBhd),
            "enterprise" => Ok(EntityType::Enterprise),
            "berhad" | "bhd" => Ok(EntityType::Berhad),
            _ => Err(TaxError::InvalidEntityType(s.trim().to_string())),
        }
    }
}
