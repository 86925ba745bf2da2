//! TestCard - Test Card Stock Data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::view::JsonRow;

/// Assignment status of a test card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    /// In stock, free to assign
    #[default]
    Available,
    /// Assigned to a tester
    Assigned,
    /// Removed from circulation
    Retired,
}

/// A test card from the stock inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCard {
    /// Unique ID
    pub id: String,
    /// Masked primary account number, e.g. "4111 **** **** 1111"
    pub pan_masked: String,
    /// Card network
    pub network: String,
    /// Printed card holder name
    pub holder: String,
    /// Assignment status
    pub status: CardStatus,
    /// Tester the card is assigned to, if any
    pub assigned_to: Option<String>,
    /// Stock bundle the card belongs to
    pub bundle_id: Option<String>,
    /// Expiry in MM/YY form
    pub expires: String,
    /// Created timestamp
    pub created_time: DateTime<Utc>,
    /// Last update timestamp
    pub updated_time: DateTime<Utc>,
}

impl TestCard {
    /// Convert to a schemaless view row
    pub fn to_row(&self) -> Result<JsonRow> {
        JsonRow::from_serialize(self)
    }
}

impl Default for TestCard {
    fn default() -> Self {
        Self {
            id: String::new(),
            pan_masked: String::new(),
            network: String::new(),
            holder: String::new(),
            status: CardStatus::default(),
            assigned_to: None,
            bundle_id: None,
            expires: String::new(),
            created_time: Utc::now(),
            updated_time: Utc::now(),
        }
    }
}
