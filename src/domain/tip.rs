use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TipDescription, TipMessage};

/// Community-submitted tip attached to a person record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tip {
    pub id: Option<i64>,
    /// Free-text account of where the person was seen.
    pub message: String,
    /// Short description of what the tip is based on.
    pub description: Option<String>,
    /// Date of the reported sighting.
    pub date: NaiveDate,
    /// URLs of attachments stored by the backend.
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Photo uploaded alongside a new tip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipPhoto {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Tip ready for submission to the records API.
#[derive(Clone, Debug)]
pub struct NewTip {
    pub record_id: i64,
    pub message: TipMessage,
    pub description: TipDescription,
    pub sighted_on: NaiveDate,
    pub photos: Vec<TipPhoto>,
}
