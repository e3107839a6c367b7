use serde::{Deserialize, Serialize};

use crate::config::HOME_CARRIER_TAG;

/// One carrier's participation in an excess-of-loss tower.
/// Deserialized verbatim from the quote record's `tower_json` field; every
/// field the storage layer may omit defaults rather than erroring, so a
/// half-filled tower mid-edit still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub carrier: String,
    /// The carrier's own written participation — NOT the full band size.
    #[serde(default)]
    pub limit: f64,
    /// When present, the full size of the quota-share band this layer
    /// belongs to; every member of the band carries the identical value.
    /// Absent ⇒ the layer is 100%-placed (non-shared).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_share: Option<f64>,
    /// Insured's deductible/SIR. Meaningful on the ground layer only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<f64>,
    /// Derived cache of the computed attachment point. Overwritten by
    /// `attachment::recalculate` on every structural change; never trusted
    /// as input.
    #[serde(default)]
    pub attachment: f64,
}

impl Layer {
    /// True if this layer is written by the home carrier.
    pub fn is_home(&self) -> bool {
        self.carrier.to_ascii_uppercase().contains(HOME_CARRIER_TAG)
    }

    /// The quota-share band size this layer participates in, or `None`
    /// for a 100%-placed layer. A stored zero counts as absent — band
    /// membership is keyed on a positive shared value.
    pub fn band_value(&self) -> Option<f64> {
        self.quota_share.filter(|&qs| qs > 0.0)
    }
}

/// Index of the home carrier's layer, if the tower contains one.
/// The home layer may sit anywhere in the array — index 0 is not
/// guaranteed even when the layer is logically primary.
pub fn home_index(layers: &[Layer]) -> Option<usize> {
    layers.iter().position(Layer::is_home)
}

/// Where a quoting option sits relative to the insured's retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Primary,
    Excess,
}

/// The slice of a quote record the engine consumes: the tower plus the
/// inputs the Option Namer needs. Persistence of the record itself is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteOption {
    #[serde(default)]
    pub tower: Vec<Layer>,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_retention: Option<f64>,
}
