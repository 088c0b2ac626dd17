//! Aspect ratings for a product and their chart projection.
//!
//! The model is the backend's view of the data; [`project`] turns it into a
//! render-ready chart so frontends never re-derive fractions or captions.

use serde::{Deserialize, Serialize};

/// Upper bound of the rating scale.
pub const RATING_SCALE: f64 = 5.0;

/// Rating for one product aspect, e.g. "Battery" or "Camera".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRating {
    pub name: String,
    pub rating: f64,
}

impl ComponentRating {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

/// Aspect ratings as delivered by the backend.
///
/// The backend is trusted to keep every rating on the `0..=5` scale; nothing
/// here re-validates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsModel {
    pub component_ratings: Vec<ComponentRating>,
    pub overall_rating: Option<f64>,
}

impl RatingsModel {
    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.component_ratings.is_empty() && self.overall_rating.is_none()
    }
}

/// One horizontal bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBar {
    pub label: String,
    pub value: f64,
    /// `value / RATING_SCALE`.
    pub fraction: f64,
    /// Display caption, e.g. `4.2/5`.
    pub caption: String,
}

/// The overall-score gauge shown next to the bars.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingGauge {
    pub value: f64,
    pub fraction: f64,
    pub caption: String,
}

/// Render-ready chart data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsChart {
    pub bars: Vec<RatingBar>,
    pub overall: Option<RatingGauge>,
}

impl RatingsChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.overall.is_none()
    }
}

fn caption_for(value: f64) -> String {
    format!("{value:.1}/{RATING_SCALE:.0}")
}

/// Project backend ratings into chart form. Deterministic and pure.
pub fn project(model: &RatingsModel) -> RatingsChart {
    let bars = model
        .component_ratings
        .iter()
        .map(|component| RatingBar {
            label: component.name.clone(),
            value: component.rating,
            fraction: component.rating / RATING_SCALE,
            caption: caption_for(component.rating),
        })
        .collect();

    let overall = model.overall_rating.map(|value| RatingGauge {
        value,
        fraction: value / RATING_SCALE,
        caption: caption_for(value),
    });

    RatingsChart { bars, overall }
}
