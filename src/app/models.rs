//! Data models for SuperMAG processing
//!
//! This module contains the core data structures for representing per-station
//! magnetometer series, station site metadata and derived quantities.

use crate::constants::{HORIZONTAL_RATE_SUFFIX, HORIZONTAL_SUFFIX, TOTAL_SUFFIX};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Field Components
// =============================================================================

/// One of the six field components supplied by a station value line
///
/// The first three are in the station-local north/east/vertical ("nez")
/// frame, the last three in the geographic frame. The declaration order is
/// the column order in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Bx,
    By,
    Bz,
    BxGeo,
    ByGeo,
    BzGeo,
}

impl Component {
    /// All components in file column order
    pub const ALL: [Component; 6] = [
        Component::Bx,
        Component::By,
        Component::Bz,
        Component::BxGeo,
        Component::ByGeo,
        Component::BzGeo,
    ];

    /// Components in the station-local nez frame
    pub const NEZ: [Component; 3] = [Component::Bx, Component::By, Component::Bz];

    /// Column name used for this component
    pub fn name(&self) -> &'static str {
        match self {
            Component::Bx => "bx",
            Component::By => "by",
            Component::Bz => "bz",
            Component::BxGeo => "bx_geo",
            Component::ByGeo => "by_geo",
            Component::BzGeo => "bz_geo",
        }
    }

    /// Position of this component within a value line's six fields
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Component::ALL
            .into_iter()
            .find(|c| c.name() == s.trim().to_lowercase())
            .ok_or_else(|| Error::data_validation(format!("Unknown component: '{}'", s)))
    }
}

// =============================================================================
// Station Series
// =============================================================================

/// Site metadata attached to a station from the station information table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSite {
    /// Geographic longitude in degrees
    pub geolon: f64,

    /// Geographic latitude in degrees
    pub geolat: f64,

    /// Human-readable station name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Local time of day in hours, one entry per timestamp
    pub local_time: Vec<f64>,
}

/// Six parallel component sequences for one station
///
/// Every sequence has the same length as the owning dataset's timestamp
/// sequence. Entries start at the sentinel value and become NaN once masked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSeries {
    /// Three-letter station code
    pub code: String,

    components: [Vec<f64>; 6],

    /// Site metadata, present when station information was loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<StationSite>,
}

impl StationSeries {
    /// Create a series of `len` entries, all set to `fill`
    pub fn filled(code: impl Into<String>, len: usize, fill: f64) -> Self {
        Self {
            code: code.into(),
            components: std::array::from_fn(|_| vec![fill; len]),
            site: None,
        }
    }

    /// Number of time samples
    pub fn len(&self) -> usize {
        self.components[0].len()
    }

    /// True if the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of one component
    pub fn component(&self, component: Component) -> &[f64] {
        &self.components[component.index()]
    }

    /// Mutable values of one component
    pub fn component_mut(&mut self, component: Component) -> &mut [f64] {
        &mut self.components[component.index()]
    }

    /// Write all six components at one time index
    pub fn set_sample(&mut self, index: usize, values: [f64; 6]) {
        for (series, value) in self.components.iter_mut().zip(values) {
            series[index] = value;
        }
    }

    /// North component, nez frame
    pub fn bx(&self) -> &[f64] {
        self.component(Component::Bx)
    }

    /// East component, nez frame
    pub fn by(&self) -> &[f64] {
        self.component(Component::By)
    }

    /// Vertical component, nez frame
    pub fn bz(&self) -> &[f64] {
        self.component(Component::Bz)
    }

    /// Count of NaN entries over all components
    pub fn missing_count(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.iter().filter(|v| v.is_nan()).count())
            .sum()
    }

    /// Iterate over (component, values) pairs in file column order
    pub fn iter(&self) -> impl Iterator<Item = (Component, &[f64])> {
        Component::ALL
            .into_iter()
            .map(move |c| (c, self.components[c.index()].as_slice()))
    }
}

// =============================================================================
// Derived Fields
// =============================================================================

/// Kind of quantity derived from a station's components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedKind {
    /// sqrt(bx² + by²)
    HorizontalMagnitude,
    /// Euclidean norm of d(bx)/dt and d(by)/dt
    HorizontalRate,
    /// sqrt(bx² + by² + bz²)
    TotalMagnitude,
}

impl DerivedKind {
    /// Suffix appended to the station code to form the entry key
    pub fn suffix(&self) -> &'static str {
        match self {
            DerivedKind::HorizontalMagnitude => HORIZONTAL_SUFFIX,
            DerivedKind::HorizontalRate => HORIZONTAL_RATE_SUFFIX,
            DerivedKind::TotalMagnitude => TOTAL_SUFFIX,
        }
    }

    /// Entry key for a station, e.g. `ALE_dH`
    pub fn key(&self, station: &str) -> String {
        format!("{}{}", station, self.suffix())
    }
}

/// A per-station sequence computed from a [`StationSeries`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedField {
    pub station: String,
    pub kind: DerivedKind,
    pub values: Vec<f64>,
}

impl DerivedField {
    pub fn new(station: impl Into<String>, kind: DerivedKind, values: Vec<f64>) -> Self {
        Self {
            station: station.into(),
            kind,
            values,
        }
    }

    /// Key under which the field is stored
    pub fn key(&self) -> String {
        self.kind.key(&self.station)
    }
}
