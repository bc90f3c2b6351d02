//! Application constants for the SuperMAG reader
//!
//! This module contains the file-format markers, sentinel values, component
//! names and web-service defaults used throughout the reader.

// =============================================================================
// Data Values
// =============================================================================

/// Reserved value written by SuperMAG in place of unreported data
pub const SENTINEL_VALUE: f64 = 999999.0;

/// Number of numeric fields supplied by each station value line
pub const VALUES_PER_STATION_LINE: usize = 6;

/// Length of a station code
pub const STATION_CODE_LEN: usize = 3;

// =============================================================================
// Magnetometer File Markers
// =============================================================================

/// Header markers for magnetometer data files
pub mod markers {
    /// Marker of the header line introducing the station list
    pub const STATION_LIST: &str = "Selected";

    /// Marker showing the station codes are on the same line as [`STATION_LIST`]
    pub const STATIONS_INLINE: &str = "Stations";

    /// Marker of the revision declaration line
    pub const REVISION: &str = "Revision";

    /// Section separator ending the header
    pub const SEPARATOR: &str = "==";

    /// Alternate header terminator used by older revisions
    pub const PARAMETERS: &str = "Parameters";

    /// Separator ending the station information table header
    pub const STATION_INFO_SEPARATOR: &str = "===";
}

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Format of the six date/time tokens after concatenation
pub const COMPACT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Width of [`COMPACT_TIMESTAMP_FORMAT`] once rendered
pub const COMPACT_TIMESTAMP_WIDTH: usize = 14;

/// Format of the six date/time tokens joined by single spaces
pub const SPACED_TIMESTAMP_FORMAT: &str = "%Y %m %d %H %M %S";

/// Number of leading date/time tokens on every record line
pub const TIMESTAMP_TOKENS: usize = 6;

/// Pattern identifying the first line of a record
pub const RECORD_START_PATTERN: &str = r"^\d{4}\s+\d{2}\s+\d{2}\s+";

/// Pattern extracting `<name (units)>` declarations in index file headers
pub const INDEX_VARIABLE_PATTERN: &str = r"<(.+?)\s*(\(\w+\))?>";

// =============================================================================
// Derived Field Naming
// =============================================================================

/// Suffix for horizontal magnitude entries
pub const HORIZONTAL_SUFFIX: &str = "_H";

/// Suffix for horizontal rate-of-change entries
pub const HORIZONTAL_RATE_SUFFIX: &str = "_dH";

/// Suffix for total field magnitude entries
pub const TOTAL_SUFFIX: &str = "_B";

// =============================================================================
// Local Time
// =============================================================================

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DEGREES_PER_CIRCLE: f64 = 360.0;

// =============================================================================
// Web Service
// =============================================================================

/// SuperMAG web service endpoints and request vocabularies
pub mod remote {
    /// Base URL of the SuperMAG services
    pub const BASE_URL: &str = "https://supermag.jhuapl.edu/services/";

    /// Index endpoint
    pub const INDICES_ENDPOINT: &str = "indices.php";

    /// Magnetometer data endpoint
    pub const DATA_ENDPOINT: &str = "data-api.php";

    /// Start-time format expected by the service
    pub const START_FORMAT: &str = "%Y-%m-%dT%H:%M";

    /// Epoch-seconds field present in every response record
    pub const TIME_FIELD: &str = "tval";

    /// Variables extracted from index responses
    pub const INDEX_VARIABLES: &[&str] = &[
        "tval", "SME", "SML", "SMLmlat", "SMLmlt", "SMLglat", "SMLglon", "SMU", "SMUmlat",
        "SMUmlt", "SMUglat", "SMUglon", "smr",
    ];

    /// Index keys requested from the service
    pub const INDEX_REQUEST_KEYS: &[&str] = &[
        "sme", "sml", "smu", "mlat", "mlt", "glat", "glon", "num", "smr", "ltsmr", "ltnum",
    ];
}
