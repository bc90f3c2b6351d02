//! Test utilities and fixtures for SuperMAG parser testing
//!
//! Fixtures are small hand-written files in the layouts of the known
//! revisions.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod dataset_tests;
mod revision_tests;

/// Revision 2 file: two stations, two records, BOR absent from the second
pub fn create_two_station_v2() -> String {
    r#"SuperMAG data file
Revision: 2
Selected Parameters: IAGA N E Z Ngeo Egeo Zgeo
Stations: ALE,BOR
2001 01 01 00 00 00
ALE   -8.6    5.8   -2.6   -8.3    6.2   -2.6
BOR   -2.3    0.6    2.6   -2.2    0.7    2.6
2001 01 01 00 01 00
ALE   -8.4    5.9   -2.5   -8.1    6.3   -2.5"#
        .to_string()
}

/// Revision 5 file with the same content as [`create_two_station_v2`]
pub fn create_two_station_v5() -> String {
    r#"File created by SuperMAG
Revision: 5
Selected Stations: ALE,BOR
Columns: IAGA MLT MLAT SZA N E Z Ngeo Egeo Zgeo
==========================================================
2001 01 01 00 00 00 2
ALE   22.25  86.91  112.34   -8.6    5.8   -2.6   -8.3    6.2   -2.6
BOR    3.10  53.96  151.77   -2.3    0.6    2.6   -2.2    0.7    2.6
2001 01 01 00 01 00 1
ALE   22.27  86.91  112.33   -8.4    5.9   -2.5   -8.1    6.3   -2.5"#
        .to_string()
}

/// Revision 6 file with four records on an irregular grid
///
/// North component of ALE is 0, 60, 120, 300 at t = 0, 60, 120, 300 s and
/// east is zero. The forward and central stencils give 1 nT/s; the backward
/// stencil gives (900 - 480 + 60) / (180 + 60) = 2 nT/s at the last record.
pub fn create_linear_v6() -> String {
    r#"File created by SuperMAG
Revision: 6
Selected Stations: ALE
==========================================================
2001 01 01 00 00 00 1
ALE  0.0 0.0 0.0    0.0 0.0 0.0    0.0 0.0 0.0
2001 01 01 00 01 00 1
ALE  0.0 0.0 0.0   60.0 0.0 3.0   60.0 0.0 3.0
2001 01 01 00 02 00 1
ALE  0.0 0.0 0.0  120.0 0.0 4.0  120.0 0.0 4.0
2001 01 01 00 05 00 1
ALE  0.0 0.0 0.0  300.0 0.0 0.0  300.0 0.0 0.0"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
