//! Shared test utilities and fixtures for station registry tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Station table with three stations; BOR's row carries a doubled tab
pub fn create_station_table() -> String {
    [
        "SuperMAG station information",
        "=================================",
        "IAGA\tGEOLON\tGEOLAT\tAACGMLON\tAACGMLAT\tSTATION-NAME\tOPERATOR-NUM",
        "ALE\t297.50\t82.50\t87.23\t86.91\t\"Alert\"\t1",
        "AND\t16.03\t69.30\t112.53\t67.24\t\"Andenes\"\t1",
        "BOR\t38.33\t58.03\t114.87\t53.96\t\"Borok\"\t\t1",
        "",
    ]
    .join("\n")
}

/// Write a station table into a temporary directory
pub fn create_station_table_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stations.txt");
    fs::write(&path, content).unwrap();
    (dir, path)
}
