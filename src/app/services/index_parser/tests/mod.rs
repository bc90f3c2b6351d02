//! Test fixtures for index file parsing


/// Index file with three variables and three rows
pub fn create_index_file() -> String {
    r#"SuperMAG indices
Selected indices: SME SML SMU
==========================================
<year> <month> <day> <hour> <min> <sec> <SME (nT)> <SML (nT)> <SMU (nT)>
2001 01 01 00 00 00 214.0 -107.0 107.0
2001 01 01 00 01 00 228.0 -115.0 113.0

2001 01 01 00 02 00 232.0 -116.0 116.0
"#
    .to_string()
}
