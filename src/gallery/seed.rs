use super::card::CardRecord;

/// Cards shown on first launch, before the user edits the settings file.
pub fn default_seed() -> Vec<CardRecord> {
    vec![
        CardRecord::new("1", "Rust Programming", false),
        CardRecord::new("2", "Data Structures", true),
        CardRecord::new("3", "Operating Systems", false),
        CardRecord::new("4", "Computer Networks", false),
    ]
}
