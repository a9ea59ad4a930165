use std::path::Path;

use anyhow::Context;

use crate::models::RawProfile;

#[derive(Debug, Clone)]
pub struct ImportedProfile {
    pub student: String,
    pub profile: RawProfile,
}

/// Reads profiles from a CSV with the dataset column headers and an
/// optional `Student` column.
pub fn read_profiles(csv_path: &Path) -> anyhow::Result<Vec<ImportedProfile>> {
    let reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    read_from(reader)
}

pub fn read_from<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> anyhow::Result<Vec<ImportedProfile>> {
    let headers = reader.headers().context("failed to read CSV headers")?.clone();
    let student_column = headers.iter().position(|name| name == "Student");
    let mut profiles = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row_number = index + 1;
        let record = result.with_context(|| format!("unreadable CSV record on row {row_number}"))?;
        let profile: RawProfile = record
            .deserialize(Some(&headers))
            .with_context(|| format!("invalid profile on row {row_number}"))?;
        let student = student_column
            .and_then(|column| record.get(column))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("row-{row_number}"));

        profiles.push(ImportedProfile { student, profile });
    }

    Ok(profiles)
}
