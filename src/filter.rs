use std::io::Write;

use anyhow::Result;

use crate::models::DeviceRecord;

/// True when one of the record's versions is `target`. Entries are checked in
/// order and scanning stops at the first hit, so an entry after the hit is
/// never read.
pub fn supports_version(record: &DeviceRecord, target: &str) -> Result<bool> {
    for version in &record.supported_versions {
        if version.is_version(target)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Codenames of the records supporting `target`, in input order.
///
/// Fails if a version entry read before a hit has no code, or a matching
/// record has no codename. Non-matching records never have their codename read.
pub fn matching_codenames(records: &[DeviceRecord], target: &str) -> Result<Vec<String>> {
    let mut codenames = Vec::new();
    for record in records {
        if supports_version(record, target)? {
            codenames.push(record.codename()?.into_owned());
        }
    }
    Ok(codenames)
}

/// Writes one codename per line and returns how many were written.
pub fn write_matches<W: Write>(out: &mut W, codenames: &[String]) -> std::io::Result<usize> {
    for codename in codenames {
        writeln!(out, "{}", codename)?;
    }
    Ok(codenames.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VersionEntry;

    fn device(codename: &str, versions: &[&str]) -> DeviceRecord {
        DeviceRecord::new(codename).with_versions(versions.iter().copied())
    }

    #[test]
    fn test_supports_version_exact_match_only() {
        let record = device("lavender", &["eleven", "Twelve", "twelve-beta"]);
        assert!(!supports_version(&record, "twelve").unwrap());
        assert!(supports_version(&record, "eleven").unwrap());
    }

    #[test]
    fn test_empty_versions_never_match() {
        assert!(!supports_version(&device("ginkgo", &[]), "twelve").unwrap());
        assert!(!supports_version(&device("ginkgo", &[]), "").unwrap());
    }

    #[test]
    fn test_entries_after_hit_are_not_read() {
        let mut record = device("lavender", &["twelve"]);
        record.supported_versions.push(VersionEntry { version_code: None });
        assert!(supports_version(&record, "twelve").unwrap());
    }

    #[test]
    fn test_entry_without_code_before_hit_fails() {
        let mut record = device("lavender", &[]);
        record.supported_versions.push(VersionEntry { version_code: None });
        record.supported_versions.push(VersionEntry::new("twelve"));
        assert!(supports_version(&record, "twelve").is_err());
    }

    #[test]
    fn test_record_listed_once_even_with_duplicate_versions() {
        let records = vec![device("davinci", &["twelve", "twelve", "eleven"])];
        assert_eq!(matching_codenames(&records, "twelve").unwrap(), vec!["davinci"]);
    }

    #[test]
    fn test_matching_codenames_keeps_input_order() {
        let records = vec![
            device("whyred", &["twelve"]),
            device("ginkgo", &["eleven"]),
            device("lavender", &["eleven", "twelve"]),
            device("whyred", &["twelve"]),
        ];
        assert_eq!(
            matching_codenames(&records, "twelve").unwrap(),
            vec!["whyred", "lavender", "whyred"]
        );
    }

    #[test]
    fn test_codename_only_required_on_match() {
        let mut nameless = device("", &["eleven"]);
        nameless.codename = None;
        let records = vec![device("lavender", &["twelve"]), nameless.clone()];
        assert_eq!(matching_codenames(&records, "twelve").unwrap(), vec!["lavender"]);

        let records = vec![device("lavender", &["twelve"]), nameless.with_versions(["twelve"])];
        assert!(matching_codenames(&records, "twelve").is_err());
    }

    #[test]
    fn test_write_matches_one_per_line() {
        let codenames = vec!["beryllium".to_string(), "raphael".to_string()];
        let mut out = Vec::new();

        let written = write_matches(&mut out, &codenames).unwrap();

        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "beryllium\nraphael\n");
    }

    #[test]
    fn test_write_matches_writes_nothing_without_matches() {
        let mut out = Vec::new();
        assert_eq!(write_matches(&mut out, &[]).unwrap(), 0);
        assert!(out.is_empty());
    }
}
