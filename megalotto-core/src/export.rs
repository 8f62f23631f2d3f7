use std::path::Path;

use anyhow::{Context, Result};

use crate::models::HistoryEntry;

/// En-tête du fichier exporté.
pub const EXPORT_HEADER: [&str; 2] = ["Date & Time", "Numbers"];

/// Écrit l'historique complet au format CSV : une ligne d'en-tête puis une
/// ligne par régénération, du plus ancien au plus récent. L'horodatage est
/// conservé en entier (les virgules sont protégées par le format CSV).
/// Retourne le nombre de lignes de données écrites.
pub fn export_history(entries: &[HistoryEntry], path: &Path) -> Result<u32> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Impossible de créer {:?}", path))?;

    writer
        .write_record(EXPORT_HEADER)
        .context("Échec de l'écriture de l'en-tête")?;

    let mut written = 0u32;
    for entry in entries {
        writer
            .write_record([entry.timestamp.as_str(), &entry.numbers_padded()])
            .with_context(|| format!("Échec de l'écriture de la ligne {}", written + 1))?;
        written += 1;
    }

    writer.flush().context("Échec de l'écriture du fichier")?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(timestamp: &str, numbers: [u8; 6]) -> HistoryEntry {
        HistoryEntry {
            timestamp: timestamp.to_string(),
            numbers,
        }
    }

    #[test]
    fn test_export_empty_history_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historique.csv");
        let written = export_history(&[], &path).unwrap();
        assert_eq!(written, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "Date & Time,Numbers");
    }

    #[test]
    fn test_export_roundtrip_oldest_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("historique.csv");
        let entries = vec![
            entry("Monday, January 05, 2026 - 09:15:00 AM", [1, 5, 12, 23, 34, 45]),
            entry("Monday, January 05, 2026 - 09:15:02 AM", [2, 8, 14, 27, 33, 41]),
        ];
        let written = export_history(&entries, &path).unwrap();
        assert_eq!(written, 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["Date & Time", "Numbers"])
        );
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        // L'horodatage complet est conservé, virgules comprises.
        assert_eq!(&rows[0][0], "Monday, January 05, 2026 - 09:15:00 AM");
        assert_eq!(&rows[0][1], "01 05 12 23 34 45");
        assert_eq!(&rows[1][0], "Monday, January 05, 2026 - 09:15:02 AM");
        assert_eq!(&rows[1][1], "02 08 14 27 33 41");
    }

    #[test]
    fn test_export_unwritable_path_is_an_error() {
        let entries = vec![entry("t", [1, 2, 3, 4, 5, 6])];
        let path = Path::new("/repertoire/inexistant/historique.csv");
        assert!(export_history(&entries, path).is_err());
    }
}
