use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Taille du pool de numéros (1 à 45).
pub const POOL_SIZE: u8 = 45;

/// Nombre de numéros par combinaison.
pub const PICK_COUNT: usize = 6;

/// C(45,6) : nombre total de combinaisons distinctes.
pub const UNIVERSE_SIZE: usize = 8_145_060;

/// Une combinaison : 6 numéros distincts dans [1,45], triés croissants.
pub type Combination = [u8; PICK_COUNT];

pub fn validate_combination(numbers: &Combination) -> Result<()> {
    for &n in numbers {
        if n < 1 || n > POOL_SIZE {
            bail!("Numéro {} hors limites (1-{})", n, POOL_SIZE);
        }
    }
    for i in 1..numbers.len() {
        if numbers[i] == numbers[i - 1] {
            bail!("Numéro en double : {}", numbers[i]);
        }
        if numbers[i] < numbers[i - 1] {
            bail!("Combinaison non triée : {} avant {}", numbers[i - 1], numbers[i]);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Nombre de tirages indépendants par régénération.
    pub batch_size: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl DrawConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("Taille de lot invalide : doit être au moins 1");
        }
        Ok(())
    }
}

/// Un résultat de régénération : horodatage + les 6 numéros retenus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub numbers: Combination,
}

impl HistoryEntry {
    /// Numéros sur deux chiffres, séparés par des espaces : "01 05 12 23 34 45".
    pub fn numbers_padded(&self) -> String {
        self.numbers
            .iter()
            .map(|n| format!("{:02}", n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ligne d'historique telle qu'affichée : horodatage puis numéros.
    pub fn display_line(&self) -> String {
        format!("{}  {}", self.timestamp, self.numbers_padded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_combination_ok() {
        assert!(validate_combination(&[1, 2, 3, 4, 5, 6]).is_ok());
        assert!(validate_combination(&[40, 41, 42, 43, 44, 45]).is_ok());
        assert!(validate_combination(&[3, 11, 19, 27, 38, 44]).is_ok());
    }

    #[test]
    fn test_validate_combination_out_of_range() {
        assert!(validate_combination(&[0, 2, 3, 4, 5, 6]).is_err());
        assert!(validate_combination(&[1, 2, 3, 4, 5, 46]).is_err());
    }

    #[test]
    fn test_validate_combination_duplicate() {
        assert!(validate_combination(&[1, 1, 3, 4, 5, 6]).is_err());
        assert!(validate_combination(&[1, 2, 3, 4, 44, 44]).is_err());
    }

    #[test]
    fn test_validate_combination_unsorted() {
        assert!(validate_combination(&[2, 1, 3, 4, 5, 6]).is_err());
        assert!(validate_combination(&[1, 2, 3, 4, 45, 6]).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = DrawConfig::default();
        assert_eq!(config.batch_size, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_batch() {
        let config = DrawConfig { batch_size: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DrawConfig { batch_size: 250 };
        let json = serde_json::to_string(&config).unwrap();
        let restored: DrawConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.batch_size, config.batch_size);
    }

    #[test]
    fn test_numbers_padded() {
        let entry = HistoryEntry {
            timestamp: "Monday, January 05, 2026 - 09:15:00 AM".to_string(),
            numbers: [1, 5, 12, 23, 34, 45],
        };
        assert_eq!(entry.numbers_padded(), "01 05 12 23 34 45");
    }

    #[test]
    fn test_display_line() {
        let entry = HistoryEntry {
            timestamp: "Monday, January 05, 2026 - 09:15:00 AM".to_string(),
            numbers: [1, 5, 12, 23, 34, 45],
        };
        assert_eq!(
            entry.display_line(),
            "Monday, January 05, 2026 - 09:15:00 AM  01 05 12 23 34 45"
        );
    }
}
