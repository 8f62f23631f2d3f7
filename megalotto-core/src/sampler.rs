use anyhow::{bail, Result};
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::frequency::FrequencyTable;
use crate::models::{Combination, DrawConfig, HistoryEntry, PICK_COUNT};
use crate::universe::Universe;

/// Format d'horodatage affiché et historisé.
pub const TIMESTAMP_FORMAT: &str = "%A, %B %d, %Y - %I:%M:%S %p";

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// État du simulateur : univers, table des fréquences du dernier lot et
/// journal des régénérations. Seul ce composant mute cet état.
pub struct DrawMachine {
    config: DrawConfig,
    universe: Universe,
    frequency: FrequencyTable,
    history: Vec<HistoryEntry>,
}

impl DrawMachine {
    pub fn new(universe: Universe, config: DrawConfig) -> Result<Self> {
        config.validate()?;
        if universe.is_empty() {
            bail!("Univers vide : aucune combinaison à tirer");
        }
        Ok(Self {
            config,
            universe,
            frequency: FrequencyTable::new(),
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Fréquences du lot le plus récent uniquement.
    pub fn frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    /// Journal complet, du plus ancien au plus récent.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    /// Tire `batch_size` combinaisons avec remise, reconstruit la table des
    /// fréquences à partir de ce seul lot, retient les 6 numéros les plus
    /// fréquents (égalité : plus petit numéro d'abord) et journalise le
    /// résultat avec l'heure courante.
    pub fn regenerate(&mut self, rng: &mut StdRng) -> HistoryEntry {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.regenerate_at(rng, timestamp)
    }

    fn regenerate_at(&mut self, rng: &mut StdRng, timestamp: String) -> HistoryEntry {
        let mut frequency = FrequencyTable::new();
        for _ in 0..self.config.batch_size {
            let idx = rng.random_range(0..self.universe.len());
            // L'indice vient de 0..len, la combinaison existe toujours.
            if let Some(combo) = self.universe.get(idx) {
                frequency.record(combo);
            }
        }

        let top = frequency.top(PICK_COUNT);
        let mut numbers: Combination = [0; PICK_COUNT];
        numbers.copy_from_slice(&top);

        self.frequency = frequency;
        let entry = HistoryEntry { timestamp, numbers };
        self.history.push(entry.clone());
        entry
    }
}
