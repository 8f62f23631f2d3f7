use crate::models::{Combination, POOL_SIZE};

/// Table des fréquences sur le domaine fixe 1..=45. Les numéros jamais
/// tirés restent présents avec un compte de zéro.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u32; POOL_SIZE as usize],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; POOL_SIZE as usize],
        }
    }

    pub fn record(&mut self, combination: &Combination) {
        for &n in combination {
            self.counts[(n - 1) as usize] += 1;
        }
    }

    pub fn count(&self, number: u8) -> u32 {
        self.counts[(number - 1) as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Paires (numéro, fréquence) triées par numéro croissant.
    pub fn entries(&self) -> Vec<(u8, u32)> {
        (1..=POOL_SIZE).map(|n| (n, self.count(n))).collect()
    }

    /// Les k numéros les plus fréquents, triés croissants pour l'affichage.
    /// Égalité de fréquence : le numéro le plus petit est retenu d'abord
    /// (sélection stable et reproductible).
    pub fn top(&self, k: usize) -> Vec<u8> {
        let mut ranked = self.entries();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let mut selected: Vec<u8> = ranked.iter().take(k).map(|(n, _)| *n).collect();
        selected.sort();
        selected
    }

    #[cfg(test)]
    pub(crate) fn from_counts(counts: [u32; POOL_SIZE as usize]) -> Self {
        Self { counts }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
