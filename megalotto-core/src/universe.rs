use crate::models::{Combination, PICK_COUNT, POOL_SIZE, UNIVERSE_SIZE};

/// L'univers : toutes les combinaisons de 6 numéros parmi 45, en ordre
/// lexicographique. Généré une seule fois, jamais modifié ensuite.
pub struct Universe {
    combinations: Vec<Combination>,
}

impl Universe {
    pub fn generate() -> Self {
        let mut combinations = Vec::with_capacity(UNIVERSE_SIZE);
        let mut current: Combination = [0; PICK_COUNT];
        fill(&mut combinations, &mut current, 0, 1);
        Self { combinations }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Combination> {
        self.combinations.get(index)
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    #[cfg(test)]
    pub(crate) fn from_combinations(combinations: Vec<Combination>) -> Self {
        Self { combinations }
    }
}

fn fill(out: &mut Vec<Combination>, current: &mut Combination, depth: usize, start: u8) {
    if depth == PICK_COUNT {
        out.push(*current);
        return;
    }
    // Il doit rester assez de numéros pour compléter la combinaison.
    let remaining = (PICK_COUNT - depth - 1) as u8;
    for n in start..=(POOL_SIZE - remaining) {
        current[depth] = n;
        fill(out, current, depth + 1, n + 1);
    }
}
