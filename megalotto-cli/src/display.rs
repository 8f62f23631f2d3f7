use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use textplots::Plot;

use megalotto_core::frequency::FrequencyTable;
use megalotto_core::models::{Combination, HistoryEntry, PICK_COUNT, POOL_SIZE};

/// Les 6 numéros retenus, sur deux chiffres, dans leurs cases fixes.
pub fn display_lucky_numbers(numbers: &Combination) {
    println!("\n── Numéros chanceux ──");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let cells: Vec<Cell> = numbers
        .iter()
        .map(|n| Cell::new(format!("{:02}", n)).fg(Color::Green))
        .collect();
    table.add_row(cells);

    println!("{table}");
}

pub fn display_frequency_table(frequency: &FrequencyTable) {
    println!("\n📊 Table des fréquences (dernier lot)\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Tirages"]);

    // Pas de mise en évidence avant la première régénération.
    let top: Vec<u8> = if frequency.total() == 0 {
        Vec::new()
    } else {
        frequency.top(PICK_COUNT)
    };

    for (number, count) in frequency.entries() {
        let color = if top.contains(&number) {
            Color::Green
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new(format!("{:02}", number)).fg(color),
            Cell::new(count.to_string()).fg(color),
        ]);
    }

    println!("{table}");
}

pub fn display_bar_chart(frequency: &FrequencyTable) {
    println!("\n📊 Fréquence des numéros (Lotto 6/45)\n");

    let points: Vec<(f32, f32)> = frequency
        .entries()
        .iter()
        .map(|&(n, c)| (n as f32, c as f32))
        .collect();

    let y_max = points.iter().map(|&(_, c)| c).fold(0.0f32, f32::max);
    if y_max == 0.0 {
        println!("  (Pas de données à afficher — lancez d'abord une régénération)");
        return;
    }

    // Graphique ASCII simple avec textplots
    let shape = textplots::Shape::Bars(&points);
    let mut chart =
        textplots::Chart::new_with_y_range(180, 60, 0.0, (POOL_SIZE + 1) as f32, 0.0, y_max);
    println!("{}", chart.lineplot(&shape));
}

/// Journal visible : du plus récent au plus ancien.
pub fn display_history(history: &[HistoryEntry]) {
    if history.is_empty() {
        println!("Aucune régénération dans l'historique.");
        return;
    }

    println!("\n── Historique ({} régénérations) ──", history.len());
    for entry in history.iter().rev() {
        println!("  {}", entry.display_line());
    }
}

pub fn display_export_summary(path: &Path, written: u32) {
    println!("Historique exporté vers {:?} ({} lignes)", path, written);
}
