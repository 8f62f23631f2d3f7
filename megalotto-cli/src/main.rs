mod display;
mod interactive;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use megalotto_core::models::DrawConfig;
use megalotto_core::sampler::{make_rng, DrawMachine};
use megalotto_core::universe::Universe;

use crate::display::{
    display_bar_chart, display_export_summary, display_frequency_table, display_history,
    display_lucky_numbers,
};

#[derive(Parser)]
#[command(name = "megalotto", about = "Simulateur de tirage Megalotto 6/45")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Effectuer une régénération et afficher les numéros chanceux
    Draw {
        /// Nombre de tirages par régénération
        #[arg(short, long, default_value = "1000")]
        batch: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,

        /// Afficher la table des fréquences
        #[arg(long)]
        freq: bool,

        /// Afficher le graphique en barres
        #[arg(long)]
        chart: bool,

        /// Exporter l'historique vers un fichier CSV
        #[arg(long, value_name = "FICHIER")]
        export: Option<PathBuf>,
    },

    /// Mode interactif (menu, horloge, animation)
    Interactive {
        /// Nombre de tirages par régénération
        #[arg(short, long, default_value = "1000")]
        batch: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Draw {
            batch,
            seed,
            freq,
            chart,
            export,
        } => cmd_draw(batch, seed, freq, chart, export),
        Command::Interactive { batch, seed } => cmd_interactive(batch, seed),
    }
}

fn build_machine(batch: usize) -> Result<DrawMachine> {
    let config = DrawConfig { batch_size: batch };
    config.validate()?;

    println!("Génération de l'univers des combinaisons...");
    let universe = Universe::generate();
    println!("{} combinaisons (6 parmi 45)\n", universe.len());

    DrawMachine::new(universe, config)
}

fn cmd_draw(
    batch: usize,
    seed: Option<u64>,
    freq: bool,
    chart: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let mut machine = build_machine(batch)?;
    let mut rng = make_rng(seed);

    let entry = machine.regenerate(&mut rng);
    display_lucky_numbers(&entry.numbers);
    display_history(machine.history());

    if freq {
        display_frequency_table(machine.frequency());
    }
    if chart {
        display_bar_chart(machine.frequency());
    }
    if let Some(path) = export {
        let written = megalotto_core::export::export_history(machine.history(), &path)?;
        display_export_summary(&path, written);
    }

    Ok(())
}

fn cmd_interactive(batch: usize, seed: Option<u64>) -> Result<()> {
    let machine = build_machine(batch)?;
    let rng = make_rng(seed);
    interactive::run(machine, rng)
}
