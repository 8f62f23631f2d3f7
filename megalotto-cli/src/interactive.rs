use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use rand::rngs::StdRng;
use rand::Rng;

use megalotto_core::export::export_history;
use megalotto_core::models::{PICK_COUNT, POOL_SIZE};
use megalotto_core::sampler::{DrawMachine, TIMESTAMP_FORMAT};

use crate::display::{
    display_bar_chart, display_export_summary, display_frequency_table, display_history,
    display_lucky_numbers,
};

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Regenerate,
    Frequencies,
    Chart,
    History,
    Export,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "generer" | "générer" | "gen" => Some(InteractiveCommand::Regenerate),
        "2" | "frequences" | "fréquences" | "freq" => Some(InteractiveCommand::Frequencies),
        "3" | "graphique" | "chart" | "graph" => Some(InteractiveCommand::Chart),
        "4" | "historique" | "history" | "hist" => Some(InteractiveCommand::History),
        "5" | "exporter" | "export" | "exp" => Some(InteractiveCommand::Export),
        "6" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    // L'horloge : rafraîchie à chaque affichage du menu.
    println!();
    println!("🕐 {}", Local::now().format(TIMESTAMP_FORMAT));
    println!();
    println!("── MEGALOTTO 6/45 ──");
    println!("  1. generer     Régénérer les numéros");
    println!("  2. frequences  Table des fréquences");
    println!("  3. graphique   Graphique en barres");
    println!("  4. historique  Tirages générés");
    println!("  5. exporter    Exporter l'historique");
    println!("  6. quitter     Quitter");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}

/// Animation de révélation, purement cosmétique : le résultat est déjà
/// calculé, les cadres proviennent d'un générateur indépendant du tirage.
fn animate_reveal() {
    let mut rng = rand::rng();
    for _ in 0..8 {
        let frame: Vec<String> = (0..PICK_COUNT)
            .map(|_| format!("{:02}", rng.random_range(1..=POOL_SIZE)))
            .collect();
        print!("\r  {}  ", frame.join("  "));
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(60));
    }
    print!("\r{}\r", " ".repeat(30));
    let _ = io::stdout().flush();
}

fn cmd_regenerate(machine: &mut DrawMachine, rng: &mut StdRng) {
    let entry = machine.regenerate(rng);
    animate_reveal();
    display_lucky_numbers(&entry.numbers);
    println!("  {}", entry.display_line());
}

fn cmd_export(machine: &DrawMachine) -> Result<()> {
    let input = prompt("Fichier de destination (vide pour annuler) : ")?;
    if input.is_empty() {
        println!("Export annulé.");
        return Ok(());
    }

    let path = PathBuf::from(input);
    match export_history(machine.history(), &path) {
        Ok(written) => display_export_summary(&path, written),
        Err(e) => eprintln!("Erreur lors de l'export : {:#}", e),
    }
    Ok(())
}

pub fn run(mut machine: DrawMachine, mut rng: StdRng) -> Result<()> {
    loop {
        display_menu();
        let input = prompt("megalotto> ")?;
        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(InteractiveCommand::Regenerate) => cmd_regenerate(&mut machine, &mut rng),
            Some(InteractiveCommand::Frequencies) => display_frequency_table(machine.frequency()),
            Some(InteractiveCommand::Chart) => display_bar_chart(machine.frequency()),
            Some(InteractiveCommand::History) => display_history(machine.history()),
            Some(InteractiveCommand::Export) => cmd_export(&machine)?,
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                return Ok(());
            }
            None => println!("Commande inconnue : '{}'", input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_numbers() {
        assert_eq!(parse_command("1"), Some(InteractiveCommand::Regenerate));
        assert_eq!(parse_command("2"), Some(InteractiveCommand::Frequencies));
        assert_eq!(parse_command("3"), Some(InteractiveCommand::Chart));
        assert_eq!(parse_command("4"), Some(InteractiveCommand::History));
        assert_eq!(parse_command("5"), Some(InteractiveCommand::Export));
        assert_eq!(parse_command("6"), Some(InteractiveCommand::Quit));
    }

    #[test]
    fn test_parse_command_words() {
        assert_eq!(parse_command("generer"), Some(InteractiveCommand::Regenerate));
        assert_eq!(parse_command("  FREQ  "), Some(InteractiveCommand::Frequencies));
        assert_eq!(parse_command("graphique"), Some(InteractiveCommand::Chart));
        assert_eq!(parse_command("hist"), Some(InteractiveCommand::History));
        assert_eq!(parse_command("export"), Some(InteractiveCommand::Export));
        assert_eq!(parse_command("q"), Some(InteractiveCommand::Quit));
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command("zzz"), None);
        assert_eq!(parse_command("7"), None);
    }
}
