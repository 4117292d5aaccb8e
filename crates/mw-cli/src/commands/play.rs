use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use mw_engine::snapshot::RegistrySnapshot;
use mw_engine::{ConsumePolicy, EngineConfig, Session};

pub fn run(
    sheet_path: &Path,
    seed: u64,
    consume_selected: bool,
    no_move_gate: bool,
    resume: Option<&Path>,
) -> Result<(), String> {
    let sheet = super::load_sheet(sheet_path)?;

    let mut config = EngineConfig::default().with_seed(seed);
    if consume_selected {
        config = config.with_consume_policy(ConsumePolicy::SelectedOnly);
    }
    if no_move_gate {
        config = config.with_move_gate(false);
    }

    let mut session = match resume {
        Some(path) => {
            let registry = RegistrySnapshot::load_from_path(path)
                .map_err(|e| format!("failed to restore state: {e}"))?
                .into_registry();
            Session::from_registry(sheet.name.clone(), registry, config)
        }
        None => Session::new(&sheet, config),
    };

    println!(
        "  {} session for {}",
        "Starting".bold(),
        session.character_name()
    );
    println!("  Seed: {seed}");
    println!("  'help' lists commands; 'quit' leaves the table.\n");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("mw> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            break; // EOF
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        let quitting =
            command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("q");

        match session.process(command) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }

        if quitting {
            break;
        }
    }

    Ok(())
}
