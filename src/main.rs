// sortty: Step-by-Step Sorting Algorithm Visualizer for the Terminal

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use sortty::engine::{input, Algorithm};
use sortty::playback::Playback;
use sortty::ui::App;

/// Values shown when no explicit input is given
const DEMO_VALUES: [i64; 16] = [33, 10, 59, 27, 81, 5, 47, 91, 18, 73, 2, 64, 38, 86, 22, 51];

const DEFAULT_RANDOM_SEED: u32 = 42;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <algorithm> [values...]", program_name);
    eprintln!("       {} <algorithm> --random <count> [seed]", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        eprintln!("  {:<10} {}", info.name, info.display_name);
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} bubble 5 3 8 1          # Explicit values", program_name);
    eprintln!("  {} merge 5,3,8,1           # Comma-separated works too", program_name);
    eprintln!("  {} quick --random 40       # 40 reproducible random values", program_name);
    eprintln!("  {} heap                    # Built-in demo values", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("sortty");

    if args.len() < 2 {
        eprintln!("Error: No algorithm provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let algorithm = match Algorithm::from_name(&args[1]) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    // Collect input values
    let rest = &args[2..];
    let values = if rest.first().map(|s| s.as_str()) == Some("--random") {
        let count = match rest.get(1).and_then(|s| s.parse::<usize>().ok()) {
            Some(count) if count > 0 => count,
            _ => {
                eprintln!("Error: --random needs a positive count");
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        };
        let seed = match rest.get(2) {
            Some(token) => match token.parse::<u32>() {
                Ok(seed) => seed,
                Err(_) => {
                    eprintln!("Error: Invalid seed '{}'", token);
                    std::process::exit(1);
                }
            },
            None => DEFAULT_RANDOM_SEED,
        };
        input::random_values(count, seed)
    } else if rest.is_empty() {
        DEMO_VALUES.to_vec()
    } else {
        match input::parse_values(rest) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    // Generate the full step history up front
    let info = algorithm.info();
    eprintln!(
        "Generating {} history for {} value(s)...",
        info.display_name,
        values.len()
    );
    let steps = algorithm.generate(&values);
    eprintln!("Total steps: {}", steps.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Playback::new(steps), algorithm);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
