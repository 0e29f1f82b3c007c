// algoscope: stepwise algorithm visualizer for the terminal

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoscope::engine::{AlgorithmId, GraphInput, StepperInput};
use algoscope::input;
use algoscope::ui::App;

const DEFAULT_ARRAY_SIZE: usize = 30;
const DEFAULT_VERTEX_COUNT: usize = 8;
const DEFAULT_EDGE_COUNT: usize = 12;

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} <algorithm> [options]", program_name);
    eprintln!();
    eprintln!("Sorting algorithms take an optional array size (default {}):", DEFAULT_ARRAY_SIZE);
    for id in AlgorithmId::all().iter().filter(|id| id.is_sorting()) {
        eprintln!("  {} {} [size]", program_name, id);
    }
    eprintln!();
    eprintln!(
        "Graph algorithms take optional vertex and edge counts (default {} {}):",
        DEFAULT_VERTEX_COUNT, DEFAULT_EDGE_COUNT
    );
    for id in AlgorithmId::all().iter().filter(|id| !id.is_sorting()) {
        eprintln!("  {} {} [vertices] [edges]", program_name, id);
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} bubble-sort 20", program_name);
    eprintln!("  {} dijkstra 10 16", program_name);
    process::exit(1);
}

fn parse_count(arg: &str, what: &str, program_name: &str) -> usize {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: invalid {} '{}'", what, arg);
            eprintln!();
            usage(program_name)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algoscope");

    let Some(token) = args.get(1) else {
        eprintln!("Error: no algorithm given");
        eprintln!();
        usage(program_name)
    };
    let Some(algorithm) = AlgorithmId::parse(token) else {
        eprintln!("Error: unknown algorithm '{}'", token);
        eprintln!();
        usage(program_name)
    };

    let mut rng = rand::thread_rng();
    let stepper_input = if algorithm.is_sorting() {
        let size = args
            .get(2)
            .map(|a| parse_count(a, "array size", program_name))
            .unwrap_or(DEFAULT_ARRAY_SIZE);
        StepperInput::Array(input::random_array(&mut rng, size, 1, 99))
    } else {
        let vertex_count = args
            .get(2)
            .map(|a| parse_count(a, "vertex count", program_name))
            .unwrap_or(DEFAULT_VERTEX_COUNT);
        let edge_count = args
            .get(3)
            .map(|a| parse_count(a, "edge count", program_name))
            .unwrap_or(DEFAULT_EDGE_COUNT);
        let graph = match input::random_graph(&mut rng, vertex_count, edge_count) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        // Path searches aim for the highest-numbered vertex; the MST
        // algorithms ignore the target.
        let end = match algorithm {
            AlgorithmId::Prim | AlgorithmId::Kruskal => None,
            _ => Some(vertex_count - 1),
        };
        StepperInput::Graph(GraphInput {
            graph,
            start: 0,
            end,
        })
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(algorithm, stepper_input);
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
