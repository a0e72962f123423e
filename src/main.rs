use std::process::ExitCode;

use clap::Parser;
use eulergraph::classify;
use eulergraph::parse::{parse_edges, ParseEdgeError};
use tracing::level_filters::LevelFilter;

/// Exit status for edges that can not be parsed.
const INVALID_INPUT: u8 = 2;

/// Graphs classified when no edges are given on the command line.
const DEMO_GRAPHS: [(&str, &[(u32, u32)]); 6] = [
    ("Graph 1", &[(1, 2), (2, 3), (3, 4), (4, 1), (1, 3), (2, 4)]),
    ("Graph 2", &[(1, 2), (2, 3), (3, 4), (4, 1), (1, 5), (4, 6)]),
    ("Graph 3", &[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4), (1, 4)]),
    ("Graph 4", &[(1, 2), (2, 3)]),
    (
        "Graph 5",
        &[
            (1, 2), (1, 4), (2, 3), (2, 6), (2, 5), (3, 6), (4, 5),
            (4, 7), (4, 8), (5, 6), (5, 8), (6, 9), (7, 8), (8, 9),
        ],
    ),
    ("Graph 6 (disconnected)", &[(1, 2), (3, 4)]),
];

#[derive(Debug, Parser)]
#[command(name = "eulergraph")]
#[command(version)]
#[command(about = "Classifies undirected graphs as Eulerian, semi-Eulerian or neither")]
struct Cli {
    /// Edges of the graph written as `u-v`. Without edges a set of sample graphs is classified.
    edges: Vec<String>,

    /// Log debug information to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Produces the output lines for the given edge arguments.
fn run(edges: &[String]) -> Result<Vec<String>, ParseEdgeError> {
    if edges.is_empty() {
        return Ok(DEMO_GRAPHS
            .iter()
            .map(|(name, edges)| format!("{name}: {}", classify(edges.iter().copied())))
            .collect());
    }

    let edges = parse_edges(edges)?;
    Ok(vec![classify(edges).to_string()])
}

fn exit_status<T>(result: &Result<T, ParseEdgeError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => INVALID_INPUT,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let max_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    let result = run(&cli.edges);
    match &result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            tracing::debug!(?err, "invalid edge list");
            eprintln!("error: {err}");
        }
    }

    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(edges: &[&str]) -> Vec<String> {
        edges.iter().map(|edge| edge.to_string()).collect()
    }

    #[test]
    fn demo_graphs_without_arguments() {
        let result = run(&[]);
        assert_eq!(exit_status(&result), 0);
        assert_eq!(
            result.unwrap(),
            [
                "Graph 1: Not Eulerian or Semi-Eulerian graph",
                "Graph 2: Not Eulerian or Semi-Eulerian graph",
                "Graph 3: Semi-Eulerian graph",
                "Graph 4: Semi-Eulerian graph",
                "Graph 5: Eulerian graph",
                "Graph 6 (disconnected): Not Eulerian or Semi-Eulerian graph (disconnected)",
            ]
        );
    }

    #[test]
    fn classifies_edge_arguments() {
        let result = run(&args(&["a-b", "b-c", "c-a"]));
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap(), ["Eulerian graph"]);

        assert_eq!(
            run(&args(&["a-b", "c-d"])).unwrap(),
            ["Not Eulerian or Semi-Eulerian graph (disconnected)"]
        );
    }

    #[test]
    fn malformed_edge_exits_with_status_two() {
        let result = run(&args(&["a-b", "x"]));
        assert_eq!(result, Err(ParseEdgeError::MissingSeparator("x".into())));
        assert_eq!(exit_status(&result), 2);
        assert_eq!(
            result.unwrap_err().to_string(),
            "edge `x` is missing the `-` separator"
        );
    }

    #[test]
    fn command_line_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["eulergraph", "-v", "1-2", "2-3"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.edges, ["1-2", "2-3"]);
    }
}
