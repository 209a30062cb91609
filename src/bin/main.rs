use std::env;
use std::io;
use std::process;

use stopwatch::Stopwatch;

use floyd_paths::{calc_distances, load_graph, print_matrix, Error, Graph, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // e.g. run like this:
    // cargo run --release -- data/input/4x4.txt
    // without a file name the built-in example graph is used
    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(args.get(1)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(filename: Option<&String>) -> Result<()> {
    let graph = match filename {
        Some(filename) => {
            log::info!("reading graph from file {}", filename);
            load_graph(filename)?
        }
        None => {
            log::info!("no input file given, using the example graph");
            example_graph()
        }
    };
    log::info!("number of nodes ................... {}", graph.get_num_nodes());

    println!("Input graph matrix:");
    print_matrix(&graph).map_err(stdout_error)?;

    let mut time = Stopwatch::new();
    time.start();
    let dist = calc_distances(&graph);
    time.stop();
    log::info!("calculation time .................. {} ms", time.elapsed_ms());

    println!();
    println!("Shortest distances between every pair of vertices:");
    print_matrix(&dist).map_err(stdout_error)?;
    Ok(())
}

fn stdout_error(source: io::Error) -> Error {
    Error::Io {
        path: String::from("<stdout>"),
        source,
    }
}

fn example_graph() -> Graph {
    let mut g = Graph::new(4);
    g.set_edge(0, 1, 3);
    g.set_edge(0, 3, 7);
    g.set_edge(1, 0, 8);
    g.set_edge(1, 2, 2);
    g.set_edge(2, 0, 5);
    g.set_edge(2, 3, 1);
    g.set_edge(3, 0, 2);
    g
}
