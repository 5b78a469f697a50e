//! Command-line loader: prints the shape of a Matrix Market file

use std::io::{self, BufWriter, Write};
use std::process::exit;

use log::LevelFilter;
use rsmtxmkt::{load_matrix_market, LoadError, MatrixMarketData};

fn print_usage(program: &str) {
    eprintln!("Usage: {} <matrix-market-file> [--print]", program);
    eprintln!();
    eprintln!("Prints `rows cols nnz` of the loaded matrix.");
    eprintln!("  --print    also write the matrix to stdout in Matrix Market form");
}

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("RSMTXMKT_LOG", "error,rsmtxmkt=info"))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(|s| s.as_str()).unwrap_or("rsmtxmkt");

    let (path, print) = match args.get(1..).unwrap_or_default() {
        [path] => (path, false),
        [path, flag] if flag == "--print" => (path, true),
        _ => {
            print_usage(program);
            exit(1);
        }
    };

    let matrix = match load_matrix_market(path) {
        Ok(matrix) => matrix,
        Err(LoadError::Io { path, source }) => {
            eprintln!("Could not open file {}: {}", path.display(), source);
            exit(1);
        }
        Err(err) => {
            eprintln!("Failed to load matrix: {}", err);
            exit(1);
        }
    };

    if let Err(err) = report(&matrix, print) {
        eprintln!("Failed to write output: {}", err);
        exit(1);
    }
}

fn report(matrix: &MatrixMarketData, print: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());

    writeln!(handle, "{} {} {}", matrix.n_rows(), matrix.n_cols(), matrix.nnz())?;
    if print {
        matrix.write_to(&mut handle)?;
    }
    handle.flush()
}
