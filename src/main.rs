use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use treegen::{
    count_trees, generate_trees_level_order,
    level_order_to_adjacency_matrix, non_isomorphic_rooted_tree_count, utils, LevelSequence,
};

#[derive(Parser)]
#[command(
    name = "treegen",
    version,
    about = "Enumerate all non-isomorphic trees on n vertices"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every tree on n vertices
    List {
        /// Number of vertices
        n: usize,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Level)]
        format: Format,
        /// Stop after this many trees
        #[arg(long)]
        limit: Option<usize>,
        /// Also write all level sequences as a JSON array to this file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the known number of trees on n vertices
    Count {
        /// Number of vertices
        n: usize,
        /// Run the generator and compare against the table (exit 1 on mismatch)
        #[arg(long)]
        check: bool,
    },
    /// Print the centered seed layout for n vertices
    Seed {
        /// Number of vertices
        n: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Depths separated by spaces
    Level,
    /// Adjacency matrix rows, one blank line between trees
    Matrix,
    /// One JSON array per line
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("treegen=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::List {
            n,
            format,
            limit,
            output,
        } => cmd_list(n, format, limit, output),
        Command::Count { n, check } => cmd_count(n, check),
        Command::Seed { n } => cmd_seed(n),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn cmd_list(
    n: usize,
    format: Format,
    limit: Option<usize>,
    output: Option<PathBuf>,
) -> treegen::Result<()> {
    let generator = generate_trees_level_order(n)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut collected: Vec<LevelSequence> = Vec::new();
    let mut listed = 0usize;

    for tree in generator.take(limit.unwrap_or(usize::MAX)) {
        match format {
            Format::Level => writeln!(out, "{}", tree)?,
            Format::Json => writeln!(out, "{}", serde_json::to_string(&tree)?)?,
            Format::Matrix => {
                let matrix = level_order_to_adjacency_matrix(tree.as_slice());
                for row in matrix.rows() {
                    let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
                    writeln!(out, "{}", cells.join(" "))?;
                }
                writeln!(out)?;
            }
        }
        listed += 1;
        if output.is_some() {
            collected.push(tree);
        }
    }
    out.flush()?;

    if let Some(path) = output {
        utils::save_json(&collected, &path)?;
    }
    tracing::info!(n, trees = listed, "listing finished");
    Ok(())
}

fn cmd_count(n: usize, check: bool) -> treegen::Result<()> {
    let expected = non_isomorphic_rooted_tree_count(n)?;
    println!("{}", expected);

    if check {
        let generated = count_trees(n)? as u64;
        if generated != expected {
            tracing::warn!(n, expected, generated, "generator count differs from table");
            eprintln!("mismatch: table has {}, generator produced {}", expected, generated);
            process::exit(1);
        }
        tracing::info!(n, generated, "generator count matches table");
    }
    Ok(())
}

fn cmd_seed(n: usize) -> treegen::Result<()> {
    let seed = LevelSequence::centered(n)?;
    println!("{}", seed);
    Ok(())
}
