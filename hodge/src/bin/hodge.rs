use std::time::Instant;

use clap::{Parser, Subcommand};
use hodge::{
    binomial, eigenspace_decomposition, euler_characteristic, forms_dimension, hodge_number,
    jacobian_ring_dimension, middle_betti, moduli_dimension, period_domain_dim2,
    unitary_domain_dim2, Hypersurface, InvariantTable, TableConfig,
};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "Hodge CLI - Hodge numbers, Betti numbers and Euler characteristics of smooth projective hypersurfaces"
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Binomial coefficient C(n, k)
    Binomial { n: i64, k: i64 },
    /// Dimension of the space of degree-D forms in N+1 variables
    Forms { degree: i64, n: i64 },
    /// Number of moduli of degree-D hypersurfaces of dimension N
    Moduli { degree: i64, dimension: i64 },
    /// Degree-R piece of the Jacobian ring of a degree-D form in N+1 variables
    Jacobian { degree: i64, n: i64, r: i64 },
    /// Primitive Hodge number h^{P,Q} of a degree-D hypersurface
    Hodge {
        p: i64,
        q: i64,
        degree: i64,

        /// Eigenspace index of the cyclic automorphism (1..D-1)
        #[arg(long)]
        eigenspace: Option<i64>,
    },
    /// Eigenspace pieces of h^{P,Q}
    Eigenspaces { p: i64, q: i64, degree: i64 },
    /// Middle Betti number
    Betti { degree: i64, dimension: i64 },
    /// Euler characteristic
    Euler { degree: i64, dimension: i64 },
    /// Full Hodge diamond
    Diamond { degree: i64, dimension: i64 },
    /// Dimension of the weight-two period domain with Hodge numbers (A, B, C)
    PeriodDomain { a: i64, b: i64, c: i64 },
    /// Dimension of U(P,Q) / U(P) x U(Q)
    UnitaryDomain { p: i64, q: i64 },
    /// Table of invariants over ranges of degrees and dimensions
    Table {
        /// Degree range (format: start:end)
        #[arg(long, default_value = "3:6")]
        degrees: String,

        /// Dimension range (format: start:end)
        #[arg(long, default_value = "1:3")]
        dimensions: String,

        /// Evaluate on the current thread only
        #[arg(long)]
        sequential: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    match &cli.command {
        Commands::Binomial { n, k } => print_value(cli.json, "binomial", binomial(*n, *k)?),
        Commands::Forms { degree, n } => {
            print_value(cli.json, "forms_dimension", forms_dimension(*degree, *n)?)
        }
        Commands::Moduli { degree, dimension } => print_value(
            cli.json,
            "moduli_dimension",
            moduli_dimension(*degree, *dimension)?,
        ),
        Commands::Jacobian { degree, n, r } => print_value(
            cli.json,
            "jacobian_ring_dimension",
            jacobian_ring_dimension(*degree, *n, *r)?,
        ),
        Commands::Hodge {
            p,
            q,
            degree,
            eigenspace,
        } => print_value(
            cli.json,
            "hodge_number",
            hodge_number(*p, *q, *degree, *eigenspace)?,
        ),
        Commands::Eigenspaces { p, q, degree } => {
            handle_eigenspaces(cli.json, *p, *q, *degree)?;
        }
        Commands::Betti { degree, dimension } => {
            print_value(cli.json, "middle_betti", middle_betti(*degree, *dimension)?)
        }
        Commands::Euler { degree, dimension } => print_value(
            cli.json,
            "euler_characteristic",
            euler_characteristic(*degree, *dimension)?,
        ),
        Commands::Diamond { degree, dimension } => {
            handle_diamond(cli.json, *degree, *dimension)?;
        }
        Commands::PeriodDomain { a, b, c } => print_value(
            cli.json,
            "period_domain_dim2",
            period_domain_dim2(*a, *b, *c)?,
        ),
        Commands::UnitaryDomain { p, q } => print_value(
            cli.json,
            "unitary_domain_dim2",
            unitary_domain_dim2(*p, *q)?,
        ),
        Commands::Table {
            degrees,
            dimensions,
            sequential,
        } => {
            handle_table(cli.json, degrees, dimensions, *sequential)?;
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "command completed");
    Ok(())
}

fn print_value(json: bool, invariant: &str, value: i64) {
    if json {
        println!("{}", json!({ "invariant": invariant, "value": value }));
    } else {
        println!("{value}");
    }
}

fn handle_eigenspaces(
    json: bool,
    p: i64,
    q: i64,
    degree: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let pieces = eigenspace_decomposition(p, q, degree)?;
    let total: i64 = pieces.iter().sum();

    if json {
        println!("{}", json!({ "eigenspaces": pieces, "total": total }));
    } else {
        for (i, piece) in pieces.iter().enumerate() {
            println!("  eigenspace {}: {piece}", i + 1);
        }
        println!("  total: {total}");
    }
    Ok(())
}

fn handle_diamond(
    json: bool,
    degree: i64,
    dimension: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let hypersurface = Hypersurface::new(degree, dimension)?;
    let diamond = hypersurface.hodge_diamond()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&diamond)?);
    } else {
        println!("Hodge diamond of a {hypersurface}:");
        print!("{diamond}");
        println!("Euler characteristic: {}", diamond.euler_characteristic());
    }
    Ok(())
}

fn handle_table(
    json: bool,
    degrees: &str,
    dimensions: &str,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = TableConfig::from_ranges(degrees, dimensions)?.with_parallel(!sequential);
    let table = InvariantTable::compute(&config);

    if json {
        println!("{}", table.to_json()?);
    } else {
        print!("{table}");
    }
    Ok(())
}
