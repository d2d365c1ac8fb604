//! Nodal - admittance matrix assembler
//!
//! Builds the MNA admittance matrix of a linear RLC network described on
//! the command line and prints it.
//!
//! # Usage
//!
//! ```bash
//! nodal -c R1=r:1k:n1:n2 -c R2=r:2k:n2:n3 --ac V1=1:n1:n3:60
//! RUST_LOG=debug nodal -c L1=l:10m:a:b --short-conductance 1e9
//! ```

use clap::Parser;
use nodal_core::{
    circuit::{validate_network, NetworkBuilder},
    elements::{AcSourceSpec, ComponentSpec, DcSourceSpec},
    error::Result,
    solver::{AssemblyConfig, EvaluationContext, MatrixAssembler, OffDiagonalStamp},
};

/// Linear network admittance matrix assembler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Component as LABEL=KIND:VALUE:NODE:NODE (kind: r, c, l)
    #[arg(short, long = "component", value_name = "SPEC", required = true)]
    components: Vec<ComponentSpec>,

    /// AC source as LABEL=VOLTAGE:GROUND:NODE:FREQUENCY
    #[arg(long = "ac", value_name = "SPEC")]
    ac_sources: Vec<AcSourceSpec>,

    /// DC source as LABEL=VOLTAGE:POSITIVE:NEGATIVE (recorded, not stamped)
    #[arg(long = "dc", value_name = "SPEC")]
    dc_sources: Vec<DcSourceSpec>,

    /// Evaluate at this frequency instead of the first AC source's
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Stamp off-diagonals symmetrically with accumulation
    #[arg(long)]
    canonical: bool,

    /// Conductance substituted for zero-impedance components
    #[arg(long, value_name = "SIEMENS")]
    short_conductance: Option<f64>,

    /// Validate the network before assembly
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Build the network
    let mut builder = NetworkBuilder::new();
    for spec in &args.components {
        spec.apply(&mut builder);
    }
    for spec in &args.ac_sources {
        spec.apply(&mut builder);
    }
    for spec in &args.dc_sources {
        spec.apply(&mut builder);
    }
    let network = builder.build();

    if args.validate {
        validate_network(&network)?;
    }

    // Configure assembly
    let mut config = AssemblyConfig::new();
    if args.canonical {
        config = config.with_off_diagonal(OffDiagonalStamp::Canonical);
    }
    if let Some(g) = args.short_conductance {
        config = config.with_short_conductance(g);
    }
    let assembler = MatrixAssembler::with_config(config);

    let ctx = args
        .frequency
        .map_or_else(|| EvaluationContext::from_network(&network), EvaluationContext::ac);
    let system = assembler.assemble_at(&network, ctx)?;

    if ctx.is_dc() {
        println!("frequency: DC");
    } else {
        println!("frequency: {} Hz", system.frequency);
    }
    for (i, node) in system.nodes.iter().enumerate() {
        println!("{:>4}  {}", i, node);
    }
    println!("{:>4}  (source constraint)", system.matrix.augmentation_index());
    print!("{}", system.matrix);

    Ok(())
}
