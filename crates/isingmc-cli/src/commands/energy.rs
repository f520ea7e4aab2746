use crate::cli::EnergyArgs;
use crate::error::{CliError, Result};
use isingmc::core::encoding::decode;
use isingmc::core::energy::scoring::Scorer;
use isingmc::core::energy::term::EnergyTerm;
use isingmc::core::io::{graph::GraphFile, traits::TextFile};
use isingmc::engine::error::EngineError;
use tracing::info;

pub async fn run(args: EnergyArgs) -> Result<()> {
    let term = evaluate(&args)?;

    println!("Energy: {}", term.total());
    println!("  node terms: {}", term.node);
    println!("  edge terms: {}", term.edge);
    Ok(())
}

fn evaluate(args: &EnergyArgs) -> Result<EnergyTerm> {
    info!("Loading graph from {:?}", &args.input);
    let document = GraphFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let configuration = decode(args.state.trim())
        .map_err(|e| CliError::Argument(format!("invalid --state: {}", e)))?;

    Scorer::new(&document.model)
        .score(&configuration)
        .map_err(|e| CliError::Core(EngineError::from(e)))
}
