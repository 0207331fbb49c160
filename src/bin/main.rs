use std::{error::Error, fs, path::PathBuf};

use clap::Parser;
use euler_flux::{config::RiemannProblemCfg, Conserved, FaceProblem, RiemannSolver, State};

#[derive(Parser)]
pub struct Cli {
    /// The path to the config file to read
    #[clap(parse(from_os_str))]
    pub config: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // parse command line parameters
    let args = Cli::parse();

    // read configuration
    let config = RiemannProblemCfg::load_str(&fs::read_to_string(args.config)?)?;
    let eos = config.eos;
    println!("Equation of state:\n{}\n", eos);
    println!("Left state:\n{}\n", config.left);
    println!("Right state:\n{}\n", config.right);

    // solve
    let face = FaceProblem::new(
        eos,
        State::<Conserved>::from_primitives(&config.left, &eos),
        eos,
        State::<Conserved>::from_primitives(&config.right, &eos),
        config.n_unit,
    );
    let result = config.solver.solve_face(&face)?;

    println!(
        "{} flux across n = {}:\n{}",
        config.solver.label(),
        config.n_unit,
        result.fluxes
    );
    println!("max wave speed = {:.5e}", result.v_max);
    Ok(())
}
