use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, io::Read, path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;
use walksat_algorithms::{
    seeded_rng, Deadline, Hyperparameters, Interrupt, NoInterrupt, SolveResult,
};
use walksat_challenges::{GeneratorParams, Instance, Model};
use walksat_utils::{calc_seed, compress_obj, dejsonify, jsonify};

fn cli() -> Command {
    Command::new("walksat")
        .about("Generates, solves or verifies k-CNF instances with Modified WalkSAT")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Verbosity level (-v, -vv, -vvv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Generates a random k-CNF instance in DIMACS form")
                .arg(arg!(<K> "Literals per clause").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<M> "Number of distinct clauses").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<N> "Number of variables").value_parser(clap::value_parser!(usize)))
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value("0")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance is written to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("solve_instance")
                .about("Searches for a satisfying assignment")
                .arg(
                    arg!(<INSTANCE> "Path to a DIMACS file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value("0")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--nonce [NONCE] "Nonce value, selects an independent random stream")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"timeout-ms" [TIMEOUT_MS] "Stops the search after this many milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies an assignment against an instance")
                .arg(
                    arg!(<INSTANCE> "Path to a DIMACS file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Assignment json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OutputData {
    pub seed: String,
    pub nonce: u64,
    pub hyperparameters: Hyperparameters,
    pub result: SolveResult,
}

fn main() {
    let matches = cli().get_matches();

    let filter = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = match matches.subcommand() {
        Some(("generate_instance", sub_m)) => generate_instance(sub_m),
        Some(("solve_instance", sub_m)) => solve_instance(sub_m),
        Some(("verify_solution", sub_m)) => verify_solution(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn required<'a, T>(sub_m: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    sub_m
        .get_one::<T>(id)
        .ok_or_else(|| anyhow!("Missing argument '{}'", id))
}

pub fn generate_instance(sub_m: &ArgMatches) -> Result<()> {
    let params = GeneratorParams {
        clause_size: *required::<usize>(sub_m, "K")?,
        num_clauses: *required::<usize>(sub_m, "M")?,
        num_variables: *required::<usize>(sub_m, "N")?,
    };
    let seed = required::<String>(sub_m, "seed")?;

    let instance = Instance::generate_instance(&calc_seed(seed, 0), &params)?;
    tracing::info!("generated instance from {:?} with seed '{}'", params, seed);
    match sub_m.get_one::<PathBuf>("output") {
        Some(path) => {
            fs::write(path, instance.to_string())?;
            println!("instance written to: {:?}", path);
        }
        None => print!("{}", instance),
    }
    Ok(())
}

pub fn solve_instance(sub_m: &ArgMatches) -> Result<()> {
    let instance = load_instance(required::<String>(sub_m, "INSTANCE")?)?;
    let seed = required::<String>(sub_m, "seed")?.clone();
    let nonce = *required::<u64>(sub_m, "nonce")?;
    let hyperparameters = load_hyperparameters(sub_m.get_one::<String>("hyperparameters"))?;
    tracing::info!(
        "loaded instance with {} variables and {} clauses (seed={}, nonce={})",
        instance.num_variables(),
        instance.num_clauses(),
        seed,
        nonce
    );

    let timeout_ms = sub_m.get_one::<u64>("timeout-ms").copied();
    let output_data = run_solver(&instance, seed, nonce, &hyperparameters, timeout_ms)?;

    if let Some(path) = sub_m.get_one::<PathBuf>("output") {
        if sub_m.get_flag("compress") {
            fs::write(path, compress_obj(&output_data)?)?;
        } else {
            fs::write(path, jsonify(&output_data)?)?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data)?);
    }
    if !output_data.result.is_satisfied() {
        eprintln!(
            "No solution found ({:?} after {} steps)",
            output_data.result.status, output_data.result.steps
        );
    }
    Ok(())
}

fn run_solver(
    instance: &Instance,
    seed: String,
    nonce: u64,
    hyperparameters: &Option<Map<String, Value>>,
    timeout_ms: Option<u64>,
) -> Result<OutputData> {
    let hyperparameters = Hyperparameters::from_map(hyperparameters)?;
    let deadline = timeout_ms.map(|ms| Deadline::after(Duration::from_millis(ms)));
    let interrupt: &dyn Interrupt = match &deadline {
        Some(deadline) => deadline,
        None => &NoInterrupt,
    };

    let mut rng = seeded_rng(&calc_seed(&seed, nonce));
    let result =
        walksat_algorithms::solve_instance(instance, &hyperparameters, &mut rng, interrupt)?;
    Ok(OutputData {
        seed,
        nonce,
        hyperparameters,
        result,
    })
}

pub fn verify_solution(sub_m: &ArgMatches) -> Result<()> {
    let instance_path = required::<String>(sub_m, "INSTANCE")?;
    let solution_path = required::<String>(sub_m, "SOLUTION")?;
    if instance_path == "-" && solution_path == "-" {
        return Err(anyhow!("Only one of INSTANCE and SOLUTION can be read from stdin"));
    }
    let instance = load_instance(instance_path)?;
    let solution = load_solution(solution_path)?;

    instance.verify_solution(&solution)?;
    println!("Solution is valid");
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| anyhow!("Failed to read file {}: {}", path, e))
    }
}

fn load_instance(path: &str) -> Result<Instance> {
    Ok(read_input(path)?.parse::<Instance>()?)
}

fn load_solution(solution: &str) -> Result<Model> {
    let solution = if solution == "-" || solution.ends_with(".json") {
        read_input(solution)?
    } else {
        solution.to_string()
    };
    dejsonify::<Model>(&solution).map_err(|e| anyhow!("Failed to parse solution: {}", e))
}

fn load_hyperparameters(hyperparameters: Option<&String>) -> Result<Option<Map<String, Value>>> {
    let Some(hyperparameters) = hyperparameters else {
        return Ok(None);
    };
    let hyperparameters = if hyperparameters.ends_with(".json") {
        read_input(hyperparameters)?
    } else {
        hyperparameters.clone()
    };
    dejsonify::<Map<String, Value>>(&hyperparameters)
        .map(Some)
        .map_err(|e| anyhow!("Failed to parse hyperparameters: {}", e))
}
