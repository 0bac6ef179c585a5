use log::info;
use pulsesim::core::simulation::{count_pulses, detect_first_low};
use pulsesim::{parse_description, NetworkError, SimulationConfig};
use std::env;
use std::fs;

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(format!("usage: {} <description file> [config.json]", args[0]));
    }

    let text = fs::read_to_string(&args[1])
        .map_err(|e| format!("Failed to read '{}': {}", args[1], e))?;
    let config = match args.get(2) {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read '{}': {}", path, e))?;
            SimulationConfig::from_json_str(&json)?
        }
        None => SimulationConfig::default(),
    };

    let declarations = parse_description(&text)?;
    info!("Loaded {} module declarations from {}", declarations.len(), args[1]);

    let counting = count_pulses(declarations.clone(), &config)?;
    println!("{}", to_json(&counting)?);

    match detect_first_low(declarations, &config) {
        Ok(detection) => println!("{}", to_json(&detection)?),
        Err(NetworkError::UnreachableTarget(target)) => {
            info!("No module sends to '{}', skipping detection", target);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}
