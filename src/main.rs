use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use trainer_ai::{
    AiConfig, AiResult, BattleContext, BattleFixture, SeededRandom, StandardDamageCalculator,
    TrainerAi,
};

fn run(battle_path: &str, config: &AiConfig) -> AiResult<String> {
    let mut fixture = BattleFixture::load(battle_path)?;
    let mut rng = SeededRandom::from_seed_option(config.seed);
    let damage = StandardDamageCalculator;

    let mut actions = Vec::new();
    let mut ctx = BattleContext::new(&fixture.snapshot, &mut fixture.decisions, &mut rng, &damage);
    let action = TrainerAi::new().decide_and_emit(fixture.battler, &mut ctx, &mut actions)?;
    info!(battler = %fixture.battler, ?action, "decision made");

    let output = serde_json::json!({
        "battler": fixture.battler,
        "action": action,
        "decisions": fixture.decisions,
    });
    Ok(serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string()))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(battle_path) = args.get(1) else {
        eprintln!("usage: trainer-ai <battle.ron> [config.ron]");
        return ExitCode::FAILURE;
    };

    let config = match args.get(2) {
        Some(path) => match AiConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AiConfig::default(),
    };

    let directive = config
        .log_filter
        .parse()
        .unwrap_or_else(|_| tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    match run(battle_path, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
