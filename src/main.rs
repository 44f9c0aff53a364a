use clap::{CommandFactory, Parser};
use tarot_spread::config::{CliConfig, Mode, SpreadFile};
use tarot_spread::core::catalog;
use tarot_spread::domain::ports::SpreadSource;
use tarot_spread::utils::{logger, validation::Validate};
use tarot_spread::{CardRequest, DirAssetStore, Result, SpreadEngine, SpreadError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose)?;

    tracing::info!("Starting tarot-spread");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let store = DirAssetStore::new(&config.cards_dir);

    match run(&config, &store) {
        Ok(()) => Ok(()),
        Err(SpreadError::EmptyInput) => {
            print_usage()?;
            std::process::exit(SpreadError::EmptyInput.exit_code());
        }
        Err(e) => {
            tracing::error!("Run failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig, store: &DirAssetStore) -> Result<()> {
    match config.mode() {
        Mode::List => {
            tracing::debug!("Listing cards in {}", store.base_path().display());
            if config.json {
                println!("{}", catalog::list_cards_json(store)?);
            } else {
                for name in catalog::list_cards(store)? {
                    println!("{}", name);
                }
            }
            Ok(())
        }
        Mode::ConfigFile(path) => {
            tracing::info!("Loading spread from {}", path);
            let file = SpreadFile::from_file(&path)?;
            file.validate()?;
            draw(config, Some(&file), file.cards(), store)
        }
        Mode::Inline => draw(config, None, config.cards(), store),
        Mode::Usage => Err(SpreadError::EmptyInput),
    }
}

fn draw(
    config: &CliConfig,
    file: Option<&SpreadFile>,
    cards: Vec<CardRequest>,
    store: &DirAssetStore,
) -> Result<()> {
    let output = config.resolve_output(file);
    let engine = SpreadEngine::new(store).with_spacing(config.resolve_spacing(file));

    let saved = engine.run(&cards, &output)?;
    tracing::info!("Spread of {} cards saved", cards.len());
    println!("Tarot spread saved to {}", saved.display());
    Ok(())
}

fn print_usage() -> std::io::Result<()> {
    println!("Usage:");
    println!("  tarot-spread -c strength,!hermit,5_of_swords -o spread.png");
    println!("  tarot-spread --yaml spread.yaml");
    println!("  tarot-spread --list");
    println!();
    CliConfig::command().print_help()
}
