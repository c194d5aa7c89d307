use deckforge_core::{
    DeckAssembler, DeckConfig, DeckError, EmptyPoolPolicy, Event, EventBus, GeneratedDeck,
    RngState, SamplingStrategy, DEFAULT_MAX_DRAWS, MAX_COLORS,
};
use deckforge_data::{load_catalog, reduce_file, DEFAULT_CATALOG_FILE};
use serde::Serialize;
use std::path::{Path, PathBuf};

const CATALOG_ENV: &str = "DECKFORGE_CATALOG";

const USAGE: &str = "\
usage:
  deckforge [generate] [--colors N] [--catalog PATH] [--seed N] [--format NAME]
            [--strategy pool|rejection] [--max-draws N] [--empty-pool even|error]
            [--json] [--verbose]
  deckforge reduce <INPUT> <OUTPUT>
  deckforge help";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Generate(GenerateOptions),
    Reduce { input: PathBuf, output: PathBuf },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
struct GenerateOptions {
    catalog: PathBuf,
    seed: Option<u64>,
    config: DeckConfig,
    json: bool,
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct DeckReport<'a> {
    catalog: String,
    deck: &'a GeneratedDeck,
    lines: Vec<String>,
}

fn parse_cli_options(args: &[String], env_catalog: Option<&str>) -> Result<Command, String> {
    let mut rest = args;
    match args.first().map(String::as_str) {
        Some("reduce") => {
            let [_, input, output] = args else {
                return Err("reduce takes <INPUT> <OUTPUT>".to_string());
            };
            return Ok(Command::Reduce {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            });
        }
        Some("help" | "--help" | "-h") => return Ok(Command::Help),
        Some("generate") => rest = &args[1..],
        _ => {}
    }

    let mut options = GenerateOptions {
        catalog: PathBuf::from(env_catalog.unwrap_or(DEFAULT_CATALOG_FILE)),
        seed: None,
        config: DeckConfig::default(),
        json: false,
        verbose: false,
    };
    let mut strategy = "pool".to_string();
    let mut max_draws = DEFAULT_MAX_DRAWS;
    let mut idx = 0usize;
    while idx < rest.len() {
        let arg = rest[idx].as_str();
        match arg {
            "--json" => options.json = true,
            "--verbose" | "-v" => options.verbose = true,
            "--colors" | "-c" | "--catalog" | "--seed" | "--format" | "--strategy"
            | "--max-draws" | "--empty-pool" => {
                let value = rest
                    .get(idx + 1)
                    .ok_or_else(|| format!("{arg} needs a value"))?;
                idx += 1;
                match arg {
                    "--colors" | "-c" => options.config.num_colors = parse_color_count(value)?,
                    "--catalog" => options.catalog = PathBuf::from(value),
                    "--seed" => {
                        options.seed = Some(
                            value
                                .parse::<u64>()
                                .map_err(|_| format!("invalid seed: {value}"))?,
                        )
                    }
                    "--format" => options.config.format = value.clone(),
                    "--strategy" => strategy = value.clone(),
                    "--max-draws" => {
                        max_draws = value
                            .parse::<usize>()
                            .map_err(|_| format!("invalid draw budget: {value}"))?
                    }
                    _ => {
                        options.config.empty_pool = match value.as_str() {
                            "even" => EmptyPoolPolicy::EvenSplit,
                            "error" => EmptyPoolPolicy::Error,
                            other => return Err(format!("unknown empty-pool policy: {other}")),
                        }
                    }
                }
            }
            value if !value.starts_with('-') => {
                options.config.num_colors = parse_color_count(value)?;
            }
            other => return Err(format!("unknown option: {other}")),
        }
        idx += 1;
    }
    options.config.sampling = match strategy.as_str() {
        "pool" => SamplingStrategy::Pool,
        "rejection" => SamplingStrategy::Rejection { max_draws },
        other => return Err(format!("unknown strategy: {other}")),
    };
    Ok(Command::Generate(options))
}

fn parse_color_count(value: &str) -> Result<usize, String> {
    let count = value
        .parse::<usize>()
        .map_err(|_| format!("invalid color count: {value}"))?;
    if count > MAX_COLORS {
        return Err(DeckError::InvalidColorCount(count).to_string());
    }
    Ok(count)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_catalog = std::env::var(CATALOG_ENV).ok();
    let command = match parse_cli_options(&args, env_catalog.as_deref()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    let result = match command {
        Command::Generate(options) => run_generate(&options),
        Command::Reduce { input, output } => run_reduce(&input, &output),
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_generate(options: &GenerateOptions) -> Result<(), String> {
    let catalog = load_catalog(&options.catalog).map_err(|err| format!("{err:#}"))?;
    if options.verbose {
        eprintln!(
            "catalog: {} cards from {}",
            catalog.len(),
            options.catalog.display()
        );
    }
    let mut rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let mut events = EventBus::default();
    let assembler = DeckAssembler::new(&catalog, options.config.clone());
    let outcome = assembler.generate(&mut rng, &mut events);
    if options.verbose {
        for event in events.drain() {
            eprintln!("{}", describe_event(&event));
        }
    }
    let deck = outcome.map_err(|err| err.to_string())?;

    if options.json {
        let report = DeckReport {
            catalog: options.catalog.display().to_string(),
            deck: &deck,
            lines: deck.lines(),
        };
        let text = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{text}");
    } else {
        println!("{}", deck.render());
    }
    Ok(())
}

fn run_reduce(input: &Path, output: &Path) -> Result<(), String> {
    let report = reduce_file(input, output).map_err(|err| format!("{err:#}"))?;
    println!(
        "wrote {}: {} cards, {} faces, {} attributes dropped",
        output.display(),
        report.cards,
        report.faces,
        report.attributes_dropped
    );
    Ok(())
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::ColorsChosen { colors, seed } => format!("colors: {colors} (seed {seed})"),
        Event::PoolBuilt { candidates, catalog } => {
            format!("pool: {candidates} of {catalog} cards pass the filters")
        }
        Event::DeckFilled { spells, draws } => format!("deck: {spells} spells after {draws} draws"),
        Event::SymbolsCounted { counts, total } => {
            let parts: Vec<String> = counts
                .iter()
                .map(|(symbol, count)| format!("{symbol}={count}"))
                .collect();
            format!("symbols: {} (total {total})", parts.join(" "))
        }
        Event::EmptyPoolFallback { lands } => {
            format!("warning: no mana symbols, splitting {lands} lands evenly")
        }
        Event::LandsAllocated { allocation, total } => {
            let parts: Vec<String> = allocation
                .iter()
                .map(|(symbol, count)| format!("{count} {}", symbol.basic_land()))
                .collect();
            format!("lands: {total} ({})", parts.join(", "))
        }
    }
}
