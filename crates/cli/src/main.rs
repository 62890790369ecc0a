use anyhow::{bail, Context, Result};
use ruccordion_core::{play_variant, Deck, Event, EventBus, RngState, Slot, Variant};
use ruccordion_sim::{run_many, Economics, SimConfig};
use std::fs;
use std::io::{self, Write};

#[derive(Debug, Clone)]
struct CliOptions {
    runs: u64,
    seed: u64,
    variant: Variant,
    cost_per_deck: Option<f64>,
    earned_per_card: Option<f64>,
    deck_csv: Option<String>,
    save_csv: Option<String>,
    step: bool,
    json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            runs: 1,
            seed: 0xACC0,
            variant: Variant::Accordion,
            cost_per_deck: None,
            earned_per_card: None,
            deck_csv: None,
            save_csv: None,
            step: false,
            json: false,
        }
    }
}

fn usage() -> &'static str {
    "usage: ruccordion [options]\n\
     \n\
     --runs N             games to simulate (default 1; >1 runs a batch)\n\
     --seed N             base RNG seed (default 0xACC0)\n\
     --variant NAME       accordion | once-in-a-lifetime (default accordion)\n\
     --cost-per-deck X    economics: dollars paid per deck\n\
     --earned-per-card X  economics: dollars earned per counted card\n\
     --deck-csv PATH      load a fixed deck (rank,suit per line)\n\
     --save-csv PATH      save the single-game deck for replay\n\
     --step               pause on every merge/elimination (single game)\n\
     --json               emit JSON instead of text"
}

fn parse_args() -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = |name: &str| -> Result<String> {
            i += 1;
            args.get(i)
                .cloned()
                .with_context(|| format!("{name} needs a value"))
        };
        match flag {
            "--runs" => {
                options.runs = value("--runs")?.parse().context("invalid --runs")?;
            }
            "--seed" => {
                options.seed = value("--seed")?.parse().context("invalid --seed")?;
            }
            "--variant" => {
                options.variant = match value("--variant")?.as_str() {
                    "accordion" => Variant::Accordion,
                    "once-in-a-lifetime" | "lifetime" => Variant::OnceInALifetime,
                    other => bail!("unknown variant `{other}`"),
                };
            }
            "--cost-per-deck" => {
                options.cost_per_deck = Some(
                    value("--cost-per-deck")?
                        .parse()
                        .context("invalid --cost-per-deck")?,
                );
            }
            "--earned-per-card" => {
                options.earned_per_card = Some(
                    value("--earned-per-card")?
                        .parse()
                        .context("invalid --earned-per-card")?,
                );
            }
            "--deck-csv" => options.deck_csv = Some(value("--deck-csv")?),
            "--save-csv" => options.save_csv = Some(value("--save-csv")?),
            "--step" => options.step = true,
            "--json" => options.json = true,
            "--help" | "-h" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other => bail!("unknown argument `{other}`\n{}", usage()),
        }
        i += 1;
    }
    Ok(options)
}

fn economics(options: &CliOptions) -> Option<Economics> {
    if options.cost_per_deck.is_none() && options.earned_per_card.is_none() {
        return None;
    }
    Some(Economics {
        cost_per_deck: options.cost_per_deck.unwrap_or(0.0),
        earned_per_card: options.earned_per_card.unwrap_or(0.0),
    })
}

fn load_deck(path: &str) -> Result<Deck> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    Deck::parse(&text).with_context(|| format!("parsing {path}"))
}

fn render_row(slots: &[Slot], marked: Option<usize>) -> String {
    let mut parts = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        let cell = format!("{}({})", slot.top, slot.depth);
        if Some(index) == marked {
            parts.push(format!("[{cell}]"));
        } else {
            parts.push(cell);
        }
    }
    parts.join(" ")
}

fn wait_for_enter() -> Result<()> {
    print!("press enter to continue");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

fn run_single(options: &CliOptions) -> Result<()> {
    let deck = match &options.deck_csv {
        Some(path) => load_deck(path)?,
        None => {
            let mut rng = RngState::from_seed(options.seed);
            let deck = Deck::shuffled(&mut rng);
            println!("deck seed: {}", rng.seed());
            deck
        }
    };
    if let Some(path) = &options.save_csv {
        fs::write(path, deck.dump()).with_context(|| format!("writing {path}"))?;
    }

    let mut events = EventBus::capturing();
    let result = play_variant(options.variant, &deck, &mut events)?;

    let mut final_board = Vec::new();
    for event in events.drain() {
        match event {
            Event::CardDealt { index, card } => {
                if options.step {
                    println!("dealt {card} to slot {index}");
                }
            }
            Event::MergeStep {
                checked,
                merged_into,
                snapshot,
            } => {
                if options.step {
                    println!("slot {checked} merged onto slot {merged_into}");
                    println!("{}", render_row(&snapshot, Some(merged_into)));
                    wait_for_enter()?;
                }
            }
            Event::SpanRemoved {
                start,
                width,
                snapshot,
            } => {
                if options.step {
                    println!("removed {width} piles at slot {start}");
                    println!("{}", render_row(&snapshot, None));
                    wait_for_enter()?;
                }
            }
            Event::RunFinished { snapshot } => final_board = snapshot,
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", render_row(&final_board, None));
    println!("piles: {}", result.final_active_count);
    match options.variant {
        Variant::Accordion => println!("cards in your first pile: {}", result.first_pile()),
        Variant::OnceInALifetime => println!("cards remaining: {}", result.cards_remaining()),
    }
    if let Some(model) = economics(options) {
        let gross = result.counted_cards(options.variant) as f64 * model.earned_per_card;
        let net = gross - model.cost_per_deck;
        println!("gross earnings: ${gross:.2}");
        println!("net earnings: ${net:.2}");
    }
    Ok(())
}

fn run_batch(options: &CliOptions) -> Result<()> {
    let fixture = match &options.deck_csv {
        Some(path) => Some(load_deck(path)?),
        None => None,
    };
    let config = SimConfig {
        runs: options.runs,
        variant: options.variant,
        seed: options.seed,
        economics: economics(options),
        fixture,
    };
    let aggregate = run_many(&config);
    if options.json {
        println!("{}", aggregate.to_json()?);
    } else {
        println!("{}", aggregate.to_text_report());
    }
    Ok(())
}

fn main() -> Result<()> {
    let options = parse_args()?;
    if options.runs <= 1 {
        run_single(&options)
    } else {
        run_batch(&options)
    }
}
