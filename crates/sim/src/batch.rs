use crate::{AggregateResult, EconomicsReport, SimConfig};
use rayon::prelude::*;
use ruccordion_core::{play_variant, Deck, EventBus, GameError, RngState, RunResult, Variant};

/// Plays run `run_index` of a batch: the fixture deck for run 0 when one is
/// supplied, otherwise an independently seeded shuffle.
pub fn run_one(config: &SimConfig, run_index: u64) -> Result<RunResult, GameError> {
    let deck = match (&config.fixture, run_index) {
        (Some(fixture), 0) => fixture.clone(),
        _ => {
            let mut rng = RngState::derive(config.seed, run_index);
            Deck::shuffled(&mut rng)
        }
    };
    play_variant(config.variant, &deck, &mut EventBus::default())
}

struct RunOutcome {
    cards: u32,
    won: bool,
}

/// Runs the batch in parallel and reduces. Runs share nothing, so the
/// reduction is a plain order-independent sum; a run that trips an engine
/// invariant is counted as failed and excluded rather than sinking the
/// whole batch.
pub fn run_many(config: &SimConfig) -> AggregateResult {
    let outcomes: Vec<Result<RunOutcome, GameError>> = (0..config.runs)
        .into_par_iter()
        .map(|run_index| {
            run_one(config, run_index).map(|result| RunOutcome {
                cards: result.counted_cards(config.variant),
                won: is_win(config.variant, &result),
            })
        })
        .collect();

    let completed = outcomes.iter().filter(|outcome| outcome.is_ok()).count() as u64;
    let failed = config.runs - completed;
    let mut total_cards = 0u64;
    let mut wins = 0u64;
    for outcome in outcomes.iter().flatten() {
        total_cards += outcome.cards as u64;
        if outcome.won {
            wins += 1;
        }
    }

    let average_cards = ratio(total_cards as f64, completed);
    let win_rate = ratio(wins as f64, completed);
    let economics = config.economics.map(|model| {
        let gross_total = total_cards as f64 * model.earned_per_card;
        let net_total = gross_total - model.cost_per_deck * completed as f64;
        EconomicsReport {
            gross_total,
            net_total,
            gross_average: ratio(gross_total, completed),
            net_average: ratio(net_total, completed),
        }
    });

    AggregateResult {
        variant: config.variant,
        seed: config.seed,
        requested: config.runs,
        completed,
        failed,
        wins,
        total_cards,
        average_cards,
        win_rate,
        economics,
    }
}

fn is_win(variant: Variant, result: &RunResult) -> bool {
    match variant {
        // Classic is won when the whole deck ends in a single pile.
        Variant::Accordion => result.final_active_count == 1,
        // The variant is won when every card has been eliminated.
        Variant::OnceInALifetime => result.final_active_count == 0,
    }
}

fn ratio(numerator: f64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}
