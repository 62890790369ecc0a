use ruccordion_core::{play, Card, Deck, Rank, RngState, Suit, Variant};
use ruccordion_sim::{run_many, run_one, Economics, SimConfig};

#[test]
fn batch_total_matches_independent_replays() {
    let config = SimConfig {
        runs: 16,
        seed: 42,
        ..SimConfig::default()
    };
    let aggregate = run_many(&config);
    assert_eq!(aggregate.requested, 16);
    assert_eq!(aggregate.completed, 16);
    assert_eq!(aggregate.failed, 0);

    // Replaying each seed individually and summing must land on the same
    // totals regardless of how the batch was partitioned.
    let mut total = 0u64;
    for run_index in 0..16 {
        let mut rng = RngState::derive(42, run_index);
        let deck = Deck::shuffled(&mut rng);
        total += play(&deck).unwrap().first_pile() as u64;
    }
    assert_eq!(aggregate.total_cards, total);
    assert_eq!(aggregate.average_cards, total as f64 / 16.0);
}

#[test]
fn run_many_is_deterministic_for_a_seed() {
    let config = SimConfig {
        runs: 8,
        seed: 7,
        ..SimConfig::default()
    };
    assert_eq!(run_many(&config), run_many(&config));
}

#[test]
fn fixture_deck_drives_run_zero() {
    // The ordered deck collapses to one 52-card pile, so the aggregate is
    // known exactly.
    let config = SimConfig {
        runs: 1,
        fixture: Some(Deck::standard52()),
        economics: Some(Economics {
            cost_per_deck: 1.0,
            earned_per_card: 0.25,
        }),
        ..SimConfig::default()
    };
    let aggregate = run_many(&config);
    assert_eq!(aggregate.total_cards, 52);
    assert_eq!(aggregate.wins, 1);
    assert_eq!(aggregate.win_rate, 1.0);
    let economics = aggregate.economics.unwrap();
    assert_eq!(economics.gross_total, 13.0);
    assert_eq!(economics.net_total, 12.0);
    assert_eq!(economics.gross_average, 13.0);
    assert_eq!(economics.net_average, 12.0);

    let replay = run_one(&config, 0).unwrap();
    assert_eq!(replay.first_pile(), 52);
}

#[test]
fn economics_average_matches_expected_loss_rate() {
    // Spec-style check: at $1 per deck and $0.10 per card, the per-run net
    // is cards/10 - 1, so the batch net average must equal that identity.
    let config = SimConfig {
        runs: 200,
        seed: 3,
        economics: Some(Economics {
            cost_per_deck: 1.0,
            earned_per_card: 0.1,
        }),
        ..SimConfig::default()
    };
    let aggregate = run_many(&config);
    let economics = aggregate.economics.unwrap();
    let expected_net_average = aggregate.average_cards * 0.1 - 1.0;
    assert!((economics.net_average - expected_net_average).abs() < 1e-9);
    assert!((economics.gross_average - aggregate.average_cards * 0.1).abs() < 1e-9);
}

#[test]
fn oversized_fixture_counts_as_failed_run() {
    let mut deck = Deck::standard52();
    deck.cards.push(Card::new(Rank::Ace, Suit::Clubs));
    let config = SimConfig {
        runs: 1,
        fixture: Some(deck),
        ..SimConfig::default()
    };
    let aggregate = run_many(&config);
    assert_eq!(aggregate.requested, 1);
    assert_eq!(aggregate.completed, 0);
    assert_eq!(aggregate.failed, 1);
    assert_eq!(aggregate.total_cards, 0);
    assert_eq!(aggregate.average_cards, 0.0);
}

#[test]
fn fixture_loads_from_persistence_format() {
    let config = SimConfig {
        runs: 1,
        ..SimConfig::default()
    }
    .with_fixture(&Deck::standard52().dump())
    .unwrap();
    let aggregate = run_many(&config);
    assert_eq!(aggregate.total_cards, 52);

    let dir = std::env::temp_dir().join("ruccordion_batch_report.json");
    aggregate.save_json(&dir).unwrap();
    let saved = std::fs::read_to_string(&dir).unwrap();
    assert!(saved.contains("\"total_cards\": 52"));
    let _ = std::fs::remove_file(&dir);
}

#[test]
fn fixture_rejects_malformed_input() {
    let result = SimConfig::default().with_fixture("not,a,deck");
    assert!(result.is_err());
}

#[test]
fn lifetime_batch_counts_surviving_cards() {
    let config = SimConfig {
        runs: 32,
        seed: 5,
        variant: Variant::OnceInALifetime,
        ..SimConfig::default()
    };
    let aggregate = run_many(&config);
    assert_eq!(aggregate.completed, 32);
    // Eliminations always remove an even number of cards from 52.
    assert_eq!(aggregate.total_cards % 2, 0);
    assert!(aggregate.average_cards <= 52.0);
}
