use crate::{Card, Rank, RngState, Suit};
use thiserror::Error;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("expected {DECK_SIZE} cards, found {0}")]
    WrongCount(usize),
    #[error("line {0}: expected `rank,suit`")]
    Malformed(usize),
    #[error("line {0}: non-numeric field")]
    NonNumeric(usize),
    #[error("line {line}: rank {value} out of range 0..13")]
    RankOutOfRange { line: usize, value: u8 },
    #[error("line {line}: suit {value} out of range 0..4")]
    SuitOutOfRange { line: usize, value: u8 },
    #[error("line {line}: duplicate card {card}")]
    Duplicate { line: usize, card: Card },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Fresh ordered deck, rank-major: A♣ A♦ A♥ A♠ 2♣ ... K♠.
    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::standard52();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Parses the persistence format: one `rank,suit` record per line,
    /// rank 0-12, suit 0-3, each of the 52 cards exactly once.
    pub fn parse(input: &str) -> Result<Self, DeckError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut seen = [[false; 4]; 13];
        for (number, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let number = number + 1;
            let (rank_field, suit_field) =
                line.split_once(',').ok_or(DeckError::Malformed(number))?;
            let rank_value: u8 = rank_field
                .trim()
                .parse()
                .map_err(|_| DeckError::NonNumeric(number))?;
            let suit_value: u8 = suit_field
                .trim()
                .parse()
                .map_err(|_| DeckError::NonNumeric(number))?;
            let rank = Rank::from_index(rank_value).ok_or(DeckError::RankOutOfRange {
                line: number,
                value: rank_value,
            })?;
            let suit = Suit::from_index(suit_value).ok_or(DeckError::SuitOutOfRange {
                line: number,
                value: suit_value,
            })?;
            let card = Card::new(rank, suit);
            let slot = &mut seen[rank_value as usize][suit_value as usize];
            if *slot {
                return Err(DeckError::Duplicate { line: number, card });
            }
            *slot = true;
            cards.push(card);
        }
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongCount(cards.len()));
        }
        Ok(Self { cards })
    }

    /// Inverse of [`Deck::parse`]: `Deck::parse(&deck.dump())` yields `deck`.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.cards.len() * 5);
        for card in &self.cards {
            out.push_str(&format!("{},{}\n", card.rank.index(), card.suit.index()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard52_has_every_card_once() {
        let deck = Deck::standard52();
        assert_eq!(deck.len(), DECK_SIZE);
        let mut seen = [[false; 4]; 13];
        for card in &deck.cards {
            let slot = &mut seen[card.rank.index() as usize][card.suit.index() as usize];
            assert!(!*slot, "duplicate {card}");
            *slot = true;
        }
    }

    #[test]
    fn shuffle_is_a_permutation_and_seed_deterministic() {
        let mut rng = RngState::from_seed(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        let mut sorted = deck.cards.clone();
        sorted.sort_by_key(|card| (card.rank.index(), card.suit.index()));
        assert_eq!(sorted, Deck::standard52().cards);

        let mut rng = RngState::from_seed(7);
        assert_eq!(Deck::shuffled(&mut rng), deck);
    }

    #[test]
    fn dump_parse_round_trips() {
        let mut rng = RngState::from_seed(11);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(Deck::parse(&deck.dump()), Ok(deck));
    }

    #[test]
    fn parse_rejects_wrong_count() {
        assert_eq!(Deck::parse("0,0\n1,1\n"), Err(DeckError::WrongCount(2)));
    }

    #[test]
    fn parse_rejects_duplicates() {
        let mut dump = Deck::standard52().dump();
        dump = dump.replacen("0,1\n", "0,0\n", 1);
        assert_eq!(
            Deck::parse(&dump),
            Err(DeckError::Duplicate {
                line: 2,
                card: Card::new(Rank::Ace, Suit::Clubs),
            })
        );
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        let mut dump = Deck::standard52().dump();
        dump = dump.replacen("0,0\n", "13,0\n", 1);
        assert_eq!(
            Deck::parse(&dump),
            Err(DeckError::RankOutOfRange { line: 1, value: 13 })
        );

        let mut dump = Deck::standard52().dump();
        dump = dump.replacen("0,0\n", "0,4\n", 1);
        assert_eq!(
            Deck::parse(&dump),
            Err(DeckError::SuitOutOfRange { line: 1, value: 4 })
        );
    }

    #[test]
    fn parse_rejects_non_numeric_and_malformed_lines() {
        let mut dump = Deck::standard52().dump();
        dump = dump.replacen("0,0\n", "ace,0\n", 1);
        assert_eq!(Deck::parse(&dump), Err(DeckError::NonNumeric(1)));

        let mut dump = Deck::standard52().dump();
        dump = dump.replacen("0,0\n", "0\n", 1);
        assert_eq!(Deck::parse(&dump), Err(DeckError::Malformed(1)));
    }
}
