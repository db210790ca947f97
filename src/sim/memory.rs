//! Memory match: pair up face-down cricket icons
//!
//! 8 icon pairs laid out in a shuffled 4x4 grid. At most two unmatched
//! cards are face-up at once; a matched pair stays face-up forever, a
//! mismatched pair flips back after a fixed delay. The run ends when all
//! pairs are matched and scores elapsed seconds, lower is better.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Pairs in the deck (16 cards)
pub const PAIR_COUNT: u32 = 8;
/// Grid side (PAIR_COUNT * 2 cards in a square layout)
pub const GRID_SIZE: usize = 4;
/// Mismatched pair flips back after this long
pub const UNFLIP_DELAY: f32 = 1.0;

/// Card face icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Bat,
    Wicket,
    Trophy,
    Star,
    Glove,
    Target,
    Bolt,
    Fire,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Bat,
        Icon::Wicket,
        Icon::Trophy,
        Icon::Star,
        Icon::Glove,
        Icon::Target,
        Icon::Bolt,
        Icon::Fire,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Bat => "\u{1F3CF}",
            Icon::Wicket => "\u{1F3B3}",
            Icon::Trophy => "\u{1F3C6}",
            Icon::Star => "\u{2B50}",
            Icon::Glove => "\u{1F9E4}",
            Icon::Target => "\u{1F3AF}",
            Icon::Bolt => "\u{26A1}",
            Icon::Fire => "\u{1F525}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub icon: Icon,
    pub flipped: bool,
    pub matched: bool,
}

/// What a flip attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Buffer full, or the card is already face-up or matched
    Ignored,
    /// First card of a move turned face-up
    Flipped,
    /// Second card completed a matching pair
    Matched,
    /// Second card mismatched; schedule the unflip delay
    Mismatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryState {
    pub cards: Vec<Card>,
    /// Indices of face-up unmatched cards, at most two
    flipped: Vec<usize>,
    pub moves: u32,
    pub matched_pairs: u32,
}

impl MemoryState {
    /// Deal a uniformly shuffled deck of 8 pairs
    pub fn new(rng: &mut Pcg32) -> Self {
        let mut icons: Vec<Icon> = Icon::ALL.iter().chain(Icon::ALL.iter()).copied().collect();
        icons.shuffle(rng);

        Self {
            cards: icons
                .into_iter()
                .map(|icon| Card {
                    icon,
                    flipped: false,
                    matched: false,
                })
                .collect(),
            flipped: Vec::with_capacity(2),
            moves: 0,
            matched_pairs: 0,
        }
    }

    /// Indices currently held in the flip buffer
    pub fn flipped_buffer(&self) -> &[usize] {
        &self.flipped
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == PAIR_COUNT
    }

    /// Flip the card at `index` face-up, if allowed. The second flip of a
    /// move compares the pair: a match locks both cards immediately; a
    /// mismatch leaves them face-up until [`Self::unflip`].
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let Some(card) = self.cards.get(index) else {
            return FlipOutcome::Ignored;
        };
        if self.flipped.len() >= 2 || card.flipped || card.matched {
            return FlipOutcome::Ignored;
        }

        self.cards[index].flipped = true;
        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return FlipOutcome::Flipped;
        }

        self.moves += 1;
        let (a, b) = (self.flipped[0], self.flipped[1]);
        if self.cards[a].icon == self.cards[b].icon {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            self.matched_pairs += 1;
            self.flipped.clear();
            FlipOutcome::Matched
        } else {
            FlipOutcome::Mismatch
        }
    }

    /// Turn a mismatched pair back face-down (fires on the unflip timer)
    pub fn unflip(&mut self) {
        for &index in &self.flipped {
            self.cards[index].flipped = false;
        }
        self.flipped.clear();
    }
}
