//! Game state and move orchestration.
//!
//! `GameState` exclusively owns the deck, the waste pile, the foundations
//! and the tableaus. Every change goes through one of its operations, each
//! of which runs to completion and either applies fully or leaves the
//! position untouched:
//!
//! - `draw_from_deck`: draw one card, or recycle the waste when the deck is empty
//! - `request_move`: validate a move, then detach, append and reveal
//! - `auto_move_to_foundation`: first foundation (0..3) that accepts the card
//! - `restart`: replace the whole position with a fresh deal
//!
//! Read access (`pile`, `snapshot`, ...) never allows mutation.

use log::{debug, info, trace};
use rand::Rng;

use crate::core::{Card, CardId, GameConfig, GameRng, StackId, NUM_FOUNDATIONS, NUM_TABLEAUS};
use crate::events::{EventQueue, GameEvent, MovedCards};
use crate::rules;
use crate::zones::{Deck, Pile};

use super::layout::{Layout, LayoutError};
use super::moves::{DrawOutcome, MoveError, MoveOutcome, MoveRequest, ValidatedMove};

/// A single game of Klondike.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    deck: Deck,
    waste: Pile,
    foundations: [Pile; NUM_FOUNDATIONS],
    tableaus: [Pile; NUM_TABLEAUS],
    events: EventQueue,
    won: bool,
}

impl GameState {
    /// Shuffle with the configured seed and deal a new game.
    #[must_use]
    pub fn new_game(config: GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let seed = config.seed;
        let mut state = Self::deal(config, Deck::shuffled(&mut rng));
        state.events.push(GameEvent::NewGame { seed: Some(seed) });
        debug!("new game dealt from seed {}", seed);
        state
    }

    /// Shuffle with a caller-supplied RNG and deal a new game.
    ///
    /// `config.seed` is ignored.
    #[must_use]
    pub fn new_game_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mut state = Self::deal(config, Deck::shuffled(rng));
        state.events.push(GameEvent::NewGame { seed: None });
        debug!("new game dealt from injected rng");
        state
    }

    /// Start from an arbitrary position.
    ///
    /// The layout must pass `Layout::validate`.
    pub fn from_layout(layout: Layout, config: GameConfig) -> Result<Self, LayoutError> {
        layout.validate()?;
        let Layout {
            deck,
            waste,
            foundations,
            tableaus,
        } = layout;
        let won = rules::is_won(&foundations);
        Ok(Self {
            config,
            deck,
            waste,
            foundations,
            tableaus,
            events: EventQueue::new(),
            won,
        })
    }

    /// Deal a full deck: column `i` receives `i + 1` cards, dealt round-robin
    /// from the top of the deck; only the last card of each column is face-up.
    fn deal(config: GameConfig, mut deck: Deck) -> Self {
        let mut tableaus: [Pile; NUM_TABLEAUS] = Default::default();

        for row in 0..NUM_TABLEAUS {
            for (col, pile) in tableaus.iter_mut().enumerate().skip(row) {
                if let Some(mut card) = deck.deal() {
                    if col == row {
                        card.turn_up();
                    }
                    pile.push(card);
                }
            }
        }

        let state = Self {
            config,
            deck,
            waste: Pile::new(),
            foundations: Default::default(),
            tableaus,
            events: EventQueue::new(),
            won: false,
        };
        debug_assert_eq!(state.audit(), Ok(()));
        state
    }

    /// Discard the current game and deal a new one from `seed`.
    ///
    /// The replacement is built completely before it is swapped in. Pending
    /// events of the old game are dropped.
    pub fn restart(&mut self, seed: u64) {
        let config = self.config.clone().with_seed(seed);
        *self = Self::new_game(config);
    }

    /// Discard the current game and deal a new one from `rng`.
    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let config = self.config.clone();
        *self = Self::new_game_with_rng(config, rng);
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    #[must_use]
    pub fn tableaus(&self) -> &[Pile; NUM_TABLEAUS] {
        &self.tableaus
    }

    /// The pile behind a stack id, or `None` for an out-of-range index.
    #[must_use]
    pub fn pile(&self, id: StackId) -> Option<&Pile> {
        match id {
            StackId::Deck => Some(self.deck.pile()),
            StackId::Waste => Some(&self.waste),
            StackId::Foundation(i) => self.foundations.get(i as usize),
            StackId::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    /// A stack's cards, bottom to top. Empty for an unknown id.
    #[must_use]
    pub fn cards(&self, id: StackId) -> Vec<Card> {
        self.pile(id).map(Pile::to_vec).unwrap_or_default()
    }

    /// Every stack's contents. Cheap: the piles share storage with the game.
    #[must_use]
    pub fn snapshot(&self) -> Layout {
        Layout {
            deck: self.deck.clone(),
            waste: self.waste.clone(),
            foundations: self.foundations.clone(),
            tableaus: self.tableaus.clone(),
        }
    }

    /// Where a card is: its stack and index (0 = bottom).
    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<(StackId, usize)> {
        StackId::all().find_map(|id| {
            let index = self.pile(id)?.position(card)?;
            Some((id, index))
        })
    }

    /// Whether every foundation holds a complete suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.foundations)
    }

    /// Check every structural invariant of the current position.
    pub fn audit(&self) -> Result<(), LayoutError> {
        self.snapshot().validate()
    }

    // === Events ===

    /// Events not yet drained, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    /// Remove and return all pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Deck ===

    /// Draw one card onto the waste pile, or recycle the waste pile into
    /// the deck when the deck is empty.
    pub fn draw_from_deck(&mut self) -> DrawOutcome {
        if let Some(card) = self.deck.draw() {
            let id = card.id();
            self.waste.push(card);
            self.events.push(GameEvent::CardDrawn { card: id });
            debug!("drew {} ({} left in deck)", id, self.deck.len());
            return DrawOutcome::Drawn(id);
        }

        if self.waste.is_empty() {
            trace!("draw ignored: deck and waste are empty");
            return DrawOutcome::Empty;
        }

        let count = self.deck.recycle_from_waste(&mut self.waste);
        self.events.push(GameEvent::WasteRecycled { count });
        debug!("recycled {} waste cards into the deck", count);
        debug_assert_eq!(self.audit(), Ok(()));
        DrawOutcome::Recycled { count }
    }

    // === Moves ===

    /// Check a move against the current position without applying it.
    pub(crate) fn validate(&self, request: MoveRequest) -> Result<ValidatedMove, MoveError> {
        let MoveRequest { card, from, to } = request;

        if from == to {
            return Err(MoveError::SameStack);
        }
        if !from.is_valid() {
            return Err(MoveError::UnknownStack(from));
        }
        if !to.is_valid() {
            return Err(MoveError::UnknownStack(to));
        }
        if !(to.is_foundation() || to.is_tableau()) {
            return Err(MoveError::UnsupportedDestination(to));
        }
        if from == StackId::Deck || (from.is_foundation() && to.is_foundation()) {
            return Err(MoveError::UnsupportedSource(from));
        }

        let source = self.pile(from).ok_or(MoveError::UnknownStack(from))?;
        let index = source.position(card).ok_or(MoveError::CardNotFound(card))?;
        if !source.get(index).is_some_and(Card::is_face_up) {
            return Err(MoveError::CardFaceDown(card));
        }

        let is_top = index + 1 == source.len();
        if !is_top {
            let liftable = from.is_tableau()
                && to.is_tableau()
                && rules::can_lift_from_tableau(source, index, self.config.run_moves);
            if !liftable {
                return Err(MoveError::NotOnTop(card));
            }
        }

        let top = self.pile(to).and_then(Pile::top).map(Card::id);
        let accepted = if to.is_foundation() {
            rules::can_move_to_foundation(card, top)
        } else {
            rules::can_move_to_tableau(card, top)
        };
        if !accepted {
            return Err(MoveError::IllegalPlacement {
                card,
                destination: to,
            });
        }

        Ok(ValidatedMove { request, index })
    }

    fn pile_mut(&mut self, id: StackId) -> Option<&mut Pile> {
        match id {
            StackId::Deck => None,
            StackId::Waste => Some(&mut self.waste),
            StackId::Foundation(i) => self.foundations.get_mut(i as usize),
            StackId::Tableau(i) => self.tableaus.get_mut(i as usize),
        }
    }

    /// Detach the run, append it to the destination, reveal the new source
    /// top and record events.
    fn apply(&mut self, validated: ValidatedMove) -> MoveOutcome {
        let MoveRequest { from, to, .. } = validated.request;

        let run = match self.pile_mut(from) {
            Some(source) => source.split_off(validated.index),
            None => Pile::new(),
        };
        let cards: MovedCards = run.iter().map(Card::id).collect();
        if let Some(dest) = self.pile_mut(to) {
            dest.append(run);
        }
        self.events.push(GameEvent::moved(cards.iter().copied(), from, to));
        debug!("moved {:?} {} -> {}", cards.as_slice(), from, to);

        let revealed = if from.is_tableau() {
            self.pile_mut(from).and_then(Pile::reveal_top).map(|c| c.id())
        } else {
            None
        };
        if let Some(card) = revealed {
            self.events.push(GameEvent::CardRevealed { card, stack: from });
            debug!("revealed {} on {}", card, from);
        }

        let won = !self.won && to.is_foundation() && self.is_won();
        if won {
            self.won = true;
            self.events.push(GameEvent::GameWon);
            info!("game won");
        } else if self.won && !self.is_won() {
            self.won = false;
        }

        debug_assert_eq!(self.audit(), Ok(()));

        MoveOutcome {
            cards,
            from,
            to,
            revealed,
            won,
        }
    }

    /// Move `card` from `from` to `to`.
    ///
    /// From a tableau the card carries every card above it; from the waste
    /// or a foundation only the top card may move. A rejected move changes
    /// nothing.
    pub fn request_move(&mut self, card: CardId, from: StackId, to: StackId) -> Result<MoveOutcome, MoveError> {
        self.submit(MoveRequest::new(card, from, to))
    }

    /// Apply a prepared `MoveRequest`.
    pub fn submit(&mut self, request: MoveRequest) -> Result<MoveOutcome, MoveError> {
        match self.validate(request) {
            Ok(validated) => Ok(self.apply(validated)),
            Err(err) => {
                trace!("rejected {}: {}", request, err);
                Err(err)
            }
        }
    }

    /// Whether `request_move(card, from, to)` would succeed.
    #[must_use]
    pub fn can_move(&self, card: CardId, from: StackId, to: StackId) -> bool {
        self.validate(MoveRequest::new(card, from, to)).is_ok()
    }

    /// Every foundation and tableau that would accept `card` from `from`.
    #[must_use]
    pub fn valid_destinations(&self, card: CardId, from: StackId) -> Vec<StackId> {
        StackId::foundations()
            .chain(StackId::tableaus())
            .filter(|&to| self.can_move(card, from, to))
            .collect()
    }

    /// Move `card` to the first foundation, in index order, that accepts it.
    ///
    /// The card's current stack is looked up; cards already on a foundation
    /// are not moved.
    pub fn auto_move_to_foundation(&mut self, card: CardId) -> Result<MoveOutcome, MoveError> {
        let (from, _) = self.find_card(card).ok_or(MoveError::CardNotFound(card))?;
        if from.is_foundation() {
            return Err(MoveError::UnsupportedSource(from));
        }

        let mut last_err = MoveError::NoFoundationAccepts(card);
        for to in StackId::foundations() {
            match self.validate(MoveRequest::new(card, from, to)) {
                Ok(validated) => return Ok(self.apply(validated)),
                Err(MoveError::IllegalPlacement { .. }) => {}
                Err(err) => last_err = err,
            }
        }
        trace!("auto-move of {} rejected: {}", card, last_err);
        Err(last_err)
    }

    /// Every move that is currently legal.
    ///
    /// Sources: the waste top, every foundation top and every liftable
    /// tableau card. Destinations: foundations and tableaus.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        let mut candidates: Vec<(CardId, StackId)> = Vec::new();

        if let Some(top) = self.waste.top() {
            candidates.push((top.id(), StackId::Waste));
        }
        for (pile, id) in self.foundations.iter().zip(StackId::foundations()) {
            if let Some(top) = pile.top() {
                candidates.push((top.id(), id));
            }
        }
        for (pile, id) in self.tableaus.iter().zip(StackId::tableaus()) {
            for card in pile.iter().skip(pile.face_up_start()) {
                candidates.push((card.id(), id));
            }
        }

        candidates
            .into_iter()
            .flat_map(|(card, from)| {
                StackId::foundations()
                    .chain(StackId::tableaus())
                    .map(move |to| MoveRequest::new(card, from, to))
            })
            .filter(|&request| self.validate(request).is_ok())
            .collect()
    }
}
