//! Klondike gameplay integration tests.
//!
//! These tests drive `GameState` through its public API only: placement
//! rules, draw and recycle, run moves, reveals, winning and events.

use klondike_engine::core::{Card, CardId, GameConfig, Rank, RunMoves, StackId, Suit};
use klondike_engine::events::{EventKind, GameEvent};
use klondike_engine::game::{DrawOutcome, GameState, Layout, MoveError};

fn id(s: &str) -> CardId {
    s.parse().unwrap()
}

fn up(s: &str) -> Card {
    Card::face_up(id(s))
}

fn down(s: &str) -> Card {
    Card::face_down(id(s))
}

/// Start from `layout` with every unplaced card in the deck.
fn game(layout: Layout) -> GameState {
    GameState::from_layout(layout.fill_deck(), GameConfig::default()).unwrap()
}

fn full_suit(suit: Suit) -> Vec<Card> {
    Rank::ALL
        .into_iter()
        .map(|rank| Card::face_up(CardId::new(suit, rank)))
        .collect()
}

// =============================================================================
// Placement Rules
// =============================================================================

/// An empty tableau takes only a King.
#[test]
fn test_empty_tableau_takes_king() {
    let layout = Layout::empty().with_waste([up("K♠"), up("7♣")]);
    let mut state = game(layout);

    assert_eq!(
        state.request_move(id("7♣"), StackId::Waste, StackId::Tableau(0)),
        Err(MoveError::IllegalPlacement {
            card: id("7♣"),
            destination: StackId::Tableau(0),
        })
    );
    assert_eq!(state.waste().len(), 2);

    let mut state = game(Layout::empty().with_waste([up("7♣"), up("K♠")]));
    state.request_move(id("K♠"), StackId::Waste, StackId::Tableau(0)).unwrap();

    assert_eq!(state.tableaus()[0].to_vec(), vec![up("K♠")]);
    assert_eq!(state.waste().to_vec(), vec![up("7♣")]);
}

/// Foundations build up by suit from the Ace.
#[test]
fn test_foundation_builds_from_ace() {
    let layout = Layout::empty()
        .with_tableau(0, [up("2♥")])
        .with_tableau(1, [up("A♥")]);
    let mut state = game(layout);

    assert!(!state.can_move(id("2♥"), StackId::Tableau(0), StackId::Foundation(0)));
    assert!(state
        .request_move(id("2♥"), StackId::Tableau(0), StackId::Foundation(0))
        .is_err());

    state.request_move(id("A♥"), StackId::Tableau(1), StackId::Foundation(0)).unwrap();
    state.request_move(id("2♥"), StackId::Tableau(0), StackId::Foundation(0)).unwrap();

    assert_eq!(state.foundations()[0].ids(), vec![id("A♥"), id("2♥")]);
    assert!(state.tableaus()[0].is_empty());
    assert!(state.tableaus()[1].is_empty());
}

/// Tableaus build down in alternating colors.
#[test]
fn test_tableau_alternates_color() {
    let layout = Layout::empty()
        .with_tableau(0, [up("7♦")])
        .with_waste([up("6♠"), up("6♦")]);
    let mut state = game(layout);

    assert!(matches!(
        state.request_move(id("6♦"), StackId::Waste, StackId::Tableau(0)),
        Err(MoveError::IllegalPlacement { .. })
    ));

    // Not a King, so the empty tableaus refuse it too
    assert!(state.valid_destinations(id("6♦"), StackId::Waste).is_empty());

    let mut state = game(
        Layout::empty()
            .with_tableau(0, [up("7♦")])
            .with_waste([up("6♦"), up("6♠")]),
    );
    state.request_move(id("6♠"), StackId::Waste, StackId::Tableau(0)).unwrap();
    assert_eq!(state.tableaus()[0].ids(), vec![id("7♦"), id("6♠")]);
}

// =============================================================================
// Deck and Waste
// =============================================================================

/// Drawing from an empty deck turns the waste over; draw order is kept.
#[test]
fn test_recycle_restores_draw_order() {
    let waste = [id("A♣"), id("5♦"), id("K♥")];
    let mut layout = Layout::empty()
        .with_waste(waste.map(Card::face_up))
        .with_foundation(0, full_suit(Suit::Hearts)[..12].to_vec())
        .with_foundation(1, full_suit(Suit::Spades))
        .with_foundation(2, full_suit(Suit::Diamonds)[..4].to_vec());

    // Everything else goes to the tableaus so the deck is empty
    let rest: Vec<CardId> = CardId::all()
        .filter(|c| !waste.contains(c))
        .filter(|c| c.suit == Suit::Clubs || (c.suit == Suit::Diamonds && c.rank > Rank::Five))
        .collect();
    let mut columns: Vec<Vec<Card>> = vec![Vec::new(); 7];
    for (i, card) in rest.into_iter().enumerate() {
        columns[i % 7].push(Card::face_down(card));
    }
    for (i, mut cards) in columns.into_iter().enumerate() {
        if let Some(top) = cards.pop() {
            cards.push(Card::face_up(top.id()));
        }
        layout = layout.with_tableau(i, cards);
    }

    let mut state = GameState::from_layout(layout, GameConfig::default()).unwrap();
    assert!(state.deck().is_empty());

    let outcome = state.draw_from_deck();

    assert_eq!(outcome, DrawOutcome::Recycled { count: 3 });
    assert!(state.waste().is_empty());
    assert_eq!(
        state.deck().pile().to_vec(),
        vec![down("K♥"), down("5♦"), down("A♣")]
    );

    // A♣ was drawn first before the recycle, so it is drawn first again
    let drawn: Vec<_> = (0..3).filter_map(|_| state.draw_from_deck().drawn()).collect();
    assert_eq!(drawn, waste.to_vec());
}

/// Drawing every card then recycling leaves the deck as it started.
#[test]
fn test_full_cycle_round_trip() {
    let mut state = GameState::new_game(GameConfig::new(99));
    let before = state.deck().clone();
    let count = before.len();

    for _ in 0..count {
        assert!(state.draw_from_deck().drawn().is_some());
    }
    assert!(state.deck().is_empty());
    assert_eq!(state.waste().len(), count);

    assert_eq!(state.draw_from_deck(), DrawOutcome::Recycled { count });
    assert_eq!(state.deck(), &before);
    assert!(state.waste().is_empty());
}

/// Drawn cards land face-up on the waste.
#[test]
fn test_draw_moves_top_card() {
    let mut state = GameState::new_game(GameConfig::new(3));
    let top = state.deck().pile().top().map(Card::id).unwrap();
    let before = state.deck().len();

    assert_eq!(state.draw_from_deck(), DrawOutcome::Drawn(top));
    assert_eq!(state.deck().len(), before - 1);
    assert_eq!(state.waste().top(), Some(&Card::face_up(top)));
}

// =============================================================================
// Winning
// =============================================================================

/// Four complete foundations win; taking a King back off does not.
#[test]
fn test_win_and_unwin() {
    let mut layout = Layout::empty();
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        layout = layout.with_foundation(i, full_suit(suit));
    }
    let mut state = GameState::from_layout(layout, GameConfig::default()).unwrap();
    assert!(state.is_won());

    let outcome = state
        .request_move(id("K♣"), StackId::Foundation(2), StackId::Tableau(0))
        .unwrap();

    assert!(!outcome.won);
    assert!(!state.is_won());
    assert_eq!(state.tableaus()[0].ids(), vec![id("K♣")]);
    assert_eq!(state.foundations()[2].len(), 12);
}

/// The winning move reports it and emits `GameWon`.
#[test]
fn test_final_move_wins() {
    let mut layout = Layout::empty();
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        let mut cards = full_suit(suit);
        if suit == Suit::Diamonds {
            cards.pop();
        }
        layout = layout.with_foundation(i, cards);
    }
    let layout = layout.with_tableau(4, [up("K♦")]);
    let mut state = GameState::from_layout(layout, GameConfig::default()).unwrap();

    let outcome = state.auto_move_to_foundation(id("K♦")).unwrap();

    assert!(outcome.won);
    assert_eq!(outcome.foundation_index(), Some(1));
    assert!(state.is_won());
    let kinds: Vec<_> = state.drain_events().iter().map(GameEvent::kind).collect();
    assert_eq!(kinds, vec![EventKind::CardsMoved, EventKind::GameWon]);
}

// =============================================================================
// Runs and Reveals
// =============================================================================

/// A face-up run moves as a unit and uncovers the card beneath it.
#[test]
fn test_run_move_reveals_source() {
    let layout = Layout::empty()
        .with_tableau(2, [down("3♠"), down("J♥"), up("8♣"), up("7♥")])
        .with_tableau(5, [up("9♦")]);
    let mut state = game(layout);

    let outcome = state
        .request_move(id("8♣"), StackId::Tableau(2), StackId::Tableau(5))
        .unwrap();

    assert_eq!(outcome.cards.as_slice(), &[id("8♣"), id("7♥")]);
    assert_eq!(outcome.revealed, Some(id("J♥")));
    assert_eq!(state.tableaus()[2].to_vec(), vec![down("3♠"), up("J♥")]);
    assert_eq!(state.tableaus()[5].ids(), vec![id("9♦"), id("8♣"), id("7♥")]);
    assert!(state.audit().is_ok());
}

/// With single-card moves only the top card can leave a tableau.
#[test]
fn test_single_card_policy_blocks_runs() {
    let layout = Layout::empty()
        .with_tableau(2, [up("8♣"), up("7♥")])
        .with_tableau(5, [up("9♦")])
        .fill_deck();
    let config = GameConfig::new(0).single_card_only();
    assert_eq!(config.run_moves, RunMoves::SingleCard);
    let mut state = GameState::from_layout(layout, config).unwrap();

    assert_eq!(
        state.request_move(id("8♣"), StackId::Tableau(2), StackId::Tableau(5)),
        Err(MoveError::NotOnTop(id("8♣")))
    );
    let outcome = state.request_move(id("7♥"), StackId::Tableau(2), StackId::Tableau(0));
    assert!(matches!(outcome, Err(MoveError::IllegalPlacement { .. })));
}

/// Emptying a tableau reveals nothing and leaves it open for a King.
#[test]
fn test_emptied_tableau_takes_king() {
    let layout = Layout::empty()
        .with_tableau(0, [up("A♠")])
        .with_waste([up("K♥")]);
    let mut state = game(layout);

    let outcome = state.auto_move_to_foundation(id("A♠")).unwrap();
    assert_eq!(outcome.revealed, None);

    state.request_move(id("K♥"), StackId::Waste, StackId::Tableau(0)).unwrap();
    assert_eq!(state.tableaus()[0].ids(), vec![id("K♥")]);
}

// =============================================================================
// Rejection Leaves State Unchanged
// =============================================================================

/// Every rejected request leaves the position and event queue as they were.
#[test]
fn test_rejections_are_atomic() {
    let mut state = GameState::new_game(GameConfig::new(2024));
    state.drain_events();
    let before = state.snapshot();

    let attempts = [
        (id("A♠"), StackId::Deck, StackId::Tableau(0)),
        (id("A♠"), StackId::Tableau(0), StackId::Waste),
        (id("A♠"), StackId::Tableau(3), StackId::Tableau(3)),
        (id("A♠"), StackId::Foundation(0), StackId::Tableau(9)),
    ];
    for (card, from, to) in attempts {
        assert!(state.request_move(card, from, to).is_err());
    }
    // Face-down cards in every tableau
    for i in 1..7u8 {
        let hidden = state.tableaus()[i as usize].get(0).map(Card::id).unwrap();
        assert_eq!(
            state.request_move(hidden, StackId::Tableau(i), StackId::Tableau(0)),
            Err(MoveError::CardFaceDown(hidden))
        );
    }

    assert_eq!(state.snapshot(), before);
    assert!(state.events().is_empty());
}

/// A card id that has already moved elsewhere is rejected.
#[test]
fn test_stale_source_rejected() {
    let layout = Layout::empty()
        .with_tableau(0, [up("Q♣")])
        .with_tableau(1, [up("J♥")])
        .with_tableau(2, [up("Q♠")]);
    let mut state = game(layout);

    state.request_move(id("J♥"), StackId::Tableau(1), StackId::Tableau(0)).unwrap();

    assert_eq!(
        state.request_move(id("J♥"), StackId::Tableau(1), StackId::Tableau(2)),
        Err(MoveError::CardNotFound(id("J♥")))
    );
    assert_eq!(state.find_card(id("J♥")), Some((StackId::Tableau(0), 1)));
}

// =============================================================================
// Events
// =============================================================================

/// Draws and recycles are reported in order.
#[test]
fn test_draw_events() {
    let mut state = game(Layout::empty());
    state.drain_events();

    let first = state.draw_from_deck().drawn().unwrap();
    let second = state.draw_from_deck().drawn().unwrap();

    assert_eq!(
        state.drain_events(),
        vec![
            GameEvent::CardDrawn { card: first },
            GameEvent::CardDrawn { card: second },
        ]
    );
    assert!(state.events().is_empty());
}

/// A new game announces itself and its seed.
#[test]
fn test_new_game_event() {
    let mut state = GameState::new_game(GameConfig::new(8));
    assert_eq!(state.drain_events(), vec![GameEvent::NewGame { seed: Some(8) }]);

    state.restart(9);
    assert_eq!(state.drain_events(), vec![GameEvent::NewGame { seed: Some(9) }]);
}
