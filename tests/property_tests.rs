//! Property tests over random deals and random move sequences.

use proptest::prelude::*;

use klondike_engine::core::{Card, DrawMode, KlondikeConfig, DECK_SIZE};
use klondike_engine::rules::{Engine, Move, REVEAL_POINTS, STOCK_SIZE};
use klondike_engine::zones::{FoundationId, TableauId};
use rustc_hash::FxHashSet;

fn tableau_id() -> impl Strategy<Value = TableauId> {
    (0..7usize).prop_map(|i| TableauId::new(i).unwrap())
}

fn foundation_id() -> impl Strategy<Value = FoundationId> {
    (0..4usize).prop_map(|i| FoundationId::new(i).unwrap())
}

/// Any move, legal or not.
fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Draw),
        (tableau_id(), 0..14usize, tableau_id())
            .prop_map(|(from, depth, to)| Move::TableauRun { from, depth, to }),
        (tableau_id(), tableau_id()).prop_map(|(from, to)| Move::WholeTableau { from, to }),
        (tableau_id(), foundation_id())
            .prop_map(|(from, to)| Move::TableauToFoundation { from, to }),
        tableau_id().prop_map(|to| Move::WasteToTableau { to }),
        foundation_id().prop_map(|to| Move::WasteToFoundation { to }),
        (foundation_id(), tableau_id())
            .prop_map(|(from, to)| Move::FoundationToTableau { from, to }),
    ]
}

fn draw_mode() -> impl Strategy<Value = DrawMode> {
    prop_oneof![Just(DrawMode::One), Just(DrawMode::Three)]
}

fn deal(seed: u64, draw: DrawMode) -> Engine {
    Engine::from_config(&KlondikeConfig::new().with_draw(draw).with_seed(seed))
}

/// Play `picks` as indices into the legal move list, calling `check` with
/// the state before and after each move.
fn play_legal(engine: &mut Engine, picks: &[usize], mut check: impl FnMut(&Engine, Move, &Engine)) {
    for &pick in picks {
        let legal = engine.legal_moves();
        if legal.is_empty() {
            return;
        }
        let mv = legal[pick % legal.len()];
        let before = engine.clone();
        assert!(engine.apply(mv), "legal move {mv} rejected");
        check(&before, mv, engine);
    }
}

fn assert_full_deck(engine: &Engine) {
    let cards: Vec<Card> = engine.all_cards().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    let unique: FxHashSet<Card> = cards.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

fn assert_foundations_ascend(engine: &Engine) {
    for id in FoundationId::ALL {
        let pile = engine.foundation(id);
        for (i, card) in pile.iter().enumerate() {
            assert_eq!(card.rank().value() as usize, i + 1, "{id} out of order");
            assert_eq!(card.suit(), pile[0].suit(), "{id} mixes suits");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deal_invariant(seed in any::<u64>(), draw in draw_mode()) {
        let engine = deal(seed, draw);
        for (i, tableau) in engine.tableaus().iter().enumerate() {
            prop_assert_eq!(tableau.len(), i + 1);
            prop_assert_eq!(tableau.hidden_depth(), i);
        }
        prop_assert_eq!(engine.stock().len(), STOCK_SIZE);
        prop_assert!(engine.waste().is_empty());
        assert_full_deck(&engine);
    }

    #[test]
    fn prop_rejected_move_is_noop(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..40),
        attempts in prop::collection::vec(any_move(), 1..30),
    ) {
        let mut engine = deal(seed, DrawMode::One);
        play_legal(&mut engine, &picks, |_, _, _| {});

        for mv in attempts {
            let before = engine.clone();
            let legal = engine.can_apply(mv);
            let applied = engine.apply(mv);
            prop_assert_eq!(legal, applied, "can_apply disagrees with apply for {}", mv);
            if !applied {
                prop_assert_eq!(&engine, &before);
            }
        }
    }

    #[test]
    fn prop_draw_conserves_stock_and_waste(
        seed in any::<u64>(),
        draw in draw_mode(),
        draws in 1..60usize,
    ) {
        let mut engine = deal(seed, draw);
        let total = engine.stock().len() + engine.waste().len();

        for _ in 0..draws {
            let stock_before = engine.stock().len();
            engine.draw_from_stock();
            prop_assert_eq!(engine.stock().len() + engine.waste().len(), total);
            prop_assert!(engine.waste_visible() <= 3);
            if stock_before == 0 {
                prop_assert!(engine.waste().is_empty());
                prop_assert_eq!(engine.waste_visible(), 0);
            }
        }
    }

    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        draw in draw_mode(),
        picks in prop::collection::vec(any::<usize>(), 0..200),
    ) {
        let mut engine = deal(seed, draw);
        play_legal(&mut engine, &picks, |before, mv, after| {
            assert_full_deck(after);
            assert_foundations_ascend(after);
            assert!(after.waste_visible() <= after.waste().len().min(3));

            let mut reveals = 0;
            for id in TableauId::ALL {
                let (old, new) = (before.tableau(id), after.tableau(id));
                assert!(new.hidden_depth() <= new.len());
                if new.hidden_depth() != old.hidden_depth() {
                    // Only ever flips the one card that just became the top.
                    assert_eq!(new.hidden_depth() + 1, old.hidden_depth());
                    assert_eq!(new.len(), old.hidden_depth());
                    reveals += 1;
                }
            }

            if let Move::TableauRun { .. } = mv {
                assert_eq!(after.points() - before.points(), reveals * REVEAL_POINTS);
            }
            assert!(!after.is_cleared() || FoundationId::ALL.iter().all(|&f| after.foundation(f).len() == 13));
        });
    }
}
