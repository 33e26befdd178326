mod common;

use blackjack_core::{
    DeckError, Event, EventBus, Payout, PlayerAction, PlayerKind, Rank, Rejection, RoundError,
    RoundOutcome, RoundPhase, Table, TableConfig,
};
use common::{settled, stacked_table, ScriptedIo};
use std::collections::HashSet;

use PlayerAction::{DoubleDown, Hit, Stand};
use Rank::*;

fn play(table: &mut Table, io: &mut ScriptedIo, events: &mut EventBus) -> Vec<Event> {
    let outcome = table.play_round(io, events).expect("round");
    assert_eq!(outcome, RoundOutcome::Continue);
    io.all_events(events)
}

#[test]
fn standing_twenty_beats_dealer_eighteen() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Nine, King, Nine]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 100.0)]);
    assert_eq!(table.players()[0].cash, 800.0);
    assert!(seen.contains(&Event::DealerStands { value: 18 }));
}

#[test]
fn equal_values_refund_the_wager() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Nine, Nine]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 50.0)]);
    assert_eq!(table.players()[0].cash, 750.0);
}

#[test]
fn lower_value_forfeits_the_wager() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Nine, King]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 0.0)]);
    assert_eq!(table.players()[0].cash, 700.0);
}

#[test]
fn natural_against_low_up_card_pays_at_once() {
    let (mut table, mut events) = stacked_table(15, &[Ace, Nine, King, Eight]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[15]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(io.questions, 2, "a natural is never offered actions");
    assert!(seen.contains(&Event::NaturalBlackjack {
        player: "Ann".to_string(),
        hand: 0,
        paid: true,
    }));
    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 37.5)]);
    assert_eq!(table.players()[0].cash, 247.5);

    let paid_at = seen
        .iter()
        .position(|event| matches!(event, Event::HandSettled { .. }))
        .expect("settled");
    let dealt_hole = seen
        .iter()
        .position(|event| matches!(event, Event::DealerCardDealt { card: None }))
        .expect("hole card");
    assert!(paid_at < dealt_hole);
}

#[test]
fn natural_against_ace_waits_for_reveal() {
    let (mut table, mut events) = stacked_table(15, &[Ace, Ace, King, Six]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[15]);
    let seen = play(&mut table, &mut io, &mut events);

    assert!(seen.contains(&Event::NaturalBlackjack {
        player: "Ann".to_string(),
        hand: 0,
        paid: false,
    }));
    let revealed_at = seen
        .iter()
        .position(|event| matches!(event, Event::DealerRevealed { value: 17, .. }))
        .expect("reveal");
    let paid_at = seen
        .iter()
        .position(|event| {
            matches!(
                event,
                Event::HandSettled {
                    payout: Payout::Blackjack,
                    ..
                }
            )
        })
        .expect("paid");
    assert!(revealed_at < paid_at);
    assert_eq!(settled(&seen).len(), 1);
    assert_eq!(table.players()[0].cash, 247.5);
}

#[test]
fn natural_pushes_against_dealer_blackjack() {
    let (mut table, mut events) = stacked_table(15, &[Ace, Ace, King, King]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[15]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 15.0)]);
    assert_eq!(table.players()[0].cash, 225.0);
}

#[test]
fn instant_payout_when_withholding_is_off() {
    let (mut table, mut events) = stacked_table(15, &[Ace, Ace, King, King]);
    table.config.withhold_on_dealer_ace_or_ten = false;
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[15]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 37.5)]);
}

#[test]
fn dealer_stops_drawing_at_seventeen() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Ten, Two, Three, Two, Nine]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    let hits = seen
        .iter()
        .filter(|event| matches!(event, Event::DealerHits { .. }))
        .count();
    assert_eq!(hits, 2);
    assert!(seen.contains(&Event::DealerStands { value: 17 }));
    assert_eq!(table.deck.remaining(), 1);
}

#[test]
fn dealer_stops_drawing_once_bust() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Eight, Ten, Six, King, Five]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert!(seen.contains(&Event::DealerBusts { value: 24 }));
    assert_eq!(table.deck.remaining(), 1);
    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 100.0)]);
}

#[test]
fn hitting_past_twenty_one_ends_the_turn() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Six, Seven, King]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Hit]);
    let seen = play(&mut table, &mut io, &mut events);

    assert!(seen.contains(&Event::Busted {
        player: "Ann".to_string(),
        hand: 0,
        value: 26,
    }));
    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 0.0)]);
    assert_eq!(table.players()[0].cash, 700.0);
}

#[test]
fn double_down_takes_one_card_on_twice_the_wager() {
    let (mut table, mut events) = stacked_table(50, &[Five, Ten, Six, Eight, Ten]);
    let mut io = ScriptedIo::new()
        .hands(&[1])
        .bets(&[50])
        .actions(&[DoubleDown]);
    let seen = play(&mut table, &mut io, &mut events);

    assert!(seen.iter().any(|event| matches!(
        event,
        Event::DoubledDown {
            wager: 100,
            value: 21,
            ..
        }
    )));
    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 200.0)]);
    assert_eq!(table.players()[0].cash, 850.0);
}

#[test]
fn double_down_after_a_hit_is_refused() {
    let (mut table, mut events) = stacked_table(50, &[Two, Ten, Three, Eight, Four]);
    let mut io = ScriptedIo::new()
        .hands(&[1])
        .bets(&[50])
        .actions(&[Hit, DoubleDown, Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert!(seen.contains(&Event::InputRejected {
        player: "Ann".to_string(),
        reason: Rejection::DoubleNotAllowed,
    }));
    assert!(io.actions.is_empty());
    assert_eq!(table.players()[0].cash, 700.0);
}

#[test]
fn invalid_bets_are_asked_again() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Nine, Nine]);
    let mut io = ScriptedIo::new()
        .hands(&[3, 1])
        .bets(&[20, 0, 800, 100])
        .actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    let reasons: Vec<Rejection> = seen
        .iter()
        .filter_map(|event| match event {
            Event::InputRejected { reason, .. } => Some(*reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            Rejection::TooManyHands,
            Rejection::NotStakeMultiple,
            Rejection::NotPositive,
            Rejection::InsufficientCash,
        ]
    );
    assert_eq!(settled(&seen), vec![("Ann".to_string(), 0, 100.0)]);
    assert_eq!(table.players()[0].cash, 750.0);
}

#[test]
fn two_hands_are_dealt_in_turn_and_trimmed_after() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Nine, Ten, King, Eight, Seven]);
    let mut io = ScriptedIo::new()
        .hands(&[2])
        .bets(&[50, 100])
        .actions(&[Stand, Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(
        settled(&seen),
        vec![("Ann".to_string(), 0, 100.0), ("Ann".to_string(), 1, 100.0)]
    );
    assert_eq!(table.players()[0].cash, 800.0);
    assert_eq!(table.players()[0].hands().len(), 1);
    assert_eq!(table.players()[0].hands()[0].history().len(), 1);
}

#[test]
fn everyone_sitting_out_ends_the_session_before_dealing() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Nine, Nine]);
    table.add_player("Bot", PlayerKind::Cpu, &mut events);
    let mut io = ScriptedIo::new().hands(&[0]);

    let outcome = table.play_round(&mut io, &mut events).expect("round");
    assert_eq!(outcome, RoundOutcome::SessionOver);
    assert!(table.is_finished());
    assert_eq!(table.deck.remaining(), 4);
    assert_eq!(table.players().len(), 1);
    assert_eq!(table.players()[0].cash, 750.0);

    let seen = io.all_events(&mut events);
    assert!(seen.contains(&Event::PlayerLeft {
        name: "Ann".to_string(),
        cash: 750.0,
    }));
    assert!(seen.contains(&Event::SessionEnded { rounds: 0 }));
    assert_eq!(
        table.step(&mut io, &mut events).expect("step"),
        RoundOutcome::SessionOver
    );
}

#[test]
fn a_table_without_humans_never_deals() {
    let mut table = Table::new(TableConfig::default(), 4).expect("table");
    let mut events = EventBus::default();
    table.add_player("Bot", PlayerKind::Cpu, &mut events);
    let mut io = ScriptedIo::new();

    let outcome = table.play_round(&mut io, &mut events).expect("round");
    assert_eq!(outcome, RoundOutcome::SessionOver);
    assert_eq!(io.questions, 0);
    assert_eq!(table.deck.remaining(), 104);
}

#[test]
fn cpus_bet_stake_or_double_and_stand() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Ten, Nine, Nine, Ten, Eight]);
    table.add_player("Bot", PlayerKind::Cpu, &mut events);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]).actions(&[Stand]);
    let seen = play(&mut table, &mut io, &mut events);

    assert_eq!(io.questions, 3);
    let cpu_bet = seen
        .iter()
        .find_map(|event| match event {
            Event::BetPlaced { player, amount, .. } if player == "Bot" => Some(*amount),
            _ => None,
        })
        .expect("cpu bet");
    assert!(cpu_bet == 50 || cpu_bet == 100, "{cpu_bet}");
    assert!(seen.contains(&Event::Stood {
        player: "Bot".to_string(),
        hand: 0,
        value: 20,
    }));
    assert_eq!(table.players()[1].cash, 750.0 + f64::from(cpu_bet));
}

#[test]
fn an_empty_deck_ends_the_round_with_an_error() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Nine, King]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]);

    let err = table.play_round(&mut io, &mut events).expect_err("empty deck");
    assert!(matches!(err, RoundError::Deck(DeckError::Empty)));
}

#[test]
fn play_round_needs_the_betting_phase() {
    let (mut table, mut events) = stacked_table(50, &[Ten, Nine, King, Nine]);
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[50]);
    table.step(&mut io, &mut events).expect("betting");
    assert_eq!(table.phase(), RoundPhase::Deal);

    let err = table.play_round(&mut io, &mut events).expect_err("wrong phase");
    assert!(matches!(err, RoundError::InvalidPhase(RoundPhase::Deal)));
}

#[test]
fn session_runs_until_the_last_human_leaves() {
    let (mut table, mut events) = stacked_table(
        50,
        &[Ten, Nine, King, Nine, Ten, Ten, Nine, Nine],
    );
    let mut io = ScriptedIo::new()
        .hands(&[1, 1, 0])
        .bets(&[50, 50])
        .actions(&[Stand, Stand]);

    let rounds = table.run_session(&mut io, &mut events).expect("session");
    assert_eq!(rounds, 2);
    assert!(table.players().is_empty());

    let seen = io.all_events(&mut events);
    assert!(seen.contains(&Event::PlayerLeft {
        name: "Ann".to_string(),
        cash: 800.0,
    }));
    assert!(seen.contains(&Event::SessionEnded { rounds: 2 }));
}

#[test]
fn broke_humans_are_removed() {
    let (mut table, mut events) = stacked_table(50, &[]);
    table.add_player("Bea", PlayerKind::Human, &mut events);
    if let Some(ann) = table.player_mut(0) {
        ann.cash = 20.0;
    }
    let mut io = ScriptedIo::new().hands(&[0]);

    let outcome = table.play_round(&mut io, &mut events).expect("round");
    assert_eq!(outcome, RoundOutcome::SessionOver);
    assert_eq!(io.questions, 1, "only Bea is asked");
    let seen = io.all_events(&mut events);
    assert!(seen.contains(&Event::PlayerBroke {
        name: "Ann".to_string(),
        cash: 20.0,
    }));
}

#[test]
fn drawn_cards_are_never_duplicated() {
    let config = TableConfig {
        packs: 1,
        ..TableConfig::default()
    };
    let mut table = Table::new(config, 99).expect("table");
    let mut events = EventBus::default();
    table.add_player("Ann", PlayerKind::Human, &mut events);
    for name in ["Bot", "Cy", "Dee"] {
        table.add_player(name, PlayerKind::Cpu, &mut events);
    }
    let mut io = ScriptedIo::new().hands(&[1]).bets(&[15]).actions(&[Stand]);
    for _ in 0..3 {
        table.step(&mut io, &mut events).expect("step");
    }
    assert_eq!(table.phase(), RoundPhase::DealerReveal);

    let mut held = Vec::new();
    for player in table.players() {
        for hand in player.hands() {
            held.extend(hand.cards().iter().map(|card| (card.suit, card.rank)));
        }
    }
    held.extend(table.dealer.hand.cards().iter().map(|card| (card.suit, card.rank)));
    let unique: HashSet<_> = held.iter().copied().collect();
    assert_eq!(held.len(), 10);
    assert_eq!(unique.len(), held.len());
    assert_eq!(table.deck.remaining(), 52 - held.len());
}
