//! CLI table example.
//!
//! Set `RUST_LOG=bjtable=debug` to see the engine's trace output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    BetType, Card, EventKind, HandOutcome, Snapshot, SlotStatus, Suit, Table,
    TableOptions, TableState,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack table example (type 'help' for commands, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    print_table(&table.snapshot());

    loop {
        let prompt = match table.state() {
            TableState::PlayerTurn => {
                let slot = table.current_slot().unwrap_or_default();
                format!("{}\nSlot {slot} > ", format_actions(&table, slot))
            }
            _ => format!("Balance {} > ", table.balance()),
        };
        let line = prompt_line(&prompt);
        let words: Vec<&str> = line.split_whitespace().collect();

        let outcome = match words.as_slice() {
            ["q" | "quit"] => break,
            ["help"] => {
                print_help();
                Ok(())
            }
            ["bet", slot, kind, amount] => place_wager(&mut table, slot, kind, amount),
            ["clear"] => {
                let refunded = table.clear_wagers();
                println!("Refunded {refunded}.");
                Ok(())
            }
            ["rebet"] => table
                .rebet_previous()
                .map(|total| println!("Rebet {total}."))
                .map_err(|err| err.to_string()),
            ["deal"] => table.start_round().map_err(|err| err.to_string()),
            ["h" | "hit"] => with_turn(&table)
                .and_then(|slot| table.hit(slot).map(drop).map_err(|err| err.to_string())),
            ["s" | "stand"] => {
                with_turn(&table).and_then(|slot| table.stand(slot).map_err(|err| err.to_string()))
            }
            ["d" | "double"] => with_turn(&table).and_then(|slot| {
                table
                    .double_down(slot)
                    .map(drop)
                    .map_err(|err| err.to_string())
            }),
            ["reset"] => {
                table.reset_session();
                Ok(())
            }
            ["table"] => {
                print_table(&table.snapshot());
                Ok(())
            }
            [] => continue,
            _ => Err("unknown command".to_string()),
        };

        if let Err(err) = outcome {
            println!("{}", colorize(&format!("Error: {err}"), "31"));
            continue;
        }

        let events = table.take_events();
        for event in &events {
            print_event(event.kind);
        }
        if let Some(last) = events.last() {
            print_table(&last.snapshot);
            if last.kind == EventKind::RoundSettled {
                print_result(&last.snapshot);
            }
        }

        if table.state() == TableState::Betting
            && table.balance() == 0
            && table.slots().iter().all(|slot| slot.wagers().is_empty())
        {
            println!("You are out of money. Type 'reset' to start over.");
        }
    }

    println!("Goodbye.");
}

fn print_help() {
    println!("  bet <slot> <main|pp|21+3> <amount>  place a wager");
    println!("  clear                               refund pending wagers");
    println!("  rebet                               repeat last round's wagers doubled");
    println!("  deal                                start the round");
    println!("  h / s / d                           hit, stand, double down");
    println!("  table                               show the table");
    println!("  reset                               restore the starting balance");
    println!("  q                                   quit");
}

fn place_wager(table: &mut Table, slot: &str, kind: &str, amount: &str) -> Result<(), String> {
    let slot = slot
        .parse::<usize>()
        .map_err(|_| "slot must be a number".to_string())?;
    let amount = amount
        .parse::<usize>()
        .map_err(|_| "amount must be a number".to_string())?;
    let bet = match kind {
        "main" | "m" => BetType::Main,
        "pp" => BetType::PerfectPairs,
        "21+3" | "21" => BetType::TwentyOnePlusThree,
        _ => return Err("bet must be main, pp or 21+3".to_string()),
    };
    table
        .place_wager(slot, bet, amount)
        .map_err(|err| err.to_string())
}

fn with_turn(table: &Table) -> Result<usize, String> {
    table
        .current_slot()
        .ok_or_else(|| "no slot is waiting on a decision".to_string())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_event(kind: EventKind) {
    match kind {
        EventKind::RoundStarted => println!("-- New round --"),
        EventKind::SideBetsResolved { slot, payout } if payout > 0 => {
            println!("Slot {slot} side bets pay {payout}.");
        }
        EventKind::TurnChanged { slot: None } => println!("Dealer's turn."),
        EventKind::DealerRevealed => println!("Dealer reveals the hole card."),
        EventKind::DealerStood { score } => println!("Dealer stands on {score}."),
        EventKind::SessionReset => println!("Session reset."),
        _ => {}
    }
}

fn print_table(snapshot: &Snapshot) {
    println!();
    println!(
        "Dealer: {} (value {})",
        format_dealer(&snapshot.dealer.cards),
        snapshot.dealer.score
    );

    for slot in &snapshot.slots {
        let marker = if snapshot.turn == Some(slot.id) {
            "*"
        } else {
            " "
        };
        let cards = if slot.cards.is_empty() {
            "(empty)".to_string()
        } else {
            format_cards(&slot.cards)
        };
        println!(
            "{marker} Slot {}: {cards} | value {} | main {} pp {} 21+3 {} | {}",
            slot.id,
            slot.score,
            slot.wagers.main,
            slot.wagers.perfect_pairs,
            slot.wagers.twenty_one_plus_three,
            format_status(slot.status, slot.outcome),
        );
    }
    println!("Balance: {}", snapshot.balance);
    println!();
}

fn print_result(snapshot: &Snapshot) {
    let Some(result) = &snapshot.last_result else {
        return;
    };

    for slot in &result.slots {
        println!(
            "Slot {}: {:?}, payout {} (net {})",
            slot.slot,
            slot.outcome,
            slot.payout + slot.side_bets.total_payout(),
            slot.net()
        );
    }
    println!(
        "Round complete. Wagered {}, returned {} (net {}).",
        result.total_wagered,
        result.total_returned,
        result.net()
    );
}

fn format_status(status: SlotStatus, outcome: Option<HandOutcome>) -> String {
    match (status, outcome) {
        (SlotStatus::Betting, Some(outcome)) => {
            let code = match outcome {
                HandOutcome::Blackjack | HandOutcome::Win => "32",
                HandOutcome::Push => "33",
                HandOutcome::Lose => "31",
            };
            colorize(&format!("{outcome:?}"), code)
        }
        _ => format!("{status:?}"),
    }
}

fn format_actions(table: &Table, slot: usize) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", table.can_double(slot)),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(cards: &[Option<Card>]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}
