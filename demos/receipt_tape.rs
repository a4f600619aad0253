//! Receipt Tape
//!
//! This example applies a percent discount and then replays the session
//! from its tape, the way a desk calculator prints a paper receipt.
//!
//! Key concepts:
//! - The tape as an immutable log of every keypress
//! - Display snapshots recorded per press
//! - Session duration from tape timestamps
//! - Serializing a whole session with serde
//!
//! Run with: cargo run --example receipt_tape

use fourbanger::session::Calculator;

fn main() {
    println!("=== Receipt Tape ===\n");

    // A 20% discount on 250
    let mut calc = Calculator::new();
    calc.press_script("250 × 20 % =")
        .expect("script uses known glyphs");

    println!("Result: {}", calc.display());
    println!("Expression: {}\n", calc.expression());

    // Replay the session from the tape
    println!("Tape ({} presses):", calc.tape().len());
    for entry in calc.tape().entries() {
        println!("  [{}]  ->  {}", entry.key.glyph(), entry.display);
    }

    if let Some(duration) = calc.tape().duration() {
        println!("\nSession took {duration:?} from first press to last.");
    }

    // The whole session, tape included, serializes with serde
    let json = serde_json::to_string(&calc).expect("sessions serialize");
    println!("\nSerialized session: {} bytes of JSON", json.len());

    assert_eq!(calc.display(), "50");
    assert_eq!(calc.tape().len(), 8);

    println!("\nKey Characteristics:");
    println!("- Recording returns a new tape; nothing is mutated in place");
    println!("- Ignored presses are recorded too - the tape logs what was typed");
    println!("- The whole session serializes, tape included");

    println!("\n=== Example Complete ===");
}
