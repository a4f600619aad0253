//! Keypad Session
//!
//! This example drives a calculator session key by key and prints the two
//! display lines after every press.
//!
//! Key concepts:
//! - Decoding a glyph script into typed keys
//! - The display/expression pair a host renders
//! - Chained operations resolving left to right
//! - Total transitions (division by zero displays 0)
//!
//! Run with: cargo run --example keypad_session

use fourbanger::input::parse_keys;
use fourbanger::session::Calculator;

fn main() {
    println!("=== Keypad Session ===\n");

    // Decode the script once, then press key by key
    let script = "2 + 3 × 4 =";
    let keys = parse_keys(script).expect("script uses known glyphs");

    let mut calc = Calculator::new();
    println!("Pressing: {script}\n");

    for key in keys {
        calc.press(key);
        println!(
            "  [{}]  display: {:<8}  expression: {}",
            key.glyph(),
            calc.display(),
            calc.expression()
        );
    }

    assert_eq!(calc.display(), "20");
    assert_eq!(calc.expression(), "5 × 4 = 20");

    println!("\nChained operations resolve left to right: the pending 2 + 3");
    println!("collapses to 5 the moment × arrives, then 5 × 4 = 20 on equals.\n");

    // Division by zero is total - the session keeps going
    calc.press_script("C 8 ÷ 0 =").expect("script uses known glyphs");
    println!("After C 8 ÷ 0 =:");
    println!("  display: {}", calc.display());
    println!("  expression: {}", calc.expression());

    println!("\nKey Characteristics:");
    println!("- One typed Key per keypad control, dispatched exhaustively");
    println!("- Every transition is synchronous and total");
    println!("- The expression line is rendered from tokens, never edited as text");

    println!("\n=== Example Complete ===");
}
