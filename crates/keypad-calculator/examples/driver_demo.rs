//! Driver Demo
//!
//! Presses the same keys through the bare engine and through the terminal
//! app, then runs the shared behavioural checks against both.
//!
//! Run with: cargo run -p keypad-calculator --example driver_demo

#![allow(clippy::unwrap_used)]

use keypad_calculator::driver::{
    run_full_suite, verify_basic_arithmetic, verify_chaining, verify_division_by_zero,
    verify_editing, verify_entry, verify_unary, CalculatorDriver, EngineDriver, TuiDriver,
};

fn show<D: CalculatorDriver>(name: &str, driver: &mut D, keys: &str) {
    driver.clear();
    driver.press_keys(keys).unwrap();
    println!(
        "   {name:<7} {keys:<22} preview {:>8}  display {:>8}",
        driver.preview(),
        driver.display()
    );
}

fn run_checks<D: CalculatorDriver>(name: &str, driver: &mut D) {
    let checks: [(&str, fn(&mut D)); 6] = [
        ("verify_entry", verify_entry),
        ("verify_basic_arithmetic", verify_basic_arithmetic),
        ("verify_chaining", verify_chaining),
        ("verify_division_by_zero", verify_division_by_zero),
        ("verify_editing", verify_editing),
        ("verify_unary", verify_unary),
    ];
    for (check, run) in checks {
        print!("  ✓ {check} ({name}) ... ");
        run(driver);
        println!("PASSED");
    }
}

fn main() {
    println!("Keypad Calculator - driver demo");
    println!();

    let mut engine = EngineDriver::new();
    let mut tui = TuiDriver::new();

    for keys in ["2 + 3 × 4 =", "5 ÷ 0 =", "8 × 5 % =", "1 2 3 ⌫ ±"] {
        show("engine", &mut engine, keys);
        show("tui", &mut tui, keys);
    }
    println!();

    run_checks("engine", &mut engine);
    run_checks("tui", &mut tui);

    print!("  Running run_full_suite() on both ... ");
    run_full_suite(&mut EngineDriver::new());
    run_full_suite(&mut TuiDriver::new());
    println!("PASSED");
}
