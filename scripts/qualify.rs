#!/usr/bin/env rust-script
//! Runs the checks that must pass before a release of fanout_log.
//!
//! ```cargo
//! [dependencies]
//! yansi = "0.5"
//! ```
extern crate yansi;

const STEPS: &[&str] = &[
    "cargo fmt --check",
    "cargo +1.85.0 test --all-features",
    "cargo test --no-default-features",
    "cargo test --features configfile --no-default-features",
    "cargo clippy --all-targets --all-features -- -D warnings",
    "cargo +nightly bench",
    "cargo doc --all-features --no-deps",
    "cargo script ./scripts/cleanup.rs",
];

fn main() {
    for step in STEPS {
        println!("\n> {}", yansi::Paint::yellow(step));
        let mut words = step.split(' ');
        let program = words.next().unwrap();
        let ok = std::process::Command::new(program)
            .args(words)
            .status()
            .map_or(false, |status| status.success());
        if !ok {
            println!("> {}", yansi::Paint::red(format!("failed: {step}")));
            std::process::exit(1);
        }
    }
    println!("\n> fanout_log qualifies for a release");
}
