use std::env;
use tracing_subscriber::EnvFilter;
use word_chains::{find_longest_word_chains, Chain, Rule};

const EXAMPLE_WORDS: [&str; 5] = ["apple", "ple", "Oapple", "bapple", "capple"];

/// Prints the longest word chains for one or both rules.
///
/// Usage: cargo run --example main [substring|char_subset|both] [words...]
///
/// Without words, the built-in example vocabulary is used. Set RUST_LOG=debug
/// to see the builder's progress.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);

    let rules: Vec<Rule> = match args.next().as_deref() {
        None | Some("both") => Rule::ALL.to_vec(),
        Some(name) => match name.parse() {
            Ok(rule) => vec![rule],
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    let mut words: Vec<String> = args.collect();
    if words.is_empty() {
        words = EXAMPLE_WORDS.iter().map(|w| w.to_string()).collect();
    }

    for rule in rules {
        let chains = find_longest_word_chains(&words, rule);
        print_chains(&chains, rule);
    }
}

fn print_chains(chains: &[Chain], rule: Rule) {
    println!("Chains using '{rule}' rule:");
    if chains.is_empty() {
        println!("No chains were found.");
    } else {
        for chain in chains {
            println!("{chain}");
        }
    }
    println!();
}
