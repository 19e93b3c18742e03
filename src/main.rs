//! Wordle Assist CLI
//!
//! Interactive assistant plus the offline opening-guess benchmark.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use wordle_assist::benchmark::{self, OPENING_GUESSES, REPORT_COUNT, WORKER_COUNT};
use wordle_assist::{suggest, CandidateStore, Feedback, Wordlist};

const USAGE: &str = "\
wordle-assist                 interactive assistant (bundled answer list)
wordle-assist assist [PATH]   interactive assistant over a word-list file
wordle-assist benchmark [PATH]  rank the opening guesses over all answers
wordle-assist --help          this text

Interactive commands:
  <guess> <pattern>   apply a round of feedback, e.g. `crane gybbb`
                      (g/2 = green, y/1 = yellow, b/x/0 = gray)
  suggest             letter-frequency summary for the next guess
  remaining           list the candidates still in play
  quit                exit
";

fn load_words(path: Option<&str>) -> Result<Wordlist> {
    match path {
        Some(p) => {
            Wordlist::load(p, false).with_context(|| format!("failed to load word list {p}"))
        }
        None => Ok(Wordlist::bundled()),
    }
}

fn print_suggestion(store: &CandidateStore, guess_number: usize) {
    let s = suggest(store, guess_number);

    if let Some(word) = s.opener {
        println!("Try '{word}'");
    }
    for masked in &s.masked_words {
        println!("{masked}");
    }
    if !s.frequencies.is_empty() {
        let table: Vec<String> = s
            .frequencies
            .iter()
            .map(|(c, n)| format!("{c}: {n}"))
            .collect();
        println!("{}", table.join(", "));
    }
}

fn run_assist(words: Wordlist) -> Result<()> {
    println!("Loaded {} words.", words.len());
    println!("Enter `<guess> <pattern>` per round, `help` for commands.");

    let mut store = CandidateStore::new(&words);
    let mut guess_number = 0usize;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["help" | "h" | "?"] => println!("{USAGE}"),
            ["quit" | "exit" | "q"] => break,
            ["suggest" | "s"] => print_suggestion(&store, guess_number),
            ["remaining" | "r"] => {
                for word in store.candidates() {
                    println!("{word}");
                }
            }
            [guess, pattern] => {
                let Some(feedback) = Feedback::from_pattern(&guess.to_lowercase(), pattern) else {
                    println!("Bad input; expected e.g. `crane gybbb`.");
                    continue;
                };

                store.refine(&feedback);
                guess_number += 1;

                print_suggestion(&store, guess_number);
                for word in store.candidates() {
                    println!("{word}");
                }

                if feedback.solved() {
                    println!("Solved!");
                    break;
                }
                if store.remaining_count() == 0 {
                    println!("No candidates left; the feedback rounds contradict each other.");
                    break;
                }
            }
            _ => println!("Unknown command; `help` lists the options."),
        }
    }

    Ok(())
}

fn run_benchmark(words: Wordlist) -> Result<()> {
    println!(
        "Benchmarking {} openers over {} answers...",
        OPENING_GUESSES.len(),
        words.len()
    );

    let mut stats = benchmark::benchmark_openers(&OPENING_GUESSES, &words, WORKER_COUNT)
        .context("failed to start the benchmarking pool")?;
    benchmark::sort_by_average(&mut stats);

    println!("Best:");
    for stat in stats.iter().take(REPORT_COUNT) {
        println!("{stat}");
    }

    println!();
    println!("Worst:");
    let skip = stats.len().saturating_sub(REPORT_COUNT);
    for stat in stats.iter().skip(skip) {
        println!("{stat}");
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run_assist(Wordlist::bundled()),
        Some("--help" | "-h") => {
            println!("{USAGE}");
            Ok(())
        }
        Some("assist") => run_assist(load_words(args.get(2).map(String::as_str))?),
        Some("benchmark" | "bench") => run_benchmark(load_words(args.get(2).map(String::as_str))?),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("{USAGE}");
            std::process::exit(1)
        }
    }
}
