//! Wordle Odds CLI
//!
//! Interactive game assistant and offline statistics precomputation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use wordle_odds::odds;
use wordle_odds::{Alphabet, Config, Dictionary, DictionaryWord, Game, Progress, Stats, Tile, Tip};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// Exit status for malformed input
const EXIT_INPUT: i32 = 2;
/// Exit status for I/O failures
const EXIT_IO: i32 = 1;

#[derive(Parser)]
#[clap(name = "wordle-odds", version, about)]
struct Args {
    /// Word list, one word per line [default: db.txt]
    #[clap(long)]
    words: Option<PathBuf>,

    /// Previously played solutions [default: used.txt]
    #[clap(long)]
    history: Option<PathBuf>,

    /// Statistics blob [default: luck.bin]
    #[clap(long)]
    stats: Option<PathBuf>,

    /// Guesses per game [default: 6]
    #[clap(long)]
    rounds: Option<usize>,

    /// Candidate count above which no suggestions are computed [default: 1000]
    #[clap(long)]
    threshold: Option<usize>,

    /// Number of suggestions to print [default: 20]
    #[clap(long)]
    suggestions: Option<usize>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Play a game interactively (default)
    Play,
    /// Evaluate every word against every word and write the statistics blob
    Precompute,
    /// Show the odds of a single opening guess
    Odds { word: String },
    /// List the best opening guesses from the statistics blob
    Top {
        #[clap(default_value = "10")]
        n: usize,
    },
}

impl Args {
    fn config(&self) -> Config {
        let default = Config::default();
        Config {
            words: self.words.clone().unwrap_or(default.words),
            history: self.history.clone().unwrap_or(default.history),
            stats: self.stats.clone().unwrap_or(default.stats),
            rounds: self.rounds.unwrap_or(default.rounds),
            threshold: self.threshold.unwrap_or(default.threshold),
            suggestions: self.suggestions.unwrap_or(default.suggestions),
        }
    }
}

/// Progress indicator on stderr for the long evaluations, with elapsed time.
struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

    fn start(message: impl Into<String>) -> Self {
        let message = message.into();
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();
        let handle = thread::spawn(move || {
            let started = Instant::now();
            let mut width = 0;
            for frame in Self::FRAMES.iter().cycle() {
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                let line = format!(
                    "{} {} {}s",
                    frame,
                    message,
                    started.elapsed().as_secs()
                );
                width = line.chars().count();
                eprint!("\r{}", line);
                io::stderr().flush().ok();
                thread::sleep(Duration::from_millis(100));
            }
            eprint!("\r{}\r", " ".repeat(width));
            io::stderr().flush().ok();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn finish(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn load_dictionary(alphabet: &Alphabet, config: &Config) -> Result<Dictionary> {
    Dictionary::load(alphabet, &config.words, &config.history).with_context(|| {
        format!(
            "loading words from {} and {} failed",
            config.words.display(),
            config.history.display()
        )
    })
}

fn load_stats(config: &Config) -> Result<Stats> {
    Stats::load(&config.stats)
        .with_context(|| format!("loading statistics from {} failed", config.stats.display()))
}

fn print_results(tips: &[Tip]) {
    println!("Game over");
    for tip in tips {
        println!("{}", tip);
    }
}

fn read_line<I>(lines: &mut I) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into()),
    }
}

fn run_interactive(config: &Config) -> Result<()> {
    println!("{}", BANNER_TEXT);

    let alphabet = Alphabet::czech();
    let dict = load_dictionary(alphabet, config)?;
    let stats = load_stats(config)?;
    let mut game = Game::new(alphabet, &dict, stats, config);

    let tips = Arc::new(Mutex::new(Vec::<Tip>::new()));
    let shared = tips.clone();
    ctrlc::set_handler(move || {
        println!();
        if let Ok(tips) = shared.lock() {
            print_results(&tips);
        }
        process::exit(0);
    })
    .context("installing the interrupt handler failed")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while !game.state().is_over() {
        println!("Guess #{}", game.round() + 1);
        println!("Word:");
        stdout.flush()?;
        let word = read_line(&mut lines)?;

        println!("Mark green(+), blue(*), orange(.) and grey( ):");
        stdout.flush()?;
        let row = read_line(&mut lines)?;
        let tiles = Tile::parse_row(&row)?;

        let mut round = game.guess(word.trim(), &tiles)?;
        if let Ok(mut shared) = tips.lock() {
            *shared = game.tips().to_vec();
        }
        game.suggest(&mut round);

        println!();
        println!("Feedback: {}", Tile::row_to_emoji(&tiles));
        println!("{} words left", round.left);
        println!();

        for w in round.suggestions.iter().take(config.suggestions) {
            let marker = if w.used { " *** " } else { "" };
            println!("{}{} {:.3}", w.text.to_uppercase(), marker, w.weight);
        }
        if !round.suggestions.is_empty() {
            println!();
        }
    }

    print_results(game.tips());
    Ok(())
}

fn run_precompute(config: &Config) -> Result<()> {
    let alphabet = Alphabet::czech();
    let dict = load_dictionary(alphabet, config)?;

    let spinner = Spinner::start(format!("Evaluating {} words against each other", dict.len()));
    let start = Instant::now();
    let stats = Stats::precompute(alphabet, &dict);
    let elapsed = start.elapsed();
    spinner.finish();

    stats
        .save(&config.stats)
        .with_context(|| format!("saving statistics to {} failed", config.stats.display()))?;

    println!("Evaluated {} words in {:.2?}", dict.len(), elapsed);
    print_top(&stats, config.suggestions);
    Ok(())
}

fn run_odds(config: &Config, word: &str) -> Result<()> {
    let alphabet = Alphabet::czech();
    let dict = load_dictionary(alphabet, config)?;
    let letters = alphabet.encode(word)?;

    let guess = match dict.lookup(&letters) {
        Some(found) => found.clone(),
        None => {
            warn!("{} is not in the dictionary", word);
            DictionaryWord {
                text: word.to_string(),
                letters,
                used: false,
            }
        }
    };
    let pool: Vec<&DictionaryWord> = dict.words().iter().collect();

    let spinner = Spinner::start(format!("Evaluating {}", guess.text));
    let result = odds::calculate_odds(&dict, &Progress::new(), &guess, &pool);
    spinner.finish();

    println!("{}", guess.text.to_uppercase());
    println!("  Average words left:        {:.3}", result.human);
    println!("  Average unused words left: {:.3}", result.robot);
    println!();

    let total = result.luck.sum.max(1.0);
    for (left, count) in &result.luck.histogram {
        let pct = *count as f64 / total * 100.0;
        let bar = "█".repeat(((*count as f64 * 40.0 / total) as usize).max(1));
        println!("  {:>5} left: {:>5} ({:>5.1}%) {}", left, count, pct, bar);
    }
    Ok(())
}

fn print_top(stats: &Stats, n: usize) {
    let mut ranked: Vec<_> = stats.robot.iter().collect();
    ranked.sort_by(|a, b| b.1.relative.cmp(&a.1.relative).then_with(|| a.0.cmp(b.0)));

    println!("{:>4} {:>8} {:>6} {:>10}", "#", "Word", "Skill", "Avg. left");
    println!("{}", "-".repeat(32));
    for (i, (word, skill)) in ranked.into_iter().take(n).enumerate() {
        let mean = stats
            .luck
            .get(word)
            .and_then(|l| l.mean())
            .map(|m| format!("{:>10.3}", m))
            .unwrap_or_else(|| format!("{:>10}", "?"));
        println!("{:>4} {:>8} {:>6} {}", i + 1, word.to_uppercase(), skill.relative, mean);
    }
}

fn run_top(config: &Config, n: usize) -> Result<()> {
    let stats = load_stats(config)?;
    print_top(&stats, n);
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<wordle_odds::Error>() {
        if err.is_input() {
            return EXIT_INPUT;
        }
    }
    if let Some(err) = err.downcast_ref::<io::Error>() {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return EXIT_INPUT;
        }
    }
    EXIT_IO
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    info!("{:?}", config);

    let result = match args.command.clone().unwrap_or(Command::Play) {
        Command::Play => run_interactive(&config),
        Command::Precompute => run_precompute(&config),
        Command::Odds { word } => run_odds(&config, &word),
        Command::Top { n } => run_top(&config, n),
    };

    if let Err(err) = result {
        eprintln!("{:#}", err);
        process::exit(exit_code(&err));
    }
}

