use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, Level};

use sentence::cache::{Identifiers, Policy, TokenCache};
use sentence::sentence::Sentence;

mod output;
mod problem;

use problem::Failure;

static CLASSIC: [&str; 9] = [
    "Today", "November", "21", "at", "13", "hours", "and", "21", "minutes",
];

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let items = Arg::new("items")
        .num_args(1..)
        .help("Words and numbers making up the sentence. Anything that reads as an integer from 0 to 65535 is a number. Defaults to a sample sentence.");

    let matches = Command::new("sentence")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Render sentences built from shared tokens, one line per position.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log cache and rendering activity to standard error."),
        )
        .subcommand(
            Command::new("render")
                .about("Render every position of the sentence")
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .value_parser(value_parser!(usize))
                        .help("Words longer than this many characters are given an identifier. [default: 5]"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .conflicts_with("sequential")
                        .help("Seed the identifier generator so output is repeatable."),
                )
                .arg(
                    Arg::new("sequential")
                        .long("sequential")
                        .action(ArgAction::SetTrue)
                        .help("Count identifiers upward from 1 instead of choosing them at random."),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .help("Template for each output line, with {position} and {text} available. [default: \"[{position}] {text}\"]"),
                )
                .arg(
                    Arg::new("again")
                        .long("again")
                        .action(ArgAction::SetTrue)
                        .help("Release the token cache and render the sentence a second time."),
                )
                .arg(items.clone()),
        )
        .subcommand(
            Command::new("locate")
                .about("Show which token owns the given position")
                .arg(
                    Arg::new("position")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("The absolute position to resolve."),
                )
                .arg(items),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("render", submatches)) => {
            let policy = match submatches.get_one::<usize>("threshold") {
                Some(threshold) => Policy {
                    threshold: *threshold,
                },
                None => Policy::default(),
            };
            let identifiers = if submatches.get_flag("sequential") {
                Identifiers::sequence(1)
            } else if let Some(seed) = submatches.get_one::<u64>("seed") {
                Identifiers::seeded(*seed)
            } else {
                Identifiers::random()
            };
            debug!(?policy, ?identifiers);

            let template = submatches
                .get_one::<String>("template")
                .map(String::as_str)
                .unwrap_or(output::DEFAULT_TEMPLATE);

            let mut cache = TokenCache::new(policy, identifiers);
            let sentence = build(&mut cache, submatches);

            if let Err(failure) = output::via_template(&sentence, template) {
                bail(&failure);
            }

            if submatches.get_flag("again") {
                drop(cache);
                info!("Token cache released");

                if let Err(failure) = output::via_template(&sentence, template) {
                    bail(&failure);
                }
            }
        }
        Some(("locate", submatches)) => {
            let position = *submatches
                .get_one::<usize>("position")
                .expect("position is a required argument");

            let mut cache = TokenCache::default();
            let sentence = build(&mut cache, submatches);

            match sentence.resolve(position) {
                Some((index, offset)) => {
                    let handle = &sentence.tokens()[index];
                    println!(
                        "Position {} is offset {} within token {}: {}",
                        position,
                        offset,
                        index,
                        handle.token()
                    );
                }
                None => bail(&Failure::Beyond {
                    position,
                    length: sentence.len(),
                }),
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: sentence [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Assemble the sentence from the supplied items, or the sample sentence if
/// none were given.
fn build(cache: &mut TokenCache, submatches: &ArgMatches) -> Sentence {
    let items: Vec<&str> = match submatches.get_many::<String>("items") {
        Some(values) => values
            .map(String::as_str)
            .collect(),
        None => CLASSIC.to_vec(),
    };

    let mut sentence = Sentence::new();
    for item in items {
        match item.parse::<u16>() {
            Ok(number) => sentence.add_number(cache, number),
            Err(_) => sentence.add_word(cache, item),
        };
    }
    sentence
}

fn bail(failure: &Failure) -> ! {
    debug!(?failure);
    eprintln!("{}", problem::full_details(failure));
    std::process::exit(1);
}
