//! Interactive game mode
//!
//! Human vs computer Word Train over stdin. With more than two players the
//! computer fills every seat but one. The computer asks the solver for its
//! move; the game state itself is a pure value so it can be tested without a
//! terminal.

use crate::core::{Lexicon, Trie};
use crate::solver::{GameQuery, SolveError, Solver};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "You"),
            Self::Computer => write!(f, "Computer"),
        }
    }
}

/// What happened after a letter was placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The word is still a valid prefix; the next seat moves
    Continue,
    /// `winner` completed a counting word
    Completed { word: String, winner: Player },
    /// `loser` chose a letter that leads to no word
    DeadEnd {
        attempted: String,
        loser: Player,
        example: Option<String>,
    },
}

/// State of a game in progress
///
/// Seats move in order, one letter each. The human holds one seat, the
/// computer all others.
pub struct GameState<'a> {
    trie: &'a Trie,
    word: String,
    turn: usize,
    human_seat: usize,
    num_players: usize,
    min_word_length: usize,
}

impl<'a> GameState<'a> {
    /// Start an empty game; `first` takes seat 0
    ///
    /// A player count of zero is treated as one.
    #[must_use]
    pub fn new(
        trie: &'a Trie,
        first: Player,
        num_players: usize,
        min_word_length: usize,
    ) -> Self {
        let num_players = num_players.max(1);
        let human_seat = match first {
            Player::Computer if num_players > 1 => 1,
            _ => 0,
        };
        Self {
            trie,
            word: String::new(),
            turn: 0,
            human_seat,
            num_players,
            min_word_length,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn to_move(&self) -> Player {
        if self.turn % self.num_players == self.human_seat {
            Player::Human
        } else {
            Player::Computer
        }
    }

    /// Place `letter` for the player whose turn it is
    pub fn play(&mut self, letter: char) -> MoveResult {
        let mut attempted = self.word.clone();
        attempted.push(letter);

        let Some(node) = self.trie.get_prefix_node(&attempted) else {
            return MoveResult::DeadEnd {
                example: self.example_word(),
                attempted,
                loser: self.to_move(),
            };
        };

        self.word = attempted;
        if node.terminates_word() && self.word.chars().count() >= self.min_word_length {
            return MoveResult::Completed {
                word: self.word.clone(),
                winner: self.to_move(),
            };
        }

        self.turn += 1;
        MoveResult::Continue
    }

    /// A counting word that extends the current word, if any
    fn example_word(&self) -> Option<String> {
        self.trie
            .get_all_words(&self.word, self.min_word_length)
            .into_iter()
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }
}

/// Pick the computer's next letter
///
/// Prefers a certain win, then a possible win, then any valid continuation.
/// At the very start, or with no valid continuation, any alphabet letter.
///
/// # Errors
///
/// Returns an error if the solver rejects the query or the lexicon cannot load.
pub fn choose_letter<R: Rng + ?Sized>(
    solver: &Solver<'_>,
    word: &str,
    num_players: usize,
    min_word_length: usize,
    rng: &mut R,
) -> Result<Option<char>, SolveError> {
    let alphabet: Vec<char> = solver.lexicon().characters()?.into_iter().collect();
    if word.is_empty() {
        return Ok(alphabet.choose(rng).copied());
    }

    let query = GameQuery::new(word)
        .with_players(num_players)
        .with_min_word_length(min_word_length);
    let solution = solver.solve(&query)?;

    let continuations = solver
        .lexicon()
        .trie()?
        .get_prefix_node(word)
        .map(|node| node.letters())
        .unwrap_or_default();

    let letter = [
        solution.certain_win_letters(),
        solution.possible_win_letters(),
        continuations.as_slice(),
        alphabet.as_slice(),
    ]
    .into_iter()
    .find(|letters| !letters.is_empty())
    .and_then(|letters| letters.choose(rng).copied());

    debug!(word, ?letter, "computer move");
    Ok(letter)
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if `num_players` is zero, if there's an I/O error reading
/// user input, or if the lexicon cannot be loaded.
pub fn run_play(
    lexicon: &Lexicon,
    num_players: usize,
    min_word_length: usize,
    human_first: bool,
) -> Result<()> {
    anyhow::ensure!(num_players >= 1, "need at least one player");

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Train - Interactive                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Take turns adding one letter. Complete a word of {min_word_length}+ letters to win;");
    println!("add a letter that leads to no word and you lose.");
    if num_players > 2 {
        println!("{num_players} players: you against {} computer seats.", num_players - 1);
    }
    println!("Commands: 'quit' to exit\n");

    let solver = Solver::new(lexicon);
    let trie = lexicon.trie()?;
    let mut rng = rand::rng();
    let mut first = if human_first {
        Player::Human
    } else {
        Player::Computer
    };

    loop {
        let mut state = GameState::new(trie, first, num_players, min_word_length);

        let result = loop {
            let letter = match state.to_move() {
                Player::Human => {
                    println!("Current word: {}", display_word(state.word()));
                    let input = get_user_input("Choose a letter")?.to_lowercase();
                    if matches!(input.as_str(), "quit" | "q" | "exit") {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    let mut chars = input.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) => letter,
                        _ => {
                            println!("❌ Enter exactly one letter\n");
                            continue;
                        }
                    }
                }
                Player::Computer => {
                    println!("Choosing a letter ...");
                    let word = state.word();
                    match choose_letter(&solver, word, num_players, min_word_length, &mut rng)? {
                        Some(letter) => {
                            println!("Computer plays '{}'\n", letter.to_string().bright_cyan());
                            letter
                        }
                        None => anyhow::bail!("lexicon has no letters to play"),
                    }
                }
            };

            match state.play(letter) {
                MoveResult::Continue => {}
                finished => break finished,
            }
        };

        print_result(&result);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                first = first.other();
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_result(result: &MoveResult) {
    match result {
        MoveResult::Completed { word, winner } => {
            println!("\nFinal word: {}", display_word(word));
            match winner {
                Player::Human => println!("{}", "🎉 You win!".green().bold()),
                Player::Computer => println!("{}", "I got there first! You lose".red().bold()),
            }
        }
        MoveResult::DeadEnd {
            attempted,
            loser,
            example,
        } => {
            println!("\n{attempted} does not lead to a valid word");
            match loser {
                Player::Human => println!("{}", "You lose".red().bold()),
                Player::Computer => println!("{}", "🎉 I'm stuck, you win!".green().bold()),
            }
            if let Some(example) = example {
                println!("I was thinking {}", example.bright_yellow());
            }
        }
        MoveResult::Continue => {}
    }
    println!();
}

fn display_word(word: &str) -> String {
    if word.is_empty() {
        "(empty)".bright_black().to_string()
    } else {
        word.to_uppercase().bright_white().bold().to_string()
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
