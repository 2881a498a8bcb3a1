//! Wordle Solver
//!
//! Feedback evaluation, candidate filtering, frequency and entropy scoring,
//! and a family of guess selectors (systematic scan, hill climbing,
//! simulated annealing, random, beam) driven by a solving session.
//!
//! # Quick Start
//!
//! ```rust
//! use wordly_solver::core::{Word, evaluate};
//!
//! let answer = Word::new("allow").unwrap();
//! let guess = Word::new("llama").unwrap();
//!
//! // L present, L correct, A present, M absent, A absent
//! assert_eq!(evaluate(&answer, &guess).to_string(), "12100");
//! ```
//!
//! Self-play against a known answer:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordly_solver::core::Word;
//! use wordly_solver::solver::{KnownAnswer, StrategyType, run_session};
//! use wordly_solver::wordlists::embedded_words;
//!
//! let pool = embedded_words();
//! let mut source = KnownAnswer::new(Word::new("crane").unwrap());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let result = run_session(&pool, StrategyType::from_name("hill-climbing"), 6, &mut source, &mut rng).unwrap();
//! assert!(result.attempts.len() <= 6);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
