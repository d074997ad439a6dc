//! Core library for the prompting playground
//!
//! This crate implements the **Functional Core** of the playground, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`playground_core`** (this crate): Pure transformation functions with zero I/O
//! - **`playground`**: Completion-service calls, CLI and HTTP form (the Imperative Shell)
//!
//! A playground run is two model calls. The first asks the model to pick a
//! prompting technique for the user's prompt and to rewrite the prompt with it;
//! the second answers the rewritten prompt. Everything here is what happens
//! around those calls: building the requests, reading the replies, and turning
//! the results into something to show.
//!
//! # Module Organization
//!
//! - [`technique`]: Technique labels, instruction texts and reply parsing
//! - [`chat`]: Chat-completion wire types and request builders
//! - [`pipeline`]: Run results, empty-prompt placeholders and display formatting
//! - [`page`]: HTML rendering of the form UI
//!
//! # Example Usage
//!
//! ```rust
//! use playground_core::technique::parse_selection;
//!
//! let reply = "TECHNIQUE: Chain-of-Thought\nTRANSFORMED_PROMPT: Let's think step by step.";
//! let selection = parse_selection(reply, "What is 2x + 3 if x + 5 = 12?");
//!
//! assert_eq!(selection.technique, "Chain-of-Thought");
//! assert_eq!(selection.transformed_prompt, "Let's think step by step.");
//! ```

pub mod chat;
pub mod page;
pub mod pipeline;
pub mod technique;
