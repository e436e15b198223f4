//! Chakadola - staged itinerary planner for Odisha tourism
//!
//! Chakadola turns a structured trip request into a multi-day itinerary by
//! passing a shared trip state through an ordered sequence of stages:
//! context derivation, place selection, knowledge retrieval, weather/cost
//! estimation, route planning and final assembly.
//!
//! # Core Concepts
//!
//! - **Fixed stage DAG**: context feeds everything; the weather/cost and
//!   route branches are independent and run concurrently
//! - **Degrade, Never Abort**: every external call has a fallback chain
//!   (service, fixture table, synthesis), so the pipeline terminates with a
//!   usable itinerary even when every collaborator is down
//! - **Injected Collaborators**: the text generator, knowledge store and
//!   embedder are constructed once and passed in; a failed initialization
//!   degrades that collaborator to "unavailable" rather than crashing
//!
//! # Modules
//!
//! - [`pipeline`] - Stage functions, typed state accumulator and entry point
//! - [`llm`] - Text-generation client trait, Gemini implementation, retry
//! - [`knowledge`] - Knowledge-store and embedder clients plus fixtures
//! - [`domain`] - Request, context, place, weather, cost and itinerary types
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod knowledge;
pub mod llm;
pub mod pipeline;
pub mod prompts;
