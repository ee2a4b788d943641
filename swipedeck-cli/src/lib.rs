//! # SwipeDeck CLI
//!
//! Command-line driver for the card-stack engine.
//!
//! ## Usage
//!
//! ```bash
//! swipedeck layout --width 1920 --height 1080
//! swipedeck simulate --cards projects.json --swipes right,left,right
//! swipedeck render --cards projects.json --width 390 --height 844
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `load_config` / `load_cards` - JSON inputs, paths from flags or env
//! - `session` - Scripted swipe sessions against a `StackController`
//!
//! Output is JSON on stdout; logs go to stderr.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod session;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use swipedeck_core::{
    cards_from_json, select_layout, Card, DeckView, Orientation, Size,
    StackController, SwipeDeckConfig, SwipeDirection,
};

pub use session::{SessionReport, SwipeSession};

/// Command-line arguments for swipedeck.
#[derive(Debug, Clone, Parser)]
#[command(name = "swipedeck")]
#[command(about = "Swipeable card-stack engine driver")]
#[command(version)]
pub struct CliArgs {
    /// JSON engine config (stack and layout tuning)
    #[arg(long, global = true, env = "SWIPEDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the card layout for a viewport
    Layout {
        /// Viewport width in pixels
        #[arg(long)]
        width: f32,
        /// Viewport height in pixels
        #[arg(long)]
        height: f32,
        /// Orientation currently shown (enables hysteresis)
        #[arg(long)]
        current: Option<Orientation>,
    },

    /// Replay a list of swipes against a card collection
    Simulate {
        /// JSON array of cards
        #[arg(long, env = "SWIPEDECK_CARDS")]
        cards: PathBuf,
        /// Comma-separated directions (left/right)
        #[arg(long, value_delimiter = ',')]
        swipes: Vec<SwipeDirection>,
        /// Let the session own exclusions instead of the stack
        #[arg(long)]
        external: bool,
        /// View to open after the swipes are replayed
        #[arg(long, default_value = "all")]
        then_view: DeckView,
    },

    /// Print the render model for the initial stack
    Render {
        /// JSON array of cards
        #[arg(long, env = "SWIPEDECK_CARDS")]
        cards: PathBuf,
        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,
        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f32,
    },
}

/// Load cards from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cards(path: &Path) -> anyhow::Result<Vec<Card>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cards from {}", path.display()))?;
    let cards = cards_from_json(&json)
        .with_context(|| format!("Failed to parse cards in {}", path.display()))?;
    tracing::debug!(count = cards.len(), path = %path.display(), "cards loaded");
    Ok(cards)
}

/// Load the engine config, or defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SwipeDeckConfig> {
    let Some(path) = path else {
        return Ok(SwipeDeckConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = SwipeDeckConfig::from_json(&json)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Run a parsed command and return its JSON output.
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded or output cannot be encoded.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;

    let value = match &args.command {
        Command::Layout {
            width,
            height,
            current,
        } => {
            let decision = select_layout(Size::new(*width, *height), *current, &config.layout);
            tracing::info!(
                orientation = %decision.orientation,
                scale = decision.scale_factor,
                "layout selected"
            );
            serde_json::to_value(decision)?
        }
        Command::Simulate {
            cards,
            swipes,
            external,
            then_view,
        } => {
            let cards = load_cards(cards)?;
            let mut session = SwipeSession::new(cards, config, *external)?;
            session.replay(swipes);
            session.open_view(*then_view)?;
            serde_json::to_value(session.report())?
        }
        Command::Render {
            cards,
            width,
            height,
        } => {
            let cards = load_cards(cards)?;
            let mut stack = StackController::with_config(cards, config.stack, config.layout)
                .context("Failed to build card stack")?;
            stack.resize(*width, *height);
            serde_json::to_value(stack.render_model())?
        }
    };

    let output = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(output)
}
