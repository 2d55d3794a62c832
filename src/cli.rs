//! Command-line arguments
//!
//! Picks the world file, the game variant and the front end.

use crate::game::Variant;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "detective")]
#[command(about = "Explore the mansion, collect clues and accuse the culprit")]
#[command(version)]
pub struct Args {
    /// World file (JSON) to play instead of the built-in mansion
    #[arg(short, long)]
    pub world: Option<PathBuf>,

    /// Which parts of the game are active
    #[arg(long, value_enum, default_value_t = Variant::Trial)]
    pub variant: Variant,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_trial_console() {
        let args = Args::try_parse_from(["detective"]).unwrap();
        assert_eq!(args.variant, Variant::Trial);
        assert!(!args.tui);
        assert!(args.world.is_none());
    }

    #[test]
    fn parses_variant_and_world() {
        let args =
            Args::try_parse_from(["detective", "--variant", "tour", "-w", "casa.json"]).unwrap();
        assert_eq!(args.variant, Variant::Tour);
        assert_eq!(args.world, Some(PathBuf::from("casa.json")));
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Args::try_parse_from(["detective", "--variant", "chase"]).is_err());
    }
}
