//! Exploration state machine
//!
//! Moves the detective through the [`LocationMap`] one command at a time.
//! Every arrival collects the room's clue (when the variant collects clues)
//! and reports which suspect it points to. Recoverable mistakes, such as a
//! missing door or an unknown command, never change the state.

use super::clues::ClueIndex;
use super::map::{Branch, LocationMap, LocationNode};
use super::suspects::SuspectDirectory;
use super::Variant;

/// One player instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Branch),
    Quit,
    Unknown(String),
}

impl Command {
    /// Interpret a line of player input. Only the first word counts and
    /// case is ignored. Besides the Portuguese words and their initials
    /// (`e`/`esquerda`, `d`/`direita`, `s`/`sair`), the English forms
    /// `l`/`left`, `r`/`right` and `q`/`quit` are accepted too.
    pub fn parse(input: &str) -> Self {
        let word = input.split_whitespace().next().unwrap_or("");
        match word.to_lowercase().as_str() {
            "e" | "esquerda" | "l" | "left" => Command::Go(Branch::Left),
            "d" | "direita" | "r" | "right" => Command::Go(Branch::Right),
            "s" | "sair" | "q" | "quit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Something the player should be told
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Entered a room; the exits are the names of its children
    Arrived {
        location: String,
        left: Option<String>,
        right: Option<String>,
    },
    /// The room holds a clue. `first_time` is false on a revisit.
    ClueFound { clue: String, first_time: bool },
    /// Nothing to collect here
    NoClue,
    /// Which suspect the clue points to, if any
    SuspectLinked { clue: String, suspect: Option<String> },
    NoPath(Branch),
    InvalidCommand(String),
    /// A room with no exits ended a tour
    DeadEnd { location: String },
    /// The player chose to stop exploring
    Quit,
}

impl Notice {
    /// Recoverable mistakes leave the detective where they were
    pub fn is_mistake(&self) -> bool {
        matches!(self, Notice::NoPath(_) | Notice::InvalidCommand(_))
    }
}

/// Where the exploration stands
#[derive(Debug, Clone, Copy)]
pub enum State<'w> {
    AtLocation(&'w LocationNode),
    Exited,
}

/// Drives one exploration of a map
#[derive(Debug)]
pub struct ExplorationEngine<'w> {
    variant: Variant,
    directory: Option<&'w SuspectDirectory>,
    state: State<'w>,
    clues: ClueIndex,
    path: Vec<Branch>,
    opening: Vec<Notice>,
}

impl<'w> ExplorationEngine<'w> {
    /// Place the detective at the entry. The entry's notices are held until
    /// [`ExplorationEngine::take_opening`] collects them.
    pub fn new(map: &'w LocationMap, directory: &'w SuspectDirectory, variant: Variant) -> Self {
        let mut engine = Self {
            variant,
            directory: variant.resolves_suspects().then_some(directory),
            state: State::Exited,
            clues: ClueIndex::new(),
            path: Vec::new(),
            opening: Vec::new(),
        };
        let mut opening = Vec::new();
        engine.enter(map.entry(), &mut opening);
        engine.opening = opening;
        engine
    }

    /// Apply one command and return the notices it produced. Nothing queued
    /// before the command, including the entry's notices, is returned here.
    pub fn step(&mut self, command: Command) -> Vec<Notice> {
        let State::AtLocation(current) = self.state else {
            tracing::debug!(?command, "command ignored after exit");
            return Vec::new();
        };

        let mut out = Vec::new();
        match command {
            Command::Go(branch) => match current.child(branch) {
                Some(next) => {
                    tracing::debug!(from = current.name(), to = next.name(), %branch, "moving");
                    self.path.push(branch);
                    self.enter(next, &mut out);
                }
                None => out.push(Notice::NoPath(branch)),
            },
            Command::Quit => {
                tracing::debug!(at = current.name(), "exploration ended by player");
                self.state = State::Exited;
                out.push(Notice::Quit);
            }
            Command::Unknown(word) => out.push(Notice::InvalidCommand(word)),
        }
        out
    }

    /// Parse and apply a line of input
    pub fn step_input(&mut self, input: &str) -> Vec<Notice> {
        self.step(Command::parse(input))
    }

    /// The notices produced by arriving at the entry. Handed out once; later
    /// calls return nothing.
    pub fn take_opening(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.opening)
    }

    fn enter(&mut self, node: &'w LocationNode, out: &mut Vec<Notice>) {
        self.state = State::AtLocation(node);
        out.push(Notice::Arrived {
            location: node.name().to_string(),
            left: node.left().map(|n| n.name().to_string()),
            right: node.right().map(|n| n.name().to_string()),
        });

        if self.variant.collects_clues() {
            match node.clue() {
                Some(clue) => {
                    let first_time = self.clues.insert(clue);
                    if first_time {
                        tracing::info!(clue, location = node.name(), "new clue collected");
                    }
                    out.push(Notice::ClueFound {
                        clue: clue.to_string(),
                        first_time,
                    });
                    if let Some(directory) = self.directory {
                        out.push(Notice::SuspectLinked {
                            clue: clue.to_string(),
                            suspect: directory.lookup(clue).map(str::to_string),
                        });
                    }
                }
                None => out.push(Notice::NoClue),
            }
        }

        if self.variant.ends_at_dead_end() && node.is_dead_end() {
            tracing::debug!(at = node.name(), "tour reached a dead end");
            self.state = State::Exited;
            out.push(Notice::DeadEnd {
                location: node.name().to_string(),
            });
        }
    }

    pub fn state(&self) -> State<'w> {
        self.state
    }

    /// The room the detective stands in, until the exploration ends
    pub fn current(&self) -> Option<&'w LocationNode> {
        match self.state {
            State::AtLocation(node) => Some(node),
            State::Exited => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self.state, State::Exited)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Doors taken since the entry
    pub fn path(&self) -> &[Branch] {
        &self.path
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn into_clues(self) -> ClueIndex {
        self.clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WorldConfig;

    fn mansion() -> (LocationMap, SuspectDirectory) {
        let world = WorldConfig::mansion();
        (
            LocationMap::build(&world).unwrap(),
            SuspectDirectory::build(&world.suspects),
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("e"), Command::Go(Branch::Left));
        assert_eq!(Command::parse("  D  "), Command::Go(Branch::Right));
        assert_eq!(Command::parse("Sair agora"), Command::Quit);
        assert_eq!(Command::parse("left"), Command::Go(Branch::Left));
        assert_eq!(Command::parse("R"), Command::Go(Branch::Right));
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("Quit"), Command::Quit);
        assert_eq!(Command::parse("x"), Command::Unknown("x".to_string()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn entry_is_visited_on_start() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);

        let notices = engine.take_opening();
        assert_eq!(
            notices,
            vec![
                Notice::Arrived {
                    location: "Hall de Entrada".to_string(),
                    left: Some("Sala de Estar".to_string()),
                    right: Some("Cozinha".to_string()),
                },
                Notice::ClueFound {
                    clue: "Pegadas recentes próximas à porta.".to_string(),
                    first_time: true,
                },
                Notice::SuspectLinked {
                    clue: "Pegadas recentes próximas à porta.".to_string(),
                    suspect: Some("Sr. Black".to_string()),
                },
            ]
        );
        assert_eq!(engine.clues().len(), 1);
    }

    #[test]
    fn missing_door_keeps_position() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);
        engine.step(Command::Go(Branch::Left));
        engine.step(Command::Go(Branch::Left));
        assert_eq!(engine.current().unwrap().name(), "Biblioteca");

        let notices = engine.step(Command::Go(Branch::Right));
        assert_eq!(notices, vec![Notice::NoPath(Branch::Right)]);
        assert_eq!(engine.current().unwrap().name(), "Biblioteca");
        assert_eq!(engine.path(), &[Branch::Left, Branch::Left]);
    }

    #[test]
    fn invalid_command_keeps_position() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);
        let notices = engine.step_input("norte");
        assert_eq!(notices, vec![Notice::InvalidCommand("norte".to_string())]);
        assert_eq!(engine.current().unwrap().name(), "Hall de Entrada");
    }

    #[test]
    fn room_without_clue_reports_none() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);
        engine.step_input("e");
        let notices = engine.step_input("d");
        assert_eq!(notices[1], Notice::NoClue);
        assert_eq!(notices.len(), 2);
    }

    #[test]
    fn quit_is_terminal() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);
        assert_eq!(engine.step(Command::Quit), vec![Notice::Quit]);
        assert!(engine.is_exited());
        assert!(engine.step(Command::Go(Branch::Left)).is_empty());
        assert!(engine.current().is_none());
    }

    #[test]
    fn first_step_reports_only_its_own_notices() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);

        let notices = engine.step_input("d");
        assert_eq!(
            notices[0],
            Notice::Arrived {
                location: "Cozinha".to_string(),
                left: Some("Adega".to_string()),
                right: Some("Escritório Secreto".to_string()),
            }
        );
        assert!(!notices.iter().any(|n| matches!(n, Notice::Arrived { location, .. } if location == "Hall de Entrada")));

        // the entry's notices are still waiting, and only once
        assert_eq!(engine.take_opening().len(), 3);
        assert!(engine.take_opening().is_empty());
    }

    #[test]
    fn collector_skips_suspects() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Collector);
        let notices = engine.take_opening();
        assert_eq!(notices.len(), 2);
        assert!(!notices.iter().any(|n| matches!(n, Notice::SuspectLinked { .. })));
    }

    #[test]
    fn tour_ends_at_a_dead_end() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Tour);
        assert_eq!(engine.take_opening().len(), 1);

        engine.step_input("d");
        let notices = engine.step_input("e");
        assert_eq!(
            notices.last(),
            Some(&Notice::DeadEnd {
                location: "Adega".to_string()
            })
        );
        assert!(engine.is_exited());
        assert!(engine.clues().is_empty());
    }

    #[test]
    fn trial_does_not_stop_at_dead_ends() {
        let (map, directory) = mansion();
        let mut engine = ExplorationEngine::new(&map, &directory, Variant::Trial);
        engine.step_input("d");
        engine.step_input("e");
        assert!(!engine.is_exited());
        assert_eq!(engine.current().unwrap().name(), "Adega");
    }
}
