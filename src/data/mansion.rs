//! The canonical mansion

use super::{ClueLink, LocationSpec, WorldConfig};

pub const ENTRY_HALL: &str = "Hall de Entrada";

pub fn world() -> WorldConfig {
    WorldConfig {
        title: "Detective Quest: O Julgamento Final".to_string(),
        entry: ENTRY_HALL.to_string(),
        locations: vec![
            LocationSpec::new(ENTRY_HALL)
                .clue("Pegadas recentes próximas à porta.")
                .left("Sala de Estar")
                .right("Cozinha"),
            LocationSpec::new("Sala de Estar")
                .clue("Um copo quebrado sobre a mesa.")
                .left("Biblioteca")
                .right("Jardim"),
            LocationSpec::new("Cozinha")
                .clue("Uma luva ensanguentada caída no chão.")
                .left("Adega")
                .right("Escritório Secreto"),
            LocationSpec::new("Biblioteca")
                .clue("Um livro antigo aberto com uma anotação suspeita."),
            LocationSpec::new("Jardim"),
            LocationSpec::new("Adega").clue("Uma garrafa com impressão digital."),
            LocationSpec::new("Escritório Secreto")
                .clue("Um documento que revela a identidade do culpado!"),
        ],
        suspects: vec![
            ClueLink::new("Pegadas recentes próximas à porta.", "Sr. Black"),
            ClueLink::new("Um copo quebrado sobre a mesa.", "Sra. White"),
            ClueLink::new("Uma luva ensanguentada caída no chão.", "Coronel Mustard"),
            ClueLink::new("Um livro antigo aberto com uma anotação suspeita.", "Prof. Plum"),
            ClueLink::new("Uma garrafa com impressão digital.", "Coronel Mustard"),
            ClueLink::new("Um documento que revela a identidade do culpado!", "Sr. Black"),
        ],
    }
}
