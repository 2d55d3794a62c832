//! Player-facing text
//!
//! Turns engine notices, clue listings and verdicts into the lines the
//! front ends print. No game logic lives here.

use super::clues::ClueIndex;
use super::exploration::Notice;
use super::map::{Branch, LocationNode};
use super::verdict::{Outcome, Verdict};
use super::{GameMessage, Tone};

pub const ACCUSATION_HEADER: &str = "===== JULGAMENTO FINAL =====";
pub const ACCUSATION_PROMPT: &str = "Com base nas pistas, quem você acredita ser o culpado?";
pub const CLUES_HEADER: &str = "===== PISTAS COLETADAS =====";
pub const RESULT_HEADER: &str = "===== RESULTADO =====";
pub const FAREWELL: &str = "Obrigado por jogar Detective Quest!";

/// Opening lines of a run
pub fn banner(title: &str, entry: &str) -> Vec<String> {
    vec![
        format!("=== {} ===", title),
        "Bem-vindo(a), detetive! Explore a mansão, colete pistas e acuse o verdadeiro culpado."
            .to_string(),
        format!("Você começa em: {}.", entry),
    ]
}

/// Text for a single notice
pub fn describe(notice: &Notice) -> String {
    match notice {
        Notice::Arrived { location, .. } => format!("Você está em: {}", location),
        Notice::ClueFound { clue, first_time: true } => format!("🔎 Pista encontrada: \"{}\"", clue),
        Notice::ClueFound { clue, first_time: false } => {
            format!("🔎 Pista já registrada: \"{}\"", clue)
        }
        Notice::NoClue => "Nenhuma pista encontrada aqui.".to_string(),
        Notice::SuspectLinked { suspect: Some(suspect), .. } => {
            format!("Esta pista parece apontar para: {}", suspect)
        }
        Notice::SuspectLinked { suspect: None, .. } => {
            "Esta pista não aponta para ninguém conhecido.".to_string()
        }
        Notice::NoPath(Branch::Left) => "Não há caminho à esquerda!".to_string(),
        Notice::NoPath(Branch::Right) => "Não há caminho à direita!".to_string(),
        Notice::InvalidCommand(_) => "Opção inválida! Escolha novamente.".to_string(),
        Notice::DeadEnd { location } => {
            format!("{} não tem outras saídas. Fim do caminho.", location)
        }
        Notice::Quit => "Você decidiu encerrar a exploração.".to_string(),
    }
}

pub fn tone(notice: &Notice) -> Tone {
    if notice.is_mistake() {
        return Tone::Warning;
    }
    match notice {
        Notice::ClueFound { .. } | Notice::SuspectLinked { .. } => Tone::Discovery,
        _ => Tone::Info,
    }
}

impl From<&Notice> for GameMessage {
    fn from(notice: &Notice) -> Self {
        GameMessage::new(tone(notice), &describe(notice))
    }
}

/// The menu shown while standing in `node`
pub fn choices(node: &LocationNode) -> Vec<String> {
    let mut lines = vec!["Escolha seu próximo destino:".to_string()];
    if let Some(left) = node.left() {
        lines.push(format!("  (e) Ir para {}", left.name()));
    }
    if let Some(right) = node.right() {
        lines.push(format!("  (d) Ir para {}", right.name()));
    }
    lines.push("  (s) Sair da exploração".to_string());
    lines
}

/// Collected clues in alphabetical order
pub fn clue_listing(clues: &ClueIndex) -> Vec<String> {
    if clues.is_empty() {
        return vec!["Nenhuma pista foi coletada.".to_string()];
    }
    clues.iter().map(|clue| format!("🕵️  {}", clue)).collect()
}

pub fn verdict_line(verdict: &Verdict) -> String {
    match verdict.outcome {
        Outcome::Confirmed => format!(
            "✅ Acusação consistente! {} foi considerado CULPADO com {} pistas.",
            verdict.accused, verdict.count
        ),
        Outcome::Rejected => format!(
            "❌ Acusação inconsistente. Apenas {} pista(s) apontam para {}.",
            verdict.count, verdict.accused
        ),
    }
}

impl From<&Verdict> for GameMessage {
    fn from(verdict: &Verdict) -> Self {
        let tone = if verdict.is_confirmed() { Tone::Success } else { Tone::Failure };
        GameMessage::new(tone, &verdict_line(verdict))
    }
}
