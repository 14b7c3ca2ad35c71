//! Plain-text summary of a session
//!
//! The body a teacher receives (the caller decides the transport;
//! building a mailto URL is out of scope here).

use convtab_units::FAMILIES;

use crate::exercises::EXERCISES;
use crate::state::AppState;

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "—"
    } else {
        s
    }
}

/// Compose the text summary of the whole session.
pub fn compose_summary(state: &AppState) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Ressource : Tableaux de conversion".to_string());
    lines.push(String::new());
    lines.push(format!("Élève : {}", or_dash(&state.student.name)));
    lines.push(format!("Classe : {}", or_dash(&state.student.class)));
    lines.push(format!("Période : {}", or_dash(&state.student.period)));
    if !state.student.group.trim().is_empty() {
        lines.push(format!("Groupe/Atelier : {}", state.student.group));
    }
    lines.push(format!("Référentiel : {}", state.track.note().title));
    lines.push(String::new());

    let family = FAMILIES.family(state.converter.family);
    lines.push(format!("Convertisseur : {}", family.label));
    let filled: Vec<_> = state.converter.board.filled().collect();
    if !filled.is_empty() {
        lines.push("Derniers résultats convertisseur :".to_string());
        for (unit, text) in filled {
            lines.push(format!("- {unit} : {text}"));
        }
        lines.push(String::new());
    }

    let (score, max) = state.qcm_score();
    lines.push(format!("QCM : score {score}/{max}"));
    lines.push(String::new());

    lines.push(format!(
        "Exercices : réponses remplies {}/{}",
        state.exercises.answered_count(),
        EXERCISES.len()
    ));

    let comment = state.student.comment.trim();
    if !comment.is_empty() {
        lines.push(String::new());
        lines.push("Commentaire :".to_string());
        lines.push(comment.to_string());
    }

    lines.join("\n")
}
