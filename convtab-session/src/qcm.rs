//! The static QCM bank and its scoring
//!
//! Twenty multiple-choice questions. Scoring counts exact matches of
//! the recorded choice index against the expected one.

use std::collections::BTreeMap;

/// One multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QcmQuestion {
    pub id: &'static str,
    pub category: &'static str,
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    /// Index of the expected choice.
    pub answer: usize,
    pub explain: &'static str,
}

const fn q(
    id: &'static str,
    category: &'static str,
    prompt: &'static str,
    choices: [&'static str; 4],
    answer: usize,
    explain: &'static str,
) -> QcmQuestion {
    QcmQuestion { id, category, prompt, choices, answer, explain }
}

pub static QCM: [QcmQuestion; 20] = [
    q("Q01", "SI", "Dans un tableau de longueurs, un déplacement d'une colonne vers la droite correspond à :",
        ["×10", "×100", "×60", "×1000"], 0, "Longueurs : facteur 10 entre colonnes."),
    q("Q02", "SI", "1 L correspond à :",
        ["1 cm³", "1 dm³", "1 m³", "10 dm³"], 1, "1 L = 1 dm³."),
    q("Q03", "Aires", "Pour les aires (m², cm²...), entre deux colonnes successives on multiplie par :",
        ["10", "100", "1000", "60"], 1, "Aires : facteur 100 par colonne."),
    q("Q04", "Volumes", "1 m³ correspond à :",
        ["100 L", "1000 L", "10 L", "1 L"], 1, "1 m³ = 1000 L."),
    q("Q05", "Temps", "1 h correspond à :",
        ["10 min", "100 min", "60 min", "30 min"], 2, "Temps : 1 h = 60 min."),
    q("Q06", "Électricité", "1 kΩ correspond à :",
        ["100 Ω", "1000 Ω", "10 000 Ω", "0,001 Ω"], 1, "Préfixe kilo = 1000."),
    q("Q07", "Électricité", "250 mA correspond à :",
        ["2,5 A", "0,25 A", "25 A", "0,025 A"], 1, "Diviser par 1000 : 250 mA = 0,25 A."),
    q("Q08", "Électricité", "0,23 kV correspond à :",
        ["230 V", "23 V", "2300 V", "0,023 V"], 0, "Multiplier par 1000 : 0,23 kV = 230 V."),
    q("Q09", "Électricité", "1,2 kW correspond à :",
        ["120 W", "1200 W", "12 000 W", "0,12 W"], 1, "1 kW = 1000 W."),
    q("Q10", "Numérique", "1 octet correspond à :",
        ["4 bits", "8 bits", "16 bits", "1024 bits"], 1, "1 octet = 8 bits."),
    q("Q11", "Numérique", "1 Ko correspond à :",
        ["1000 octets", "1024 octets", "8 octets", "1024 bits"], 1, "Convention informatique : 1 Ko = 1024 octets."),
    q("Q12", "Numérique", "2 Go correspondent à :",
        ["2000 Mo", "2048 Mo", "1024 Mo", "4096 Mo"], 1, "2×1024 = 2048."),
    q("Q13", "Méthode", "La méthode la plus fiable pour éviter les erreurs est :",
        ["Faire des multiplications au hasard",
         "Écrire la valeur dans la bonne colonne puis compléter avec des zéros",
         "Toujours diviser par 10",
         "Toujours multiplier par 100"], 1, "C'est la méthode structurante demandée."),
    q("Q14", "SI", "0,45 m correspond à :",
        ["45 mm", "450 mm", "4500 mm", "0,045 mm"], 1, "0,45 m = 45 cm = 450 mm."),
    q("Q15", "SI", "7500 mm correspondent à :",
        ["0,75 m", "7,5 m", "75 m", "750 m"], 1, "7500 mm = 7,5 m."),
    q("Q16", "Capacités", "50 cL correspondent à :",
        ["5 L", "0,5 L", "50 L", "0,05 L"], 1, "50 cL = 0,5 L."),
    q("Q17", "Masses", "0,75 kg correspondent à :",
        ["75 g", "750 g", "7500 g", "0,075 g"], 1, "×1000."),
    q("Q18", "Aires", "1 m² correspond à :",
        ["100 cm²", "1000 cm²", "10 000 cm²", "1 000 000 cm²"], 2, "(100 cm)² = 10 000 cm²."),
    q("Q19", "Temps", "45 min correspondent à :",
        ["270 s", "2700 s", "4500 s", "900 s"], 1, "45×60 = 2700."),
    q("Q20", "Volumes", "2 dm³ correspondent à :",
        ["2 mL", "200 mL", "2000 mL", "20 000 mL"], 2, "1 dm³ = 1 L = 1000 mL."),
];

/// Score recorded answers against the bank: (score, max).
pub fn score(answers: &BTreeMap<String, usize>) -> (u32, u32) {
    let score = QCM
        .iter()
        .filter(|q| answers.get(q.id) == Some(&q.answer))
        .count() as u32;
    (score, QCM.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bank_size_and_unique_ids() {
        assert_eq!(QCM.len(), 20);
        let ids: HashSet<_> = QCM.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_answer_indices_valid() {
        assert!(QCM.iter().all(|q| q.answer < q.choices.len()));
    }

    #[test]
    fn test_score_counts_exact_matches() {
        let mut answers = BTreeMap::new();
        assert_eq!(score(&answers), (0, 20));

        answers.insert("Q01".to_string(), 0);
        answers.insert("Q02".to_string(), 1);
        answers.insert("Q03".to_string(), 0); // wrong
        assert_eq!(score(&answers), (2, 20));
    }

    #[test]
    fn test_unknown_ids_do_not_count() {
        let mut answers = BTreeMap::new();
        answers.insert("Q99".to_string(), 1);
        assert_eq!(score(&answers), (0, 20));
    }
}
