//! The static exercise bank
//!
//! Thirty progressive exercises with their expected answers in clear
//! (used by the teacher view). Fixed reference data, not logic.

/// One practice exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    /// Difficulty from 1 (direct) to 3 (multi-step).
    pub level: u8,
    pub tag: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

const fn ex(
    id: &'static str,
    level: u8,
    tag: &'static str,
    question: &'static str,
    answer: &'static str,
) -> Exercise {
    Exercise { id, level, tag, question, answer }
}

pub static EXERCISES: [Exercise; 30] = [
    // Longueurs
    ex("E01", 1, "Longueurs", "Convertir 2,5 m en cm.", "250 cm"),
    ex("E02", 1, "Longueurs", "Convertir 120 cm en m.", "1,2 m"),
    ex("E03", 1, "Longueurs", "Convertir 3 km en m.", "3000 m"),
    ex("E04", 2, "Longueurs", "Convertir 0,45 m en mm.", "450 mm"),
    ex("E05", 2, "Longueurs", "Convertir 7500 mm en m.", "7,5 m"),
    // Masses
    ex("E06", 1, "Masses", "Convertir 0,75 kg en g.", "750 g"),
    ex("E07", 1, "Masses", "Convertir 250 g en kg.", "0,25 kg"),
    ex("E08", 2, "Masses", "Convertir 1,2 t en kg.", "1200 kg"),
    ex("E09", 2, "Masses", "Convertir 6500 mg en g.", "6,5 g"),
    // Capacités
    ex("E10", 1, "Capacités", "Convertir 1,25 L en mL.", "1250 mL"),
    ex("E11", 1, "Capacités", "Convertir 50 cL en L.", "0,5 L"),
    ex("E12", 2, "Capacités", "Convertir 3,5 hL en L.", "350 L"),
    ex("E13", 2, "Capacités", "Convertir 0,09 L en cL.", "9 cL"),
    // Temps
    ex("E14", 1, "Temps", "Convertir 1,5 h en minutes.", "90 min"),
    ex("E15", 1, "Temps", "Convertir 45 min en secondes.", "2700 s"),
    ex("E16", 2, "Temps", "Convertir 5400 s en heures.", "1,5 h"),
    // Aires (×100)
    ex("E17", 2, "Aires", "Convertir 1 m² en cm².", "10000 cm²"),
    ex("E18", 2, "Aires", "Convertir 2500 cm² en m².", "0,25 m²"),
    ex("E19", 3, "Aires", "Convertir 0,8 m² en mm².", "800000 mm²"),
    // Volumes cubiques (×1000)
    ex("E20", 2, "Volumes", "Convertir 1 m³ en L.", "1000 L"),
    ex("E21", 2, "Volumes", "Convertir 2 dm³ en mL.", "2000 mL"),
    // Électricité
    ex("E22", 1, "Électricité", "Convertir 4,7 kΩ en Ω.", "4700 Ω"),
    ex("E23", 1, "Électricité", "Convertir 250 mA en A.", "0,25 A"),
    ex("E24", 2, "Électricité", "Convertir 0,23 kV en V.", "230 V"),
    ex("E25", 2, "Électricité", "Convertir 1,2 kW en W.", "1200 W"),
    // Données (8 + 1024)
    ex("E26", 1, "Numérique", "Convertir 64 bits en octets.", "8 octets"),
    ex("E27", 2, "Numérique", "Convertir 2 Go en Mo.", "2048 Mo"),
    ex("E28", 2, "Numérique", "Convertir 1024 Ko en Mo.", "1 Mo"),
    ex("E29", 3, "Numérique", "Convertir 1,5 Mo en Ko.", "1536 Ko"),
    ex("E30", 3, "Numérique", "Convertir 3 To en Go.", "3072 Go"),
];

/// Look up an exercise by id.
pub fn exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bank_size_and_unique_ids() {
        assert_eq!(EXERCISES.len(), 30);
        let ids: HashSet<_> = EXERCISES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(exercise("E01").unwrap().answer, "250 cm");
        assert!(exercise("E99").is_none());
    }

    #[test]
    fn test_levels_in_range() {
        assert!(EXERCISES.iter().all(|e| (1..=3).contains(&e.level)));
    }
}
