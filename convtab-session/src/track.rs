//! Referential tracks and their guidance notes

use serde::{Deserialize, Serialize};

/// The referential a class works against. Presentation-only: no
/// conversion behavior depends on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    General,
    Cap,
    Bpciel,
    Bpmspc,
    Bts,
}

impl Default for Track {
    fn default() -> Self {
        Track::General
    }
}

/// Guidance shown for a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackNote {
    pub title: &'static str,
    pub text: &'static str,
}

impl Track {
    pub fn as_str(self) -> &'static str {
        match self {
            Track::General => "general",
            Track::Cap => "cap",
            Track::Bpciel => "bpciel",
            Track::Bpmspc => "bpmspc",
            Track::Bts => "bts",
        }
    }

    pub fn note(self) -> &'static TrackNote {
        match self {
            Track::General => &TrackNote {
                title: "Référentiel : Général",
                text: "Travailler SI (longueur, masse, capacité, temps) + liens L ↔ dm³. Réinvestir dans des contextes concrets.",
            },
            Track::Cap => &TrackNote {
                title: "CAP Électricité",
                text: "Prioriser : mA/A, kΩ/Ω, kW/W, V/kV + longueurs (câblage) et temps (durées d'intervention).",
            },
            Track::Bpciel => &TrackNote {
                title: "Bac Pro CIEL",
                text: "Prioriser : bits/octet, Ko/Mo/Go, tailles de fichiers ; + conversions V/A/Ω et SI (métrologie).",
            },
            Track::Bpmspc => &TrackNote {
                title: "Bac Pro MSPC",
                text: "Prioriser : temps (GMAO), masses/capacités (consommables), longueurs (implantation) ; + A/mA, Ω/kΩ.",
            },
            Track::Bts => &TrackNote {
                title: "BTS CIEL",
                text: "Renforcer : conversions en chaîne, précision/arrondis, ordre de grandeur ; + données (1024) et préfixes (k, m).",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&Track::Bpciel).unwrap();
        assert_eq!(json, "\"bpciel\"");
        let back: Track = serde_json::from_str("\"bts\"").unwrap();
        assert_eq!(back, Track::Bts);
    }

    #[test]
    fn test_every_track_has_a_note() {
        for track in [Track::General, Track::Cap, Track::Bpciel, Track::Bpmspc, Track::Bts] {
            assert!(!track.note().title.is_empty());
            assert!(!track.note().text.is_empty());
        }
    }
}
