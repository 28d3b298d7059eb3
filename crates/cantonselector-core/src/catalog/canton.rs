//! The 26 Swiss cantons.

use serde::{Deserialize, Serialize};

/// A Swiss canton, identified by its two-letter short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Canton {
    ZH,
    BE,
    LU,
    UR,
    SZ,
    OW,
    NW,
    GL,
    ZG,
    FR,
    SO,
    BS,
    BL,
    SH,
    AR,
    AI,
    SG,
    GR,
    AG,
    TG,
    TI,
    VD,
    VS,
    NE,
    GE,
    JU,
}

impl Canton {
    /// Number of cantons.
    pub const COUNT: usize = 26;

    /// All cantons in canonical order.
    pub const ALL: [Canton; Self::COUNT] = [
        Canton::ZH,
        Canton::BE,
        Canton::LU,
        Canton::UR,
        Canton::SZ,
        Canton::OW,
        Canton::NW,
        Canton::GL,
        Canton::ZG,
        Canton::FR,
        Canton::SO,
        Canton::BS,
        Canton::BL,
        Canton::SH,
        Canton::AR,
        Canton::AI,
        Canton::SG,
        Canton::GR,
        Canton::AG,
        Canton::TG,
        Canton::TI,
        Canton::VD,
        Canton::VS,
        Canton::NE,
        Canton::GE,
        Canton::JU,
    ];

    /// Two-letter short code, e.g. `"GR"`.
    pub fn code(self) -> &'static str {
        match self {
            Canton::ZH => "ZH",
            Canton::BE => "BE",
            Canton::LU => "LU",
            Canton::UR => "UR",
            Canton::SZ => "SZ",
            Canton::OW => "OW",
            Canton::NW => "NW",
            Canton::GL => "GL",
            Canton::ZG => "ZG",
            Canton::FR => "FR",
            Canton::SO => "SO",
            Canton::BS => "BS",
            Canton::BL => "BL",
            Canton::SH => "SH",
            Canton::AR => "AR",
            Canton::AI => "AI",
            Canton::SG => "SG",
            Canton::GR => "GR",
            Canton::AG => "AG",
            Canton::TG => "TG",
            Canton::TI => "TI",
            Canton::VD => "VD",
            Canton::VS => "VS",
            Canton::NE => "NE",
            Canton::GE => "GE",
            Canton::JU => "JU",
        }
    }

    /// German display name, e.g. `"Graubünden"`.
    pub fn name(self) -> &'static str {
        match self {
            Canton::ZH => "Zürich",
            Canton::BE => "Bern",
            Canton::LU => "Luzern",
            Canton::UR => "Uri",
            Canton::SZ => "Schwyz",
            Canton::OW => "Obwalden",
            Canton::NW => "Nidwalden",
            Canton::GL => "Glarus",
            Canton::ZG => "Zug",
            Canton::FR => "Freiburg",
            Canton::SO => "Solothurn",
            Canton::BS => "Basel-Stadt",
            Canton::BL => "Basel-Land",
            Canton::SH => "Schaffhausen",
            Canton::AR => "Appenzell-Ausserrhoden",
            Canton::AI => "Appenzell Innerrhoden",
            Canton::SG => "St. Gallen",
            Canton::GR => "Graubünden",
            Canton::AG => "Aargau",
            Canton::TG => "Thurgau",
            Canton::TI => "Tessin",
            Canton::VD => "Waadt",
            Canton::VS => "Wallis",
            Canton::NE => "Neuenburg",
            Canton::GE => "Genf",
            Canton::JU => "Jura",
        }
    }

    /// Look up a canton by short code (exact, upper case).
    pub fn from_code(code: &str) -> Option<Canton> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}
