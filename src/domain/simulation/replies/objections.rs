//! Objection pools keyed by persona, difficulty and client category.

use crate::domain::simulation::persona::{DiscType, Difficulty, PersonaConfig};

/// Objections for one persona and client category, tiered by difficulty.
struct ObjectionSet {
    beginner: &'static [&'static str],
    advanced: &'static [&'static str],
    expert: &'static [&'static str],
}

impl ObjectionSet {
    fn tier(&self, difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Advanced => self.advanced,
            Difficulty::Expert => self.expert,
        }
    }
}

static GENERIC_NEW: ObjectionSet = ObjectionSet {
    beginner: &[
        "Neviem, či na to máme teraz rozpočet.",
        "Musím si to ešte premyslieť.",
    ],
    advanced: &[
        "Je to drahšie, než sme plánovali.",
        "Nie som si istý, či to náš tím zvládne zaviesť.",
    ],
    expert: &[
        "Konkurencia nám ponúka podobné riešenie o tretinu lacnejšie.",
        "Nevidím dôvod meniť niečo, čo funguje.",
    ],
};

static GENERIC_REPEAT: ObjectionSet = ObjectionSet {
    beginner: &[
        "Minule sme hovorili o nižšej cene.",
        "Stále si nie som istý termínom, ako som vravel naposledy.",
    ],
    advanced: &[
        "Pri poslednej spolupráci sa zavádzanie natiahlo, bojím sa, že to bude podobné.",
        "Odvtedy sa nám znížil rozpočet.",
    ],
    expert: &[
        "Minule ste sľúbili podporu, ktorá nebola dostupná. Prečo by to teraz bolo inak?",
        "Po našej poslednej skúsenosti mi to musíte naozaj zdôvodniť.",
    ],
};

static DOMINANT_NEW: ObjectionSet = ObjectionSet {
    beginner: &["Koľko to stojí a kedy to bude fungovať?"],
    advanced: &["Nemám čas na dlhé zavádzanie. Aký je výsledok do mesiaca?"],
    expert: &[
        "Toto mi nič nehovorí. Aký je konkrétny prínos pre moje čísla?",
        "Ak mi to neviete povedať v jednej vete, končíme.",
    ],
};

static DOMINANT_REPEAT: ObjectionSet = ObjectionSet {
    beginner: &["Minule ste sľúbili rýchlosť. Kde je?"],
    advanced: &["Naposledy to trvalo dlho. Tentoraz chcem termín."],
    expert: &["Minulá spolupráca nesplnila ciele. Prečo vám mám veriť?"],
};

static INFLUENTIAL_NEW: ObjectionSet = ObjectionSet {
    beginner: &["Páči sa mi to, ale čo na to povie môj tím?"],
    advanced: &["Neviem, či to bude mať u nás ohlas."],
    expert: &[
        "Už som videl veľa pekných prezentácií, ktoré nikoho nenadchli.",
        "Znie to nudne. Čím to mojich ľudí strhne?",
    ],
};

static INFLUENTIAL_REPEAT: ObjectionSet = ObjectionSet {
    beginner: &["Minule to tím prijal vlažne, čo bude teraz inak?"],
    advanced: &["Naposledy nám chýbal niekto, kto by to u nás odkomunikoval."],
    expert: &["Po minulom projekte som stratil u kolegov kredit. Nechcem to zopakovať."],
};

static STEADY_NEW: ObjectionSet = ObjectionSet {
    beginner: &["Bojím sa, že zmena naruší zabehnuté procesy."],
    advanced: &["Čo ak to nebude fungovať? Kto nám pomôže?"],
    expert: &[
        "Naši ľudia zmeny neznášajú. Nechcem riskovať.",
        "Radšej zostaneme pri tom, čo poznáme.",
    ],
};

static STEADY_REPEAT: ObjectionSet = ObjectionSet {
    beginner: &["Minule nám prechod trochu skomplikoval prácu."],
    advanced: &["Po poslednej zmene sa tím dlho spamätával."],
    expert: &["Pri minulej spolupráci sme nemali podporu, keď sme ju potrebovali."],
};

static CONSCIENTIOUS_NEW: ObjectionSet = ObjectionSet {
    beginner: &["Máte nejakú dokumentáciu, ktorú si môžem prečítať?"],
    advanced: &["Ako presne ste prišli k tým číslam?"],
    expert: &[
        "Vaše tvrdenia nie sú podložené. Chcem vidieť metodiku a referencie.",
        "Aké sú presné podmienky SLA a čo sa stane pri ich porušení?",
    ],
};

static CONSCIENTIOUS_REPEAT: ObjectionSet = ObjectionSet {
    beginner: &["Minule ste sľúbili podklady, ešte som ich nedostal."],
    advanced: &["Údaje z minulého projektu nesedeli s vaším odhadom."],
    expert: &["Naposledy sa odhad líšil o tridsať percent. Ako to teraz zaručíte?"],
};

fn objection_set(disc: Option<DiscType>, repeat: bool) -> &'static ObjectionSet {
    match (disc, repeat) {
        (None, false) => &GENERIC_NEW,
        (None, true) => &GENERIC_REPEAT,
        (Some(DiscType::Dominant), false) => &DOMINANT_NEW,
        (Some(DiscType::Dominant), true) => &DOMINANT_REPEAT,
        (Some(DiscType::Influential), false) => &INFLUENTIAL_NEW,
        (Some(DiscType::Influential), true) => &INFLUENTIAL_REPEAT,
        (Some(DiscType::Steady), false) => &STEADY_NEW,
        (Some(DiscType::Steady), true) => &STEADY_REPEAT,
        (Some(DiscType::Conscientious), false) => &CONSCIENTIOUS_NEW,
        (Some(DiscType::Conscientious), true) => &CONSCIENTIOUS_REPEAT,
    }
}

/// The objection pool for a persona. Never empty.
pub fn objection_pool(persona: &PersonaConfig) -> &'static [&'static str] {
    objection_set(persona.disc_type, persona.client_category.is_repeat())
        .tier(persona.difficulty)
}
