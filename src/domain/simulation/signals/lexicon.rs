//! Phrase tables for lexical signal detection.
//!
//! Every heuristic the extractor uses is a declarative [`PhraseTable`]
//! evaluated by one generic matcher. Phrases are stored already
//! normalized: lowercase, without diacritics, without punctuation.
//! A phrase matches only at a word start, so `cena` does not fire on
//! `ocenenie`, while `funkci` still covers `funkcia` and `funkcie`.

use crate::domain::simulation::persona::DiscType;

/// A named set of phrases with a minimum number of distinct hits.
#[derive(Debug, Clone, Copy)]
pub struct PhraseTable {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub min_hits: usize,
}

impl PhraseTable {
    pub const fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self {
            name,
            phrases,
            min_hits: 1,
        }
    }

    pub const fn with_min_hits(mut self, min_hits: usize) -> Self {
        self.min_hits = min_hits;
        self
    }

    /// Number of distinct phrases found in already-normalized text.
    pub fn hits(&self, normalized: &str) -> usize {
        self.phrases
            .iter()
            .filter(|phrase| contains_at_word_start(normalized, phrase))
            .count()
    }

    /// True when at least `min_hits` distinct phrases are present.
    pub fn matches(&self, normalized: &str) -> bool {
        self.hits(normalized) >= self.min_hits
    }
}

fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(idx, _)| {
        haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |prev| !prev.is_alphanumeric())
    })
}

/// Maps Slovak (and Czech) letters with diacritics to their ASCII base.
pub fn fold_diacritics(c: char) -> char {
    match c {
        'á' | 'ä' => 'a',
        'č' => 'c',
        'ď' => 'd',
        'é' | 'ě' => 'e',
        'í' => 'i',
        'ĺ' | 'ľ' => 'l',
        'ň' => 'n',
        'ó' | 'ô' => 'o',
        'ŕ' | 'ř' => 'r',
        'š' => 's',
        'ť' => 't',
        'ú' | 'ů' => 'u',
        'ý' => 'y',
        'ž' => 'z',
        other => other,
    }
}

/// Lowercases, folds diacritics, turns punctuation into spaces and
/// collapses whitespace. Digits are kept.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(fold_diacritics)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Question shape
// ============================================================================

/// Interrogative words that open an open question.
pub const INTERROGATIVES: &[&str] = &[
    "ako", "aky", "aka", "ake", "aku", "aki", "akym", "akych", "akej", "akou",
    "co", "coho", "comu", "cim", "preco", "kto", "koho", "komu", "kym",
    "kde", "kedy", "kam", "odkial", "kolko", "nakolko", "dokedy",
    "ktory", "ktora", "ktore", "ktoru", "ktori", "ktorych", "ktorym",
    "how", "what", "why", "who", "where", "when", "which",
];

/// Leading fillers skipped before looking for an interrogative.
pub const QUESTION_LEAD_INS: &[&str] = &[
    "a", "aj", "tak", "takze", "no", "teda", "este", "s", "so", "v", "vo", "na", "za",
    "o", "z", "zo", "pre", "do", "od", "k", "ku", "po", "podla",
];

/// Imperative cues that make a question open regardless of its first word.
pub const OPEN_QUESTION_CUES: PhraseTable = PhraseTable::new(
    "open_question_cue",
    &[
        "povedzte", "popiste", "opiste", "priblizte", "vysvetlite", "porozpravajte",
        "rozpovedzte", "tell me", "describe",
    ],
);

// ============================================================================
// Intro
// ============================================================================

pub const GOAL_PHRASES: PhraseTable = PhraseTable::new(
    "goal",
    &[
        "ciel", "ucel stretnutia", "ucelom stretnutia", "zamer", "chcel by som dnes",
        "chcela by som dnes", "dnes by sme mohli", "dnes by som chcel", "dnes by som chcela",
    ],
);

pub const AGENDA_KEYWORDS: PhraseTable = PhraseTable::new(
    "agenda_keyword",
    &[
        "agenda", "agendu", "program stretnutia", "plan stretnutia", "navrhujem postup",
        "postup stretnutia",
    ],
);

/// Sequencing markers; two of them together describe an agenda.
pub const AGENDA_SEQUENCE: PhraseTable = PhraseTable::new(
    "agenda_sequence",
    &[
        "najprv", "najskor", "potom", "nasledne", "na zaver", "nakoniec", "v prvom rade",
        "dalej",
    ],
)
.with_min_hits(2);

pub const CONSENT_PHRASES: PhraseTable = PhraseTable::new(
    "consent",
    &[
        "mozeme takto", "mozeme tak", "suhlasite", "vyhovuje vam", "je to pre vas v poriadku",
        "je to v poriadku", "mozeme zacat", "sedi vam to", "je to ok", "mozeme pokracovat",
    ],
);

pub const PURPOSE_PHRASES: PhraseTable = PhraseTable::new(
    "question_purpose",
    &[
        "pytam sa preto", "pytam sa lebo", "pytam sa aby", "preto sa pytam", "aby som pochopil",
        "aby som pochopila", "aby som vedel", "aby som vedela", "aby sme vedeli",
        "aby som lepsie", "ucel otazky", "ucelom otazky",
    ],
);

/// Product and offer vocabulary; presence before discovery is an early pitch.
pub const PRODUCT_PHRASES: PhraseTable = PhraseTable::new(
    "product",
    &[
        "nas produkt", "nase riesenie", "nasa platforma", "nasa sluzba", "ponukame", "ponuka",
        "funkci", "modul", "licenci", "cena", "cenu", "cennik", "zlav", "balik", "demo",
        "predstavim vam", "odprezentujem",
    ],
);

pub const PRESSURE_PHRASES: PhraseTable = PhraseTable::new(
    "pressure",
    &[
        "musite", "hned", "okamzite", "ihned", "len dnes", "iba dnes", "posledna sanca",
        "posledny den", "podpiste", "rozhodnite sa", "nevahajte", "uz teraz",
    ],
);

// ============================================================================
// Discovery ("needs")
// ============================================================================

pub const NEED_PHRASES: PhraseTable = PhraseTable::new(
    "need",
    &[
        "potreb", "zalezi vam", "je pre vas dolezite", "trapi vas", "chcete dosiahnut",
        "chcete zlepsit", "vasou prioritou", "vas problem", "najvacsi problem", "vyzva",
    ],
);

pub const IMPACT_PHRASES: PhraseTable = PhraseTable::new(
    "impact",
    &[
        "dopad", "dosledk", "nasledk", "kolko vas to stoji", "co to sposobuje",
        "co sa stane ak", "ovplyvn",
    ],
);

pub const SUMMARY_PHRASES: PhraseTable = PhraseTable::new(
    "summary",
    &[
        "ak to zhrniem", "zhrniem", "zhrnut", "ak tomu dobre rozumiem", "inymi slovami",
        "ak som spravne pochopil", "ak som spravne pochopila", "takze ak som pochopil",
    ],
);

pub const CONFIRM_PHRASES: PhraseTable = PhraseTable::new(
    "confirm",
    &[
        "je to tak", "sedi to", "je to spravne", "rozumiem spravne", "suhlasite", "potvrdite",
        "mam pravdu",
    ],
);

pub const FOLLOW_UP_PHRASES: PhraseTable = PhraseTable::new(
    "follow_up",
    &[
        "spominali ste", "spomenuli ste", "vraveli ste", "povedali ste", "hovorili ste",
        "k tomu co ste", "nadviazem", "vratim sa k",
    ],
);

pub const CERTAINTY_PHRASES: PhraseTable = PhraseTable::new(
    "certainty",
    &[
        "garantujem", "zarucene", "urcite", "100", "stopercent", "najlepsi na trhu",
        "bezpochyby", "vzdy funguje", "nikdy nezlyha",
    ],
);

pub const EVIDENCE_PHRASES: PhraseTable = PhraseTable::new(
    "evidence",
    &[
        "data", "datach", "udaje", "udajov", "cisla", "cisel", "studia", "studie", "referenci",
        "prieskum", "meranie", "merania", "percent", "case study", "pripadova studia",
    ],
);

// ============================================================================
// Presentation, objections, closing
// ============================================================================

pub const VALUE_PHRASES: PhraseTable = PhraseTable::new(
    "value",
    &[
        "usetr", "prinos", "hodnot", "zvysite", "znizite", "navratnost",
        "zefektivn", "zrychli", "ziskate", "vdaka tomu",
    ],
);

pub const ACKNOWLEDGE_PHRASES: PhraseTable = PhraseTable::new(
    "acknowledge",
    &[
        "rozumiem", "chapem", "opravnena", "dakujem za otazku", "beriem na vedomie",
        "vasu obavu", "mate pravdu",
    ],
);

pub const CLOSING_PHRASES: PhraseTable = PhraseTable::new(
    "closing",
    &[
        "dalsi krok", "dalsie kroky", "dohodnime", "dohodneme sa", "mozeme sa dohodnut",
        "objednavk", "zmluv", "podpis", "pilot", "termin", "spustit", "zacat spolupracu",
        "posleme ponuku", "poslem ponuku",
    ],
);

pub const THANKS_PHRASES: PhraseTable = PhraseTable::new(
    "thanks",
    &[
        "dakujem", "vdaka", "dovidenia", "dopocutia", "tesim sa na spolupracu",
        "prajem pekny den",
    ],
);

// ============================================================================
// DISC adaptation
// ============================================================================

/// Phrases showing the trainee adapted to the client's DISC profile.
pub fn disc_adaptation_table(disc: DiscType) -> PhraseTable {
    match disc {
        DiscType::Dominant => PhraseTable::new(
            "disc_adapt_d",
            &["strucne", "k veci", "vysledok", "vysledky", "rychlo", "efektivn", "priamo"],
        ),
        DiscType::Influential => PhraseTable::new(
            "disc_adapt_i",
            &["skvele", "spolu", "spolocne", "nadsen", "vizi", "tesi ma", "super", "pribeh"],
        ),
        DiscType::Steady => PhraseTable::new(
            "disc_adapt_s",
            &[
                "postupne", "bez rizika", "bezpecn", "istot", "podpor", "v pokoji",
                "krok za krokom",
            ],
        ),
        DiscType::Conscientious => PhraseTable::new(
            "disc_adapt_c",
            &[
                "data", "cisla", "detail", "analyz", "presne", "dokumentaci", "specifikaci",
                "fakty",
            ],
        ),
    }
}
