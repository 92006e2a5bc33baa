//! Client reply templates, per phase and client category.
//!
//! Repeat-client templates lean on the previous meeting; new-client
//! templates stay generic.

use crate::domain::simulation::persona::DiscType;
use crate::domain::simulation::phase::SalesPhase;

const INTRO_NEW: &[&str] = &[
    "Dobrý deň. Mám na vás asi pol hodiny, tak som zvedavý, čo ste si pripravili.",
    "Dobrý deň, ďakujem za stretnutie. Povedzte, ako by ste chceli postupovať.",
    "Zdravím. Úprimne, zatiaľ neviem, čo od toho stretnutia čakať.",
];

const INTRO_REPEAT: &[&str] = &[
    "Dobrý deň, rád vás opäť vidím. Minule sme skončili pri rozpočte, tak kde začneme?",
    "Zdravím, ako sme sa bavili minule, odvtedy sa u nás zopár vecí zmenilo.",
    "Dobrý deň. Z nášho posledného stretnutia mám pár otvorených bodov, poďme na to.",
];

const DISCOVERY_NEW: &[&str] = &[
    "Momentálne to riešime ručne v tabuľkách a zaberá to dosť času.",
    "Najviac nás trápi, že sa informácie strácajú medzi oddeleniami.",
    "Hmm, ťažko povedať. Funguje to, ale nie som si istý, či efektívne.",
];

const DISCOVERY_REPEAT: &[&str] = &[
    "Ako som spomínal minule, tabuľky nám stále zaberajú veľa času.",
    "Odkedy sme sa videli, pribudli nám dvaja noví ľudia a chaos je väčší.",
    "Minule ste sa pýtali na procesy. Odvtedy sme nič nezmenili.",
];

const PRESENTATION_NEW: &[&str] = &[
    "Dobre, a ako presne by nám to pomohlo?",
    "Znie to zaujímavo. Čo by to znamenalo pre náš tím v praxi?",
    "Hmm. A v čom ste iní než ostatní dodávatelia?",
];

const PRESENTATION_REPEAT: &[&str] = &[
    "Oproti tomu, čo ste ukazovali minule, je to niečo nové?",
    "Pamätám si vašu minulú prezentáciu. Čo sa odvtedy zlepšilo?",
    "Dobre, a ako to nadväzuje na to, čo sme preberali naposledy?",
];

const CLOSING_NEW: &[&str] = &[
    "Dobre, čo by bol ďalší krok?",
    "Musím to ešte prebrať s kolegami. Čo navrhujete?",
    "Zaujíma ma to. Ako by vyzeral začiatok spolupráce?",
];

const CLOSING_REPEAT: &[&str] = &[
    "Tentoraz sme ďalej než minule. Čo navrhujete ako ďalší krok?",
    "Keďže sa poznáme, môžeme byť konkrétni. Aké sú podmienky?",
    "Minule sme to odložili, dnes by som to rád posunul. Čo ďalej?",
];

const FINISHED_NEW: &[&str] = &[
    "Ďakujem za váš čas, ozvem sa.",
    "Dobre, dohodnuté. Prajem pekný deň.",
];

const FINISHED_REPEAT: &[&str] = &[
    "Ďakujem, ako vždy to bolo prínosné. Dovidenia.",
    "Dohodnuté, teším sa na ďalšie stretnutie.",
];

/// Base templates for `phase`. Objections are drawn from their own pools.
pub fn base_templates(phase: SalesPhase, repeat: bool) -> &'static [&'static str] {
    match (phase, repeat) {
        (SalesPhase::Intro, false) => INTRO_NEW,
        (SalesPhase::Intro, true) => INTRO_REPEAT,
        (SalesPhase::Discovery, false) => DISCOVERY_NEW,
        (SalesPhase::Discovery, true) => DISCOVERY_REPEAT,
        (SalesPhase::Presentation | SalesPhase::Objections, false) => PRESENTATION_NEW,
        (SalesPhase::Presentation | SalesPhase::Objections, true) => PRESENTATION_REPEAT,
        (SalesPhase::Closing, false) => CLOSING_NEW,
        (SalesPhase::Closing, true) => CLOSING_REPEAT,
        (SalesPhase::Finished, false) => FINISHED_NEW,
        (SalesPhase::Finished, true) => FINISHED_REPEAT,
    }
}

/// Reply given when the trainee sent nothing.
pub fn waiting_reply(phase: SalesPhase) -> &'static str {
    match phase {
        SalesPhase::Intro => "Počúvam vás.",
        SalesPhase::Discovery => "Čo by ste ešte chceli vedieť?",
        SalesPhase::Presentation => "Pokračujte, prosím.",
        SalesPhase::Objections => "Stále čakám na odpoveď.",
        SalesPhase::Closing => "Tak ako to uzavrieme?",
        SalesPhase::Finished => "Rozhovor je ukončený.",
    }
}

pub fn greeting(repeat: bool) -> &'static str {
    if repeat {
        "Dobrý deň, rád vás znova vidím. Poďme nadviazať na naše posledné stretnutie."
    } else {
        "Dobrý deň, vitajte. S čím za mnou prichádzate?"
    }
}

// ============================================================================
// Intro tiers
// ============================================================================

/// Appended at mood level 5.
pub const INTRO_FOLLOW_UPS: &[&str] = &[
    "Mimochodom, čo vás vlastne priviedlo práve k nám?",
    "A kto z vášho tímu by sa do toho mal ešte zapojiť?",
];

/// Appended at mood level 4.
pub const DETAIL_REQUESTS: &[&str] = &[
    "Môžete byť trochu konkrétnejší?",
    "Dajte mi, prosím, jeden konkrétny príklad.",
];

/// Appended at mood level 2.
pub const GOAL_QUESTION: &str = "Aký je cieľ tohto stretnutia?";

/// Mood level 1. At most eight words.
pub const CURT_REPLIES: &[&str] = &[
    "Nemám veľa času. Poďme k veci.",
    "Skráťme to. Poďme k veci.",
];

pub const INTRO_VERBOSE_TAIL: &str =
    "Teší ma, že ste si to pripravili, rád si vypočujem viac.";

// ============================================================================
// DISC overlay
// ============================================================================

/// Persona-typical phrases prepended by the overlay.
pub fn disc_openers(disc: DiscType) -> &'static [&'static str] {
    match disc {
        DiscType::Dominant => &["Stručne.", "K veci."],
        DiscType::Influential => &["Super, že sa vidíme!", "Viete, ja mám rád nové nápady."],
        DiscType::Steady => &["Nerád by som nič uponáhľal.", "Pre nás je dôležitá istota."],
        DiscType::Conscientious => &["Rád by som videl detaily.", "Zaujímajú ma fakty."],
    }
}

/// Softeners the direct tone strips out.
pub const SOFTENERS: &[&str] = &["asi", "možno", "trochu", "prosím", "úprimne", "vlastne", "hmm"];

pub const AFFIRMATIONS: &[&str] = &["To znie skvele!", "Páči sa mi to!"];

pub const DATA_REQUESTS: &[&str] = &[
    "Máte na to nejaké dáta?",
    "Viete to podložiť číslami?",
];
