//! Property tests for the bounded mood model, the intro gate and the
//! feedback score range.

use proptest::prelude::*;

use sales_sim::adapters::SeededRandom;
use sales_sim::config::SimulationConfig;
use sales_sim::domain::analysis::{FeedbackSynthesizer, MAX_SCORE, MIN_SCORE};
use sales_sim::domain::simulation::{
    ClientCategory, DiscType, Difficulty, IntroCounters, IntroFlags, Metrics, MoodModel,
    PersonaConfig, PhaseCounters, PhaseGate, SalesPhase, TurnSimulator,
};

const MESSAGES: [&str; 10] = [
    "Dnes by som chcel jasne stanoviť cieľ. Najprv prejdeme otázky, potom možnosti \
     a na záver ďalší krok. Môžeme takto? Ako dnes vyzerá vaša situácia?",
    "Náš produkt je najlepší na trhu. Ponúkame moderné funkcie. Cena je výhodná. \
     Máme aj demo. Licencia je flexibilná. Zľava platí do konca mesiaca.",
    "Musíte sa rozhodnúť ešte dnes.",
    "Aký je váš cieľ? Máte už riešenie? Ako dnes vyzerá proces?",
    "Ako dnes vyzerá proces? Ako dnes vyzerá proces teraz?",
    "Spomínali ste meškania. Aký dopad to má na vašich zákazníkov?",
    "Ak to zhrniem, potrebujete zrýchliť fakturáciu. Je to tak?",
    "Rozumiem vašej obave. Čo by pre vás znamenalo, keby ste ušetrili dva dni?",
    "Dohodnime si ďalší krok na budúci týždeň.",
    "",
];

fn arb_persona() -> impl Strategy<Value = PersonaConfig> {
    let disc = prop_oneof![
        Just(None),
        Just(Some(DiscType::Dominant)),
        Just(Some(DiscType::Influential)),
        Just(Some(DiscType::Steady)),
        Just(Some(DiscType::Conscientious)),
    ];
    let category = prop_oneof![Just(ClientCategory::New), Just(ClientCategory::Repeat)];
    let difficulty = prop_oneof![
        Just(Difficulty::Beginner),
        Just(Difficulty::Advanced),
        Just(Difficulty::Expert),
    ];
    (disc, category, difficulty).prop_map(|(d, c, l)| PersonaConfig::new(d, c, l))
}

fn arb_metrics() -> impl Strategy<Value = Metrics> {
    prop::array::uniform8(0u32..1_000).prop_map(|v| Metrics {
        questions_asked: v[0],
        open_questions: v[1],
        needs_identified: v[2],
        value_statements: v[3],
        objection_handling_attempts: v[4],
        objections_handled_well: v[5],
        closing_attempts: v[6],
        adaptation_to_disc: v[7],
    })
}

proptest! {
    #[test]
    fn mood_score_stays_in_bounds_for_any_deltas(deltas in prop::collection::vec(-20i32..20, 0..50)) {
        let config = SimulationConfig::default();
        let model = MoodModel::new(&config);
        let mut score = 0;
        for delta in deltas {
            score = model.apply_score(score, delta);
            prop_assert!((config.mood_score_min..=config.mood_score_max).contains(&score));
        }
    }

    #[test]
    fn simulated_turns_keep_mood_in_bounds(
        persona in arb_persona(),
        picks in prop::collection::vec(0usize..MESSAGES.len(), 1..25),
        seed in any::<u64>(),
    ) {
        let sim = TurnSimulator::new(SimulationConfig::default());
        let config = sim.config().clone();
        let mut rng = SeededRandom::new(seed);
        let (mut state, _) = sim.start(persona);

        for pick in picks {
            let outcome = sim.step(&state, MESSAGES[pick], &persona, &mut rng);
            prop_assert!((config.mood_score_min..=config.mood_score_max).contains(&outcome.mood_score));
            prop_assert!(
                (config.mood_level_min..=config.mood_level_max).contains(&outcome.state.mood_level)
            );
            prop_assert!(outcome.metrics.dominates(&state.metrics));
            state = outcome.state;
        }
    }

    #[test]
    fn overall_score_is_always_one_to_ten(metrics in arb_metrics(), repeat in any::<bool>()) {
        let category = if repeat { ClientCategory::Repeat } else { ClientCategory::New };
        let report = FeedbackSynthesizer::from_metrics(&metrics, category);

        prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&report.overall_score));
        for dimension in &report.dimensions {
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&dimension.score));
        }
    }
}

#[test]
fn intro_gate_truth_table() {
    let gate = PhaseGate::new(&SimulationConfig::default());
    let counters = PhaseCounters {
        intro: IntroCounters {
            questions_asked: 1,
            open_questions: 1,
        },
        ..Default::default()
    };

    for bits in 0u8..64 {
        let bit = |n: u8| bits & (1 << n) != 0;
        let flags = IntroFlags {
            goal_framed: bit(0),
            agenda_proposed: bit(1),
            consent_obtained: bit(2),
            diagnostic_started: bit(3),
            early_pitch: bit(4),
            long_monologue: bit(5),
            purpose_explained: false,
        };
        let expected = bit(0) && bit(1) && bit(2) && bit(3) && !bit(4) && !bit(5);

        let result = gate.evaluate(SalesPhase::Intro, &flags, &counters);

        assert_eq!(result.passed, expected, "flags {flags:?}");
        assert_eq!(result.passed, result.reasons.is_empty());
    }
}
