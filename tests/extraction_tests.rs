use proptest::prelude::*;

use smokenotes::extract::{
    extract_internal_temps, extract_recipe, extract_temperatures, extract_times, find_mentioned,
    find_relevant_sentences, RecipeExtractor, RecipeFacts, ReportLimits, SentenceTopic, Vocabulary,
    AMBIENT_RANGE, INTERNAL_RANGE,
};

const PORK_BUTT: &str = "Today we're doing a pork butt on the offset smoker with hickory and a little cherry. \
I've got the smoker running at 250 degrees. Season it with salt, pepper and paprika. \
Cook for 3 to 4 hours at 250 degrees. Once it hits 160 internal we wrap it in butcher paper. \
Pull it when the probe reads 203. Let it rest in a cooler for an hour. \
Here's a tip: spritz every hour with water.";

#[test]
fn pork_butt_walkthrough() {
    let facts = RecipeFacts::extract(PORK_BUTT);

    assert_eq!(facts.smoker_temps, vec![250]);
    assert!(facts.internal_temps.contains(&160));
    assert!(facts.internal_temps.contains(&203));
    assert_eq!(facts.cooking_times, vec!["3-4 hours", "4 hours"]);
    assert!(facts.meats.contains(&"pork butt"));
    assert_eq!(facts.woods, vec!["hickory", "cherry"]);
    assert!(facts.techniques.contains(&"wrap"));
    assert!(facts.techniques.contains(&"butcher paper"));
    assert!(facts.techniques.contains(&"spritz"));
    assert!(facts.equipment.contains(&"offset"));
    assert!(!facts.pro_tips.is_empty());

    let report = extract_recipe(PORK_BUTT, Some("Pulled Pork"));
    assert!(report.contains("**Smoker/Grill Temp:** 250°F\n"));
    assert!(report.contains("**Cooking Time:** 3-4 hours, 4 hours\n"));
    assert!(report.contains("## Wood Type\n- Hickory\n- Cherry\n"));
}

#[test]
fn transcript_without_numbers_gets_note() {
    let text = "We talk a lot about bark and smoke rings in this video. Brisket is the king of barbecue.";
    let report = extract_recipe(text, Some("Talk Show"));

    assert!(report.starts_with("# Talk Show\n\n"));
    assert!(!report.contains("## Quick Reference"));
    assert!(report.contains("## Meat/Protein\n- Brisket\n"));
    assert!(report.ends_with("captions may not have captured the details.*\n"));
}

#[test]
fn configured_limits_truncate_sections() {
    let text = "Wrap it tight here. Wrap it again there. Wrap one more time now.";
    let limits = ReportLimits {
        wrapping_instructions: 1,
        ..ReportLimits::default()
    };
    let report = RecipeExtractor::new(limits, "Untitled Cook").extract(text, None);

    assert!(report.starts_with("# Untitled Cook\n"));
    assert!(report.contains("## Wrapping Instructions\n- \"Wrap it tight here\"\n\n"));
    assert!(!report.contains("Wrap it again there"));
}

#[test]
fn every_topic_has_triggers_and_heading() {
    for topic in SentenceTopic::ALL {
        assert!(!topic.triggers().is_empty());
        assert!(!topic.heading().is_empty());
    }
    for vocabulary in Vocabulary::ALL {
        assert!(!vocabulary.phrases().is_empty());
    }
}

fn transcript_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex(
        "([a-z]{1,8}|[0-9]{1,4}|°F|degrees|internal|hours?|minutes?|to|at|-|[ .!?]){0,60}",
    )
    .expect("valid strategy regex")
}

proptest! {
    #[test]
    fn ambient_temps_sorted_unique_in_range(text in transcript_text()) {
        let temps = extract_temperatures(&text);
        prop_assert!(temps.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(temps.iter().all(|t| AMBIENT_RANGE.contains(t)));
    }

    #[test]
    fn internal_temps_sorted_unique_in_range(text in transcript_text()) {
        let temps = extract_internal_temps(&text);
        prop_assert!(temps.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(temps.iter().all(|t| INTERNAL_RANGE.contains(t)));
    }

    #[test]
    fn times_are_distinct(text in transcript_text()) {
        let times = extract_times(&text);
        let mut deduped = times.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), times.len());
    }

    #[test]
    fn mentioned_phrases_keep_vocabulary_order(text in "[a-zA-Z ]{0,80}") {
        let phrases = Vocabulary::Techniques.phrases();
        let found = find_mentioned(&text, phrases);
        let lower = text.to_lowercase();

        let positions: Vec<usize> = found
            .iter()
            .map(|p| phrases.iter().position(|q| q == p).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(found.iter().all(|p| lower.contains(p)));
        prop_assert_eq!(find_mentioned(&text, phrases), found);
    }

    #[test]
    fn sentence_selection_respects_limit(text in transcript_text(), limit in 0usize..6) {
        let found = find_relevant_sentences(&text, &["a", "e"], limit);
        prop_assert!(found.len() <= limit);
        prop_assert!(found.iter().all(|s| s.chars().count() > 10));
        for (i, s) in found.iter().enumerate() {
            prop_assert!(!found[i + 1..].contains(s));
        }
    }

    #[test]
    fn report_is_deterministic(text in transcript_text()) {
        let first = extract_recipe(&text, None);
        let second = extract_recipe(&text, None);
        prop_assert!(first.starts_with("# BBQ Recipe\n\n"));
        prop_assert_eq!(first, second);
    }
}
