//! Fixed BBQ vocabularies and substring keyword matching

use serde::Serialize;

const MEATS: &[&str] = &[
    "brisket", "pork butt", "pork shoulder", "boston butt", "ribs", "baby back",
    "spare ribs", "st louis", "beef ribs", "chuck roast", "tri-tip", "tritip",
    "pulled pork", "pork belly", "burnt ends", "chicken", "turkey", "wings",
    "thighs", "drumsticks", "whole chicken", "spatchcock", "salmon", "prime rib",
    "ribeye", "tomahawk", "picanha", "sirloin", "flank", "skirt steak", "sausage",
    "bratwurst", "hot dogs", "burgers", "meatloaf", "lamb", "leg of lamb", "rack of lamb",
];

const WOODS: &[&str] = &[
    "hickory", "oak", "post oak", "red oak", "white oak", "mesquite", "pecan",
    "apple", "applewood", "cherry", "cherrywood", "maple", "alder", "peach",
    "competition blend", "fruit wood", "charcoal", "lump charcoal", "briquettes",
];

const TECHNIQUES: &[&str] = &[
    "wrap", "texas crutch", "butcher paper", "foil", "aluminum foil", "unwrap",
    "spritz", "mop", "baste", "inject", "injection", "brine", "dry brine",
    "rest", "resting", "carry over", "carryover", "probe tender", "jiggles",
    "bark", "smoke ring", "stall", "fat cap", "fat side", "trim", "trimming",
    "render", "rendering", "sear", "reverse sear", "crust", "char",
    "low and slow", "hot and fast", "indirect", "direct heat", "3-2-1", "2-2-1",
    "snake method", "minion method", "two zone",
];

const SEASONINGS: &[&str] = &[
    "rub", "dry rub", "seasoning", "salt", "kosher salt", "pepper", "black pepper",
    "16 mesh", "coarse ground", "paprika", "garlic", "garlic powder", "onion powder",
    "cayenne", "chili powder", "cumin", "brown sugar", "mustard", "yellow mustard",
    "hot sauce", "worcestershire", "apple cider vinegar", "vinegar", "olive oil",
];

const EQUIPMENT: &[&str] = &[
    "smoker", "offset", "pellet", "traeger", "recteq", "pit boss", "camp chef",
    "weber", "kettle", "kamado", "big green egg", "akorn", "drum smoker", "ugly drum",
    "wsm", "weber smokey mountain", "masterbuilt", "thermometer", "probe", "thermoworks",
    "meater", "instant read", "water pan", "drip pan", "grill grates",
];

/// The five domain vocabularies scanned in every transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Meats,
    Woods,
    Techniques,
    Seasonings,
    Equipment,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 5] = [
        Self::Meats,
        Self::Woods,
        Self::Techniques,
        Self::Seasonings,
        Self::Equipment,
    ];

    /// Lowercase phrases in declaration order
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Self::Meats => MEATS,
            Self::Woods => WOODS,
            Self::Techniques => TECHNIQUES,
            Self::Seasonings => SEASONINGS,
            Self::Equipment => EQUIPMENT,
        }
    }

    /// Section heading used in the report
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Meats => "Meat/Protein",
            Self::Woods => "Wood Type",
            Self::Techniques => "Techniques Used",
            Self::Seasonings => "Seasonings/Rub",
            Self::Equipment => "Equipment Mentioned",
        }
    }

    /// Phrases of this vocabulary that appear in `text`
    pub fn find_in(&self, text: &str) -> Vec<&'static str> {
        find_mentioned(text, self.phrases())
    }
}

/// Return the phrases that occur in `text` as case-insensitive substrings.
///
/// The result keeps the order of `phrases`, not the order in which the
/// phrases appear in the text. Matching is exact substring only, so
/// "rest" also matches inside "restaurant".
pub fn find_mentioned<'a>(text: &str, phrases: &[&'a str]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    phrases
        .iter()
        .copied()
        .filter(|phrase| lower.contains(&phrase.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_vocabulary_order() {
        let found = find_mentioned("Smoked with cherry, then hickory", WOODS);
        assert_eq!(found, vec!["hickory", "cherry"]);
    }

    #[test]
    fn matches_case_insensitively_inside_words() {
        let found = Vocabulary::Techniques.find_in("Then I WRAPPED it and let it rest");
        assert!(found.contains(&"wrap"));
        assert!(found.contains(&"rest"));
        assert!(!found.contains(&"unwrap"));
    }

    #[test]
    fn overlapping_phrases_all_match() {
        let found = Vocabulary::Woods.find_in("a bag of lump charcoal");
        assert_eq!(found, vec!["charcoal", "lump charcoal"]);
    }

    #[test]
    fn empty_text_matches_nothing() {
        for vocabulary in Vocabulary::ALL {
            assert!(vocabulary.find_in("").is_empty());
        }
    }

    #[test]
    fn vocabularies_are_lowercase() {
        for vocabulary in Vocabulary::ALL {
            for phrase in vocabulary.phrases() {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }
}
