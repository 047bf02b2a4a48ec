//! Clue sentences.
//!
//! Every [`Fact`] has exactly one sentence shape per relation and polarity,
//! and every [`IdentityFact`] one per category. Rendering and parsing share
//! the same [`Template`] table, so a rendered sentence always parses back to
//! the fact it came from as long as the cast's names are unique per category
//! (which [`Cast`] guarantees).
//!
//! # Examples
//!
//! ```
//! use alibi_core::{Cast, CategoryPair, Entity, Fact, phrasing};
//!
//! let cast = Cast::new(
//!     vec![Entity::suspect("s1", "Mayor Grey")],
//!     vec![Entity::weapon("w1", "Lead Pipe")],
//!     vec![Entity::location("l1", "Library")],
//! )?;
//!
//! let fact = Fact::negative(CategoryPair::WeaponLocation, "w1", "l1");
//! let text = phrasing::render_fact(&cast, &fact).unwrap();
//! assert_eq!(text, "The Lead Pipe was not used in the Library.");
//! assert_eq!(phrasing::parse_fact(&cast, &text), Some(fact));
//! # Ok::<(), alibi_core::CastError>(())
//! ```

use crate::{Cast, Category, CategoryPair, Entity, EntityId, Fact, IdentityFact, Polarity};

/// A sentence shape `{prefix}{first}{middle}{second}{suffix}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Relation the sentence describes.
    pub relation: CategoryPair,
    /// Polarity the sentence describes.
    pub polarity: Polarity,
    /// Text before the row entity's name.
    pub prefix: &'static str,
    /// Text between the two names.
    pub middle: &'static str,
    /// Text after the column entity's name.
    pub suffix: &'static str,
}

impl Template {
    fn render(&self, first: &Entity, second: &Entity) -> String {
        format!(
            "{}{}{}{}{}",
            self.prefix,
            first.name(),
            self.middle,
            second.name(),
            self.suffix
        )
    }

    fn parse(&self, cast: &Cast, text: &str) -> Option<Fact> {
        let body = text.strip_prefix(self.prefix)?.strip_suffix(self.suffix)?;
        let rows = self.relation.rows();
        let columns = self.relation.columns();
        // Names may contain the separator, so every split is tried.
        body.match_indices(self.middle).find_map(|(at, middle)| {
            let row = cast.position_by_name(rows, &body[..at])?;
            let col = cast.position_by_name(columns, &body[at + middle.len()..])?;
            Some(Fact::new(
                self.relation,
                cast.entity(rows, row).id().clone(),
                cast.entity(columns, col).id().clone(),
                self.polarity,
            ))
        })
    }
}

/// The six fact sentence shapes.
pub const FACT_TEMPLATES: [Template; 6] = [
    Template {
        relation: CategoryPair::SuspectWeapon,
        polarity: Polarity::Positive,
        prefix: "",
        middle: " used the ",
        suffix: ".",
    },
    Template {
        relation: CategoryPair::WeaponLocation,
        polarity: Polarity::Positive,
        prefix: "The ",
        middle: " was found in the ",
        suffix: ".",
    },
    Template {
        relation: CategoryPair::SuspectLocation,
        polarity: Polarity::Positive,
        prefix: "",
        middle: " was in the ",
        suffix: ".",
    },
    Template {
        relation: CategoryPair::SuspectWeapon,
        polarity: Polarity::Negative,
        prefix: "",
        middle: " did not use the ",
        suffix: ".",
    },
    Template {
        relation: CategoryPair::SuspectLocation,
        polarity: Polarity::Negative,
        prefix: "",
        middle: " was not in the ",
        suffix: ".",
    },
    Template {
        relation: CategoryPair::WeaponLocation,
        polarity: Polarity::Negative,
        prefix: "The ",
        middle: " was not used in the ",
        suffix: ".",
    },
];

const IDENTITY_WEAPON_PREFIX: &str = "The culprit left traces of the ";
const IDENTITY_LOCATION_PREFIX: &str = "The culprit was seen in the ";
const IDENTITY_SUFFIX: &str = ".";

/// Returns the template for a relation and polarity.
#[must_use]
pub fn template(relation: CategoryPair, polarity: Polarity) -> &'static Template {
    let index = match (relation, polarity) {
        (CategoryPair::SuspectWeapon, Polarity::Positive) => 0,
        (CategoryPair::WeaponLocation, Polarity::Positive) => 1,
        (CategoryPair::SuspectLocation, Polarity::Positive) => 2,
        (CategoryPair::SuspectWeapon, Polarity::Negative) => 3,
        (CategoryPair::SuspectLocation, Polarity::Negative) => 4,
        (CategoryPair::WeaponLocation, Polarity::Negative) => 5,
    };
    &FACT_TEMPLATES[index]
}

/// Renders a fact as a sentence.
///
/// Returns `None` if the fact names entities that are not in `cast`.
#[must_use]
pub fn render_fact(cast: &Cast, fact: &Fact) -> Option<String> {
    let (row, col) = fact.resolve(cast)?;
    let relation = fact.relation();
    Some(template(relation, fact.polarity()).render(
        cast.entity(relation.rows(), row),
        cast.entity(relation.columns(), col),
    ))
}

/// Parses a fact sentence.
///
/// Leading and trailing whitespace is ignored. Returns `None` if the text
/// matches no template or names entities that are not in `cast`.
#[must_use]
pub fn parse_fact(cast: &Cast, text: &str) -> Option<Fact> {
    let text = text.trim();
    FACT_TEMPLATES.iter().find_map(|t| t.parse(cast, text))
}

/// Renders an identity fact as a sentence.
///
/// Returns `None` if the named entity is not in `cast`.
#[must_use]
pub fn render_identity(cast: &Cast, fact: &IdentityFact) -> Option<String> {
    let category = fact.category();
    let index = cast.position(category, fact.entity())?;
    let prefix = match fact {
        IdentityFact::Weapon(_) => IDENTITY_WEAPON_PREFIX,
        IdentityFact::Location(_) => IDENTITY_LOCATION_PREFIX,
    };
    Some(format!(
        "{prefix}{}{IDENTITY_SUFFIX}",
        cast.entity(category, index).name()
    ))
}

/// Parses an identity sentence.
#[must_use]
pub fn parse_identity(cast: &Cast, text: &str) -> Option<IdentityFact> {
    let text = text.trim();
    let shapes: [(&str, Category, fn(EntityId) -> IdentityFact); 2] = [
        (IDENTITY_WEAPON_PREFIX, Category::Weapon, IdentityFact::Weapon),
        (
            IDENTITY_LOCATION_PREFIX,
            Category::Location,
            IdentityFact::Location,
        ),
    ];
    shapes.into_iter().find_map(|(prefix, category, make)| {
        let name = text.strip_prefix(prefix)?.strip_suffix(IDENTITY_SUFFIX)?;
        let index = cast.position_by_name(category, name)?;
        Some(make(cast.entity(category, index).id().clone()))
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Entity;

    fn cast() -> Cast {
        Cast::new(
            vec![
                Entity::suspect("s1", "Mayor Grey"),
                Entity::suspect("s2", "Chef Red"),
                Entity::suspect("s3", "Lady Blue"),
            ],
            vec![
                Entity::weapon("w1", "Rusty Dagger"),
                Entity::weapon("w2", "Heavy Candlestick"),
                Entity::weapon("w3", "Poison Vial"),
            ],
            vec![
                Entity::location("l1", "Library"),
                Entity::location("l2", "Kitchen"),
                Entity::location("l3", "Conservatory"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_all_shapes() {
        let cast = cast();
        let cases = [
            (
                Fact::positive(CategoryPair::SuspectWeapon, "s1", "w2"),
                "Mayor Grey used the Heavy Candlestick.",
            ),
            (
                Fact::positive(CategoryPair::WeaponLocation, "w3", "l1"),
                "The Poison Vial was found in the Library.",
            ),
            (
                Fact::positive(CategoryPair::SuspectLocation, "s2", "l3"),
                "Chef Red was in the Conservatory.",
            ),
            (
                Fact::negative(CategoryPair::SuspectWeapon, "s3", "w1"),
                "Lady Blue did not use the Rusty Dagger.",
            ),
            (
                Fact::negative(CategoryPair::SuspectLocation, "s1", "l2"),
                "Mayor Grey was not in the Kitchen.",
            ),
            (
                Fact::negative(CategoryPair::WeaponLocation, "w2", "l2"),
                "The Heavy Candlestick was not used in the Kitchen.",
            ),
        ];
        for (fact, text) in cases {
            assert_eq!(render_fact(&cast, &fact).as_deref(), Some(text));
            assert_eq!(parse_fact(&cast, text), Some(fact));
        }
    }

    #[test]
    fn test_unknown_text_does_not_parse() {
        let cast = cast();
        assert_eq!(parse_fact(&cast, "Professor Plum used the Lead Pipe."), None);
        assert_eq!(parse_fact(&cast, "It was a dark and stormy night."), None);
        assert_eq!(parse_fact(&cast, ""), None);
        // Wrong category order for the template.
        assert_eq!(parse_fact(&cast, "Library used the Mayor Grey."), None);
    }

    #[test]
    fn test_template_lookup_matches_table() {
        for t in &FACT_TEMPLATES {
            assert_eq!(template(t.relation, t.polarity), t);
        }
    }

    #[test]
    fn test_unknown_entity_does_not_render() {
        let fact = Fact::positive(CategoryPair::SuspectWeapon, "s9", "w1");
        assert_eq!(render_fact(&cast(), &fact), None);
    }

    #[test]
    fn test_identity_sentences() {
        let cast = cast();
        let weapon = IdentityFact::Weapon("w3".into());
        let text = render_identity(&cast, &weapon).unwrap();
        assert_eq!(text, "The culprit left traces of the Poison Vial.");
        assert_eq!(parse_identity(&cast, &text), Some(weapon));
        assert_eq!(parse_fact(&cast, &text), None);

        let location = IdentityFact::Location("l2".into());
        let text = render_identity(&cast, &location).unwrap();
        assert_eq!(text, "The culprit was seen in the Kitchen.");
        assert_eq!(parse_identity(&cast, &text), Some(location));
    }

    #[test]
    fn test_names_sharing_words_with_templates() {
        let cast = Cast::new(
            vec![Entity::suspect("s1", "Man in the Hat")],
            vec![Entity::weapon("w1", "Rope the Sailor Used")],
            vec![Entity::location("l1", "Hall")],
        )
        .unwrap();
        for fact in [
            Fact::positive(CategoryPair::SuspectWeapon, "s1", "w1"),
            Fact::negative(CategoryPair::SuspectLocation, "s1", "l1"),
            Fact::negative(CategoryPair::WeaponLocation, "w1", "l1"),
        ] {
            let text = render_fact(&cast, &fact).unwrap();
            assert_eq!(parse_fact(&cast, &text), Some(fact));
        }
    }

    proptest! {
        #[test]
        fn rendered_facts_parse_back(
            relation in 0..3usize,
            positive in any::<bool>(),
            row in 0..3usize,
            col in 0..3usize,
        ) {
            let cast = cast();
            let relation = CategoryPair::ALL[relation];
            let polarity = if positive { Polarity::Positive } else { Polarity::Negative };
            let fact = Fact::new(
                relation,
                cast.entity(relation.rows(), row).id().clone(),
                cast.entity(relation.columns(), col).id().clone(),
                polarity,
            );
            let text = render_fact(&cast, &fact).unwrap();
            prop_assert_eq!(parse_fact(&cast, &text), Some(fact));
        }
    }
}
