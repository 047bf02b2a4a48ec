//! Entity categories and the pairs of categories that relation grids cover.

/// One of the three kinds of entity a puzzle binds together.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A person who may have committed the crime.
    #[display("suspect")]
    Suspect,
    /// An object that may have been used.
    #[display("weapon")]
    Weapon,
    /// A place where it may have happened.
    #[display("location")]
    Location,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Self; 3] = [Self::Suspect, Self::Weapon, Self::Location];

    /// Returns the position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Suspect => 0,
            Self::Weapon => 1,
            Self::Location => 2,
        }
    }
}

/// An ordered pair of categories covered by one relation grid.
///
/// The first category indexes the grid's rows and the second its columns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryPair {
    /// Suspects (rows) against weapons (columns).
    #[display("suspect-weapon")]
    SuspectWeapon,
    /// Suspects (rows) against locations (columns).
    #[display("suspect-location")]
    SuspectLocation,
    /// Weapons (rows) against locations (columns).
    #[display("weapon-location")]
    WeaponLocation,
}

impl CategoryPair {
    /// All category pairs, in the order relation grids are stored.
    pub const ALL: [Self; 3] = [
        Self::SuspectWeapon,
        Self::SuspectLocation,
        Self::WeaponLocation,
    ];

    /// Returns the position of this pair in [`CategoryPair::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::SuspectWeapon => 0,
            Self::SuspectLocation => 1,
            Self::WeaponLocation => 2,
        }
    }

    /// Returns the category whose entities index the rows.
    #[must_use]
    pub const fn rows(self) -> Category {
        match self {
            Self::SuspectWeapon | Self::SuspectLocation => Category::Suspect,
            Self::WeaponLocation => Category::Weapon,
        }
    }

    /// Returns the category whose entities index the columns.
    #[must_use]
    pub const fn columns(self) -> Category {
        match self {
            Self::SuspectWeapon => Category::Weapon,
            Self::SuspectLocation | Self::WeaponLocation => Category::Location,
        }
    }

    /// Returns the pair with `rows` as row category and `columns` as column category.
    ///
    /// Returns `None` for identical categories or for a reversed order.
    #[must_use]
    pub const fn between(rows: Category, columns: Category) -> Option<Self> {
        match (rows, columns) {
            (Category::Suspect, Category::Weapon) => Some(Self::SuspectWeapon),
            (Category::Suspect, Category::Location) => Some(Self::SuspectLocation),
            (Category::Weapon, Category::Location) => Some(Self::WeaponLocation),
            _ => None,
        }
    }
}
