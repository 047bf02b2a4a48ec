//! Casts shared by the generator's unit tests.

use alibi_core::{Cast, Entity};

/// A cast of `size` entities per category with ids `s0`, `w0`, `l0`, ...
pub fn numbered_cast(size: usize) -> Cast {
    let entities = |make: fn(String, String) -> Entity, prefix: &str| {
        (0..size)
            .map(|i| make(format!("{prefix}{i}"), format!("{prefix} {i}")))
            .collect()
    };
    Cast::new(
        entities(|id, name| Entity::suspect(id, name), "s"),
        entities(|id, name| Entity::weapon(id, name), "w"),
        entities(|id, name| Entity::location(id, name), "l"),
    )
    .unwrap()
}

/// Suspects A, B, C; weapons X, Y, Z; locations P, Q, R.
pub fn letter_cast() -> Cast {
    let entities = |make: fn(&str, &str) -> Entity, names: [&str; 3]| {
        names.into_iter().map(|name| make(name, name)).collect()
    };
    Cast::new(
        entities(|id, name| Entity::suspect(id, name), ["A", "B", "C"]),
        entities(|id, name| Entity::weapon(id, name), ["X", "Y", "Z"]),
        entities(|id, name| Entity::location(id, name), ["P", "Q", "R"]),
    )
    .unwrap()
}
