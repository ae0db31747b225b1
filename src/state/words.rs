//! Word bank and role assignment.
//!
//! A static mapping of category to (word, hint) pairs, plus the random
//! draw that starts a round: one imposter index and one secret entry,
//! drawn independently and uniformly from an injected random source.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::roster::MIN_PLAYERS;

/// Word categories a session can be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Movies,
    Celebrities,
    Sports,
    Animals,
    Food,
    Places,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 6] = [
        Category::Movies,
        Category::Celebrities,
        Category::Sports,
        Category::Animals,
        Category::Food,
        Category::Places,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movies => "Movies",
            Self::Celebrities => "Celebrities",
            Self::Sports => "Sports",
            Self::Animals => "Animals",
            Self::Food => "Food",
            Self::Places => "Places",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static (word, hint) entries for a category.
pub fn entries(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Movies => &[
            ("Titanic", "A ship, an iceberg, and a door"),
            ("Jurassic Park", "Life finds a way"),
            ("The Lion King", "A prince runs from his past"),
            ("Inception", "A dream inside a dream"),
            ("Jaws", "Stay out of the water"),
            ("Frozen", "Two sisters and an eternal winter"),
            ("The Godfather", "An offer you can't refuse"),
            ("Avatar", "Blue people on a distant moon"),
        ],
        Category::Celebrities => &[
            ("Taylor Swift", "Writes songs about her exes"),
            ("Dwayne Johnson", "Wrestler turned movie star"),
            ("Beyonce", "Queen of a musical beehive"),
            ("Lionel Messi", "Small man, big left foot"),
            ("Oprah Winfrey", "Everybody gets a car"),
            ("Tom Cruise", "Does his own stunts"),
            ("Adele", "Hello from the other side"),
            ("Keanu Reeves", "The internet's nicest man"),
        ],
        Category::Sports => &[
            ("Basketball", "Hoops and dunks"),
            ("Tennis", "Love means zero here"),
            ("Cricket", "Wickets and very long matches"),
            ("Swimming", "You can't play it dry"),
            ("Boxing", "Gloves on, bell rings"),
            ("Golf", "The lowest score wins"),
            ("Volleyball", "Don't let it touch the floor"),
            ("Archery", "Aim for the gold ring"),
        ],
        Category::Animals => &[
            ("Elephant", "Never forgets"),
            ("Penguin", "A bird in a tuxedo"),
            ("Kangaroo", "Carries its baby in a pocket"),
            ("Octopus", "Eight arms, three hearts"),
            ("Giraffe", "Eats from the tallest branches"),
            ("Owl", "Asks 'who' all night"),
            ("Dolphin", "The smartest swimmer"),
            ("Chameleon", "Master of disguise"),
        ],
        Category::Food => &[
            ("Pizza", "Round, cheesy, sliced in triangles"),
            ("Sushi", "Raw fish on rice"),
            ("Tacos", "Folded and full of surprises"),
            ("Pancakes", "Stacked and syrupy"),
            ("Biryani", "Fragrant layered rice dish"),
            ("Ice Cream", "Melts if you're too slow"),
            ("Burger", "Stacked between two buns"),
            ("Spaghetti", "Twirl it on a fork"),
        ],
        Category::Places => &[
            ("Paris", "City of lights and love"),
            ("Airport", "Arrivals and departures"),
            ("Library", "Shhh!"),
            ("Beach", "Sand between your toes"),
            ("Hospital", "Where sirens end up"),
            ("Desert", "Hot days, cold nights, no rain"),
            ("Stadium", "A roaring crowd"),
            ("Egypt", "Pyramids and pharaohs"),
        ],
    }
}

/// The secret drawn for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    pub word: String,
    pub hint: String,
}

/// Result of role assignment for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Index into the roster of the one imposter.
    pub imposter_index: usize,
    pub entry: SecretEntry,
}

/// Assignment errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    /// Word bank has no entries for the category. Static data should make
    /// this unreachable; treated as a fatal configuration error.
    EmptyCategory(Category),
    TooFewPlayers { have: usize },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory(c) => write!(f, "No words configured for category {}", c),
            Self::TooFewPlayers { have } => {
                write!(f, "Need at least {} players, have {}", MIN_PLAYERS, have)
            }
        }
    }
}

impl std::error::Error for AssignError {}

/// Draw the imposter index and secret entry for a round.
///
/// The two draws are uniform and independent; repeated calls may repeat
/// values (rematches do not exclude the previous round's draw).
pub fn assign(
    player_count: usize,
    category: Category,
    rng: &mut impl Rng,
) -> Result<Assignment, AssignError> {
    if player_count < MIN_PLAYERS {
        return Err(AssignError::TooFewPlayers { have: player_count });
    }

    let pool = entries(category);
    if pool.is_empty() {
        return Err(AssignError::EmptyCategory(category));
    }

    let imposter_index = rng.gen_range(0..player_count);
    let (word, hint) = pool[rng.gen_range(0..pool.len())];

    Ok(Assignment {
        imposter_index,
        entry: SecretEntry {
            word: word.to_string(),
            hint: hint.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_entries() {
        for category in Category::ALL {
            assert!(
                entries(category).len() >= 8,
                "category {} is underfilled",
                category
            );
        }
    }

    #[test]
    fn test_assign_bounds() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let assignment = assign(5, Category::Animals, &mut rng).unwrap();
            assert!(assignment.imposter_index < 5);
            assert!(!assignment.entry.word.is_empty());
            assert!(!assignment.entry.hint.is_empty());
        }
    }

    #[test]
    fn test_assign_reaches_every_index() {
        let mut seen = HashSet::new();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignment = assign(5, Category::Food, &mut rng).unwrap();
            seen.insert(assignment.imposter_index);
        }

        assert_eq!(seen, (0..5).collect::<HashSet<_>>());
    }

    #[test]
    fn test_assign_too_few_players() {
        let mut rng = StdRng::seed_from_u64(1);

        let result = assign(2, Category::Movies, &mut rng);
        assert_eq!(result, Err(AssignError::TooFewPlayers { have: 2 }));
    }

    #[test]
    fn test_hint_never_contains_word() {
        for category in Category::ALL {
            for (word, hint) in entries(category) {
                assert!(
                    !hint.to_lowercase().contains(&word.to_lowercase()),
                    "hint for {:?} gives away the word",
                    word
                );
            }
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Movies.to_string(), "Movies");
        assert_eq!(Category::Places.as_str(), "Places");
    }
}
