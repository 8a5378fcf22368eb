use crate::utils::error::Result;
use crate::utils::validation::validate_age;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Shared handle to a character owned by a [`crate::DataService`].
///
/// Holders may mutate `name` and `age` through it. Equality compares the
/// characters inside, never the handles.
///
/// # Panics
///
/// Comparing handles (`==`, `Vec::contains`) borrows both characters and
/// panics if either is mutably borrowed at that moment. Service lookups by
/// name or race skip such members instead.
pub type CharacterRef = Rc<RefCell<Character>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Race {
    Hobbit,
    Maia,
    Dwarf,
    Elf,
    Man,
    Orc,
}

impl Race {
    pub const ALL: [Race; 6] = [
        Race::Hobbit,
        Race::Maia,
        Race::Dwarf,
        Race::Elf,
        Race::Man,
        Race::Orc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Race::Hobbit => "Hobbit",
            Race::Maia => "Maia",
            Race::Dwarf => "Dwarf",
            Race::Elf => "Elf",
            Race::Man => "Man",
            Race::Orc => "Orc",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Race::ALL
            .into_iter()
            .find(|race| race.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown race: {}", s))
    }
}

/// The three Elven rings and the One Ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ring {
    Nenya,
    Narya,
    Vilya,
    OneRing,
}

impl Ring {
    pub fn name(&self) -> &'static str {
        match self {
            Ring::Nenya => "Nenya",
            Ring::Narya => "Narya",
            Ring::Vilya => "Vilya",
            Ring::OneRing => "The One Ring",
        }
    }

    pub fn is_elven(&self) -> bool {
        !matches!(self, Ring::OneRing)
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named individual. Equality and hashing cover all three fields, so a
/// character must not stay a hash key while its name or age changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    name: String,
    age: u32,
    race: Race,
}

impl Character {
    pub fn new(name: impl Into<String>, age: u32, race: Race) -> Self {
        Self {
            name: name.into(),
            age,
            race,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn race(&self) -> Race {
        self.race
    }

    /// Fails with `InvalidArgument` for negative ages; the stored age is
    /// left untouched on failure.
    pub fn set_age(&mut self, age: i64) -> Result<()> {
        self.age = validate_age(age)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn into_ref(self) -> CharacterRef {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} years old {}", self.name, self.age, self.race)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Film {
    title: String,
    release_date: DateTime<Utc>,
    duration: String,
}

impl Film {
    pub fn new(
        title: impl Into<String>,
        release_date: DateTime<Utc>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_date,
            duration: duration.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DataError;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_character_initialization() {
        let frodo = Character::new("Frodo", 33, Race::Hobbit);
        assert_eq!(frodo.name(), "Frodo");
        assert_eq!(frodo.age(), 33);
        assert_eq!(frodo.race(), Race::Hobbit);
        assert_ne!(frodo.name(), "Frodon");
    }

    #[test]
    fn test_character_value_equality() {
        let jake = Character::new("Jake", 43, Race::Hobbit);
        let same_jake = Character::new("Jake", 43, Race::Hobbit);
        let younger_jake = Character::new("Jake", 12, Race::Hobbit);
        let elf_jake = Character::new("Jake", 43, Race::Elf);
        let renamed = Character::new("Jacob", 43, Race::Hobbit);

        assert_eq!(jake, same_jake);
        assert_eq!(hash_of(&jake), hash_of(&same_jake));
        assert_ne!(jake, younger_jake);
        assert_ne!(jake, elf_jake);
        assert_ne!(jake, renamed);
    }

    #[test]
    fn test_equality_follows_mutation() {
        let mut older = Character::new("Sam", 40, Race::Hobbit);
        let sam = Character::new("Sam", 38, Race::Hobbit);
        assert_ne!(older, sam);

        older.set_age(38).unwrap();
        assert_eq!(older, sam);
        assert_eq!(hash_of(&older), hash_of(&sam));
    }

    #[test]
    fn test_set_age_rejects_negative() {
        let mut frodo = Character::new("Frodo", 33, Race::Hobbit);
        let err = frodo.set_age(-1).unwrap_err();

        assert!(matches!(err, DataError::InvalidArgument { .. }));
        assert_eq!(frodo.age(), 33);

        frodo.set_age(0).unwrap();
        assert_eq!(frodo.age(), 0);
    }

    #[test]
    fn test_set_name() {
        let mut gandalf = Character::new("Gandalf", 2020, Race::Maia);
        gandalf.set_name("Mithrandir");
        assert_eq!(gandalf.name(), "Mithrandir");
    }

    #[test]
    fn test_character_display() {
        let frodo = Character::new("Frodo", 33, Race::Hobbit);
        assert_eq!(frodo.to_string(), "Frodo 33 years old Hobbit");
    }

    #[test]
    fn test_shared_handles_compare_by_value() {
        let a = Character::new("Gimli", 139, Race::Dwarf).into_ref();
        let b = Character::new("Gimli", 139, Race::Dwarf).into_ref();
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(a, b);

        b.borrow_mut().set_name("Gloin");
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "already mutably borrowed")]
    fn test_comparing_a_mutably_borrowed_handle_panics() {
        let a = Character::new("Gimli", 139, Race::Dwarf).into_ref();
        let b = a.clone();
        let _guard = a.borrow_mut();
        let _ = vec![b].contains(&Character::new("Gimli", 139, Race::Dwarf).into_ref());
    }

    #[test]
    fn test_race_parsing() {
        assert_eq!("hobbit".parse::<Race>().unwrap(), Race::Hobbit);
        assert_eq!("MAIA".parse::<Race>().unwrap(), Race::Maia);
        assert!("ent".parse::<Race>().is_err());
    }

    #[test]
    fn test_race_display_names() {
        let names: Vec<String> = Race::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["Hobbit", "Maia", "Dwarf", "Elf", "Man", "Orc"]);

        for race in Race::ALL {
            assert_eq!(race.name().parse::<Race>().unwrap(), race);
        }
    }

    #[test]
    fn test_ring_names() {
        assert_eq!(Ring::Nenya.to_string(), "Nenya");
        assert_eq!(Ring::Narya.to_string(), "Narya");
        assert_eq!(Ring::Vilya.to_string(), "Vilya");
        assert_eq!(Ring::OneRing.to_string(), "The One Ring");
        assert!(Ring::Nenya.is_elven());
        assert!(Ring::Narya.is_elven());
        assert!(Ring::Vilya.is_elven());
        assert!(!Ring::OneRing.is_elven());
    }

    #[test]
    fn test_film_value_equality() {
        let now = Utc::now();
        let a = Film::new("the two Towers", now, "179 min");
        let b = Film::new("the two Towers", now, "179 min");
        let c = Film::new("the two Towers", now, "180 min");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "the two Towers (179 min)");

        let later = Film::new("the two Towers", now + chrono::Duration::seconds(1), "179 min");
        assert_ne!(a, later);
        assert_ne!(hash_of(&a), hash_of(&later));
    }

    #[test]
    fn test_serialization() {
        let frodo = Character::new("Frodo", 33, Race::Hobbit);
        let json = serde_json::to_value(&frodo).unwrap();
        assert_eq!(json["race"], "HOBBIT");
        assert_eq!(serde_json::to_value(Ring::OneRing).unwrap(), "oneRing");
    }
}
