//! Seeded synthetic-value generation.
//!
//! The original seeding flow consumed a faker library as an opaque capability.
//! Here the same capability is built from a seeded RNG over fixed pools, so
//! the same seed always produces the same data. Values are deliberately
//! Canadian-English flavoured (cities, `A9A 9A9` postal codes) to match the
//! schema's formatting rules.

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty", "Mark",
    "Margaret", "Donald", "Sandra", "Steven", "Ashley", "Paul", "Kimberly", "Andrew", "Emily",
    "Joshua", "Donna", "Kenneth", "Michelle",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee",
    "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young", "Hall",
    "Wright", "King", "Scott", "Green", "Baker", "Adams", "Nelson", "Hill", "Campbell",
    "Mitchell", "Roberts", "Carter", "Tremblay",
];

const STREET_NAMES: [&str; 20] = [
    "Maple", "Oak", "Cedar", "Elm", "Birch", "Spruce", "Willow", "Aspen", "Pine", "Chestnut",
    "Wellington", "King", "Queen", "Victoria", "Bannister", "Lakeshore", "Hillcrest", "Riverside",
    "Meadow", "Sunset",
];

const STREET_SUFFIXES: [&str; 6] = ["Street", "Avenue", "Drive", "Crescent", "Boulevard", "Lane"];

const CITIES: [&str; 20] = [
    "Calgary", "Edmonton", "Toronto", "Vancouver", "Ottawa", "Montreal", "Winnipeg", "Halifax",
    "Regina", "Saskatoon", "Victoria", "Hamilton", "London", "Kingston", "Red Deer", "Lethbridge",
    "Kelowna", "Moncton", "Fredericton", "Guelph",
];

const EMAIL_DOMAINS: [&str; 6] = [
    "example.com",
    "example.net",
    "example.org",
    "mail.example.ca",
    "inbox.example.ca",
    "post.example.ca",
];

// Canada Post never uses D, F, I, O, Q or U in postal codes.
const POSTAL_LETTERS: [char; 20] = [
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

const PHRASE_ADJECTIVES: [&str; 12] = [
    "Adaptive", "Balanced", "Digitized", "Enhanced", "Focused", "Grand", "Hidden", "Inverse",
    "Polarized", "Quantified", "Reverse", "Synchronized",
];

const PHRASE_DESCRIPTORS: [&str; 12] = [
    "Midnight", "Crimson", "Silent", "Golden", "Electric", "Frozen", "Burning", "Distant",
    "Forgotten", "Neon", "Savage", "Wandering",
];

const PHRASE_NOUNS: [&str; 12] = [
    "Horizon", "Protocol", "Paradox", "Frontier", "Gambit", "Odyssey", "Reckoning", "Vendetta",
    "Labyrinth", "Mirage", "Requiem", "Crossing",
];

/// Synthetic-value source backed by a seeded RNG.
///
/// Same seed, same sequence of values. Every method advances the shared RNG,
/// so call order matters for reproducibility.
pub struct Faker {
    rng: StdRng,
    today: NaiveDate,
}

impl Faker {
    /// Create a faker seeded for deterministic output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today: Utc::now().date_naive(),
        }
    }

    /// Access the underlying RNG for ad hoc sampling.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// The date used as "today" for all relative date generation.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn first_name(&mut self) -> &'static str {
        choose(&mut self.rng, &FIRST_NAMES)
    }

    pub fn last_name(&mut self) -> &'static str {
        choose(&mut self.rng, &LAST_NAMES)
    }

    /// A full "First Last" name, e.g. for character role names.
    pub fn full_name(&mut self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    /// A plausible email address. Not guaranteed unique; callers that need
    /// uniqueness resample against their own seen-set.
    pub fn email(&mut self) -> String {
        let first = self.first_name().to_lowercase();
        let last = self.last_name().to_lowercase();
        let num = self.rng.random_range(1..1000u32);
        let domain = choose(&mut self.rng, &EMAIL_DOMAINS);
        format!("{first}.{last}{num}@{domain}")
    }

    /// A street address without city, e.g. `482 Maple Crescent`.
    pub fn street_address(&mut self) -> String {
        let number = self.rng.random_range(1..1000u32);
        let name = choose(&mut self.rng, &STREET_NAMES);
        let suffix = choose(&mut self.rng, &STREET_SUFFIXES);
        format!("{number} {name} {suffix}")
    }

    pub fn city(&mut self) -> &'static str {
        choose(&mut self.rng, &CITIES)
    }

    /// A postal code in the display format `A9A 9A9` (with the space).
    pub fn postal_code(&mut self) -> String {
        let mut code = String::with_capacity(7);
        for i in 0..6 {
            if i == 3 {
                code.push(' ');
            }
            if i % 2 == 0 {
                code.push(choose(&mut self.rng, &POSTAL_LETTERS));
            } else {
                code.push(char::from_digit(self.rng.random_range(0..10), 10).unwrap());
            }
        }
        code
    }

    /// A 16-digit card number in the display format `9999-9999-9999-9999`.
    pub fn credit_card_number(&mut self) -> String {
        let mut groups = Vec::with_capacity(4);
        for _ in 0..4 {
            groups.push(self.digits(4));
        }
        groups.join("-")
    }

    /// A string of exactly `count` random decimal digits.
    pub fn digits(&mut self, count: usize) -> String {
        let mut out = String::with_capacity(count);
        for _ in 0..count {
            out.push(char::from_digit(self.rng.random_range(0..10), 10).unwrap());
        }
        out
    }

    /// A three-word title phrase, e.g. `Hidden Neon Odyssey`.
    pub fn catch_phrase(&mut self) -> String {
        format!(
            "{} {} {}",
            choose(&mut self.rng, &PHRASE_ADJECTIVES),
            choose(&mut self.rng, &PHRASE_DESCRIPTORS),
            choose(&mut self.rng, &PHRASE_NOUNS),
        )
    }

    /// A date sampled uniformly from `[start, end]`. If the bounds are
    /// inverted, `start` is returned.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days();
        if span <= 0 {
            return start;
        }
        start + chrono::Duration::days(self.rng.random_range(0..=span))
    }

    /// A date of birth for someone aged within `[min_age, max_age]` years.
    pub fn date_of_birth(&mut self, min_age: u32, max_age: u32) -> NaiveDate {
        // 366 on the lower bound keeps the youngest strictly past min_age
        // even across leap years.
        let days = self
            .rng
            .random_range(u64::from(min_age) * 366..=u64::from(max_age) * 365);
        self.today - Days::new(days)
    }
}

fn choose<T: Copy, R: Rng>(rng: &mut R, pool: &[T]) -> T {
    // Pools are non-empty consts, so choose never fails.
    *pool.choose(rng).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_values() {
        let mut a = Faker::seeded(42);
        let mut b = Faker::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.email(), b.email());
            assert_eq!(a.postal_code(), b.postal_code());
        }
    }

    #[test]
    fn test_postal_code_shape() {
        let mut faker = Faker::seeded(7);
        for _ in 0..100 {
            let code = faker.postal_code();
            assert_eq!(code.len(), 7);
            let bytes: Vec<char> = code.chars().collect();
            assert!(bytes[0].is_ascii_uppercase());
            assert!(bytes[1].is_ascii_digit());
            assert!(bytes[2].is_ascii_uppercase());
            assert_eq!(bytes[3], ' ');
            assert!(bytes[4].is_ascii_digit());
            assert!(bytes[5].is_ascii_uppercase());
            assert!(bytes[6].is_ascii_digit());
        }
    }

    #[test]
    fn test_credit_card_number_shape() {
        let mut faker = Faker::seeded(7);
        let num = faker.credit_card_number();
        assert_eq!(num.len(), 19);
        assert_eq!(num.matches('-').count(), 3);
        assert_eq!(num.replace('-', "").len(), 16);
    }

    #[test]
    fn test_date_between_bounds() {
        let mut faker = Faker::seeded(7);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        for _ in 0..100 {
            let d = faker.date_between(start, end);
            assert!(d >= start && d <= end);
        }
        // Inverted bounds fall back to start.
        assert_eq!(faker.date_between(end, start), end);
    }

    #[test]
    fn test_date_of_birth_age_bounds() {
        let mut faker = Faker::seeded(7);
        let today = faker.today();
        for _ in 0..100 {
            let dob = faker.date_of_birth(15, 80);
            let age_days = (today - dob).num_days();
            assert!(age_days >= 15 * 365, "younger than 15: {dob}");
            assert!(age_days <= 80 * 366, "older than 80: {dob}");
        }
    }
}
