//! The mock value generator backing every endpoint.
//!
//! One [`MockGenerator`] is created at startup and shared through the
//! application state. It wraps a seedable RNG behind a mutex so concurrent
//! requests can draw from it without coordination; no two requests need any
//! ordering relationship between their draws.

use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::{Span, Zoned};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serializer;
use uuid::Builder;

use super::text;

/// Live-stream lifecycle status, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStatus {
    /// 0 - scheduled but not started
    NotStarted,
    /// 1 - currently live
    Live,
    /// 2 - finished
    Ended,
}

impl LiveStatus {
    /// Numeric wire representation.
    pub fn as_u8(self) -> u8 {
        match self {
            LiveStatus::NotStarted => 0,
            LiveStatus::Live => 1,
            LiveStatus::Ended => 2,
        }
    }
}

impl serde::Serialize for LiveStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Cloneable handle over a shared random source.
///
/// Cloning is cheap; all clones draw from the same underlying RNG, which is
/// what makes a configured seed reproduce the full output stream of the
/// process.
#[derive(Clone)]
pub struct MockGenerator {
    rng: Arc<Mutex<StdRng>>,
}

impl MockGenerator {
    /// Create a generator seeded from OS entropy (the default mode).
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic generator for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A poisoned lock only means another request panicked mid-draw; the
        // RNG state itself is always valid.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Uniform integer from an inclusive range.
    pub fn int(&self, range: RangeInclusive<i64>) -> i64 {
        self.lock().random_range(range)
    }

    /// Fair coin flip.
    pub fn coin_flip(&self) -> bool {
        self.lock().random()
    }

    /// Uniform pick from a string pool.
    pub fn choose<'a>(&self, pool: &'a [&'a str]) -> &'a str {
        let mut rng = self.lock();
        pool.choose(&mut *rng).copied().unwrap_or_default()
    }

    /// Random v4 UUID built from generator bytes, so a configured seed also
    /// reproduces identifiers.
    pub fn uuid(&self) -> String {
        let bytes: [u8; 16] = self.lock().random();
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    /// Chinese display name: surname plus given name.
    pub fn nickname(&self) -> String {
        format!(
            "{}{}",
            self.choose(text::SURNAMES),
            self.choose(text::GIVEN_NAMES)
        )
    }

    /// ASCII login name.
    pub fn username(&self) -> String {
        format!("{}{}", self.choose(text::USERNAME_WORDS), self.int(1..=999))
    }

    pub fn email(&self) -> String {
        format!("{}@{}", self.username(), self.choose(text::EMAIL_DOMAINS))
    }

    /// Mainland mobile number: known 3-digit prefix plus 8 digits.
    pub fn phone(&self) -> String {
        format!(
            "{}{:08}",
            self.choose(text::PHONE_PREFIXES),
            self.int(0..=99_999_999)
        )
    }

    /// Stable image URL of the requested dimensions.
    pub fn image_url(&self, width: u32, height: u32) -> String {
        format!(
            "https://picsum.photos/seed/{}/{}/{}",
            self.int(1..=9999),
            width,
            height
        )
    }

    /// Short phrase sentence of roughly `words` words.
    pub fn sentence(&self, words: usize) -> String {
        let mut out = String::new();
        for _ in 0..words {
            out.push_str(self.choose(text::WORDS));
        }
        out.push('。');
        out
    }

    /// Multi-sentence free text.
    pub fn paragraph(&self, sentences: usize) -> String {
        (0..sentences).map(|_| self.sentence(4)).collect()
    }

    pub fn word(&self) -> String {
        self.choose(text::WORDS).to_string()
    }

    /// 2 to 5 tag words.
    pub fn tags(&self) -> Vec<String> {
        let count = self.int(2..=5);
        (0..count).map(|_| self.word()).collect()
    }

    pub fn category(&self) -> String {
        self.choose(text::CATEGORIES).to_string()
    }

    /// Gender code: 0 unknown, 1 male, 2 female.
    pub fn gender(&self) -> u8 {
        self.int(0..=2) as u8
    }

    /// User level in [1, 10].
    pub fn level(&self) -> u8 {
        self.int(1..=10) as u8
    }

    pub fn live_status(&self) -> LiveStatus {
        match self.int(0..=2) {
            0 => LiveStatus::NotStarted,
            1 => LiveStatus::Live,
            _ => LiveStatus::Ended,
        }
    }

    /// Random local datetime between the start of the current week (Monday
    /// 00:00) and now.
    pub fn datetime_this_week(&self) -> Zoned {
        let now = Zoned::now();
        let days = i64::from(now.weekday().to_monday_zero_offset());
        let budget = days * 86_400 + seconds_since_midnight(&now);
        self.backdate(now, budget)
    }

    /// Random local datetime between January 1st of the current year and now.
    pub fn datetime_this_year(&self) -> Zoned {
        let now = Zoned::now();
        let days = i64::from(now.date().day_of_year()) - 1;
        let budget = days * 86_400 + seconds_since_midnight(&now);
        self.backdate(now, budget)
    }

    fn backdate(&self, now: Zoned, budget_seconds: i64) -> Zoned {
        let back = self.int(0..=budget_seconds.max(0));
        now.checked_sub(Span::new().seconds(back))
            .expect("backdate span stays within one year")
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn seconds_since_midnight(now: &Zoned) -> i64 {
    let time = now.time();
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_seeded_generators_agree() {
        let a = MockGenerator::from_seed(42);
        let b = MockGenerator::from_seed(42);
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.nickname(), b.nickname());
        assert_eq!(a.phone(), b.phone());
        assert_eq!(a.int(0..=1_000_000), b.int(0..=1_000_000));
    }

    #[test]
    fn test_clones_share_the_random_stream() {
        let a = MockGenerator::from_seed(7);
        let b = a.clone();
        let reference = MockGenerator::from_seed(7);
        // Interleaved draws over clones follow the single stream.
        assert_eq!(a.uuid(), reference.uuid());
        assert_eq!(b.uuid(), reference.uuid());
    }

    #[test]
    fn test_uuid_is_version_4() {
        let generator = MockGenerator::from_seed(1);
        let id = Uuid::parse_str(&generator.uuid()).expect("valid uuid");
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_phone_is_eleven_digits() {
        let generator = MockGenerator::from_seed(2);
        for _ in 0..32 {
            let phone = generator.phone();
            assert_eq!(phone.len(), 11);
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
            assert!(phone.starts_with('1'));
        }
    }

    #[test]
    fn test_value_ranges() {
        let generator = MockGenerator::from_seed(3);
        for _ in 0..64 {
            assert!(generator.gender() <= 2);
            let level = generator.level();
            assert!((1..=10).contains(&level));
            let tags = generator.tags();
            assert!((2..=5).contains(&tags.len()));
        }
    }

    #[test]
    fn test_email_has_local_and_domain_parts() {
        let generator = MockGenerator::from_seed(4);
        let email = generator.email();
        let (local, domain) = email.split_once('@').expect("email contains @");
        assert!(!local.is_empty());
        assert!(domain.contains('.'));
    }

    #[test]
    fn test_backdated_times_are_in_the_past() {
        let generator = MockGenerator::from_seed(5);
        let now = Zoned::now();
        for _ in 0..16 {
            let week = generator.datetime_this_week();
            let year = generator.datetime_this_year();
            assert!(week <= now);
            assert!(year <= now);
            // Within the rolling bounds plus a generous scheduling slack.
            let week_age = now.timestamp().as_second() - week.timestamp().as_second();
            assert!(week_age <= 7 * 86_400 + 60);
        }
    }

    #[test]
    fn test_live_status_codes() {
        assert_eq!(LiveStatus::NotStarted.as_u8(), 0);
        assert_eq!(LiveStatus::Live.as_u8(), 1);
        assert_eq!(LiveStatus::Ended.as_u8(), 2);
        let json = serde_json::to_string(&LiveStatus::Ended).expect("serialize");
        assert_eq!(json, "2");
    }
}
