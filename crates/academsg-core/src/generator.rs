//! Random message generation.
//!
//! A [`MessageGenerator`] picks a professor, a course and a template for the
//! requested category uniformly at random and renders the template. Clock
//! times and dates are only drawn when the chosen template asks for them.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDate};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, COURSES, PROFESSORS};
use crate::error::CoreError;
use crate::record::MessageRecord;
use crate::template::{Placeholder, Template};

/// Earliest hour a time placeholder can take.
pub const FIRST_HOUR: u32 = 8;
/// Latest hour a time placeholder can take (its `:30` slot included).
pub const LAST_HOUR: u32 = 18;
/// Date placeholders fall this many days ahead, inclusive.
pub const MIN_DAYS_AHEAD: i64 = 1;
pub const MAX_DAYS_AHEAD: i64 = 7;

/// Category requested on the command line: a fixed kind, or a fresh random
/// pick for every generated message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryChoice {
    Fixed(Category),
    #[default]
    Random,
}

impl CategoryChoice {
    pub const RANDOM_NAME: &'static str = "aleatorio";

    /// Category to use for the next message.
    pub fn resolve(self, generator: &mut MessageGenerator) -> Category {
        match self {
            CategoryChoice::Fixed(category) => category,
            CategoryChoice::Random => generator.random_category(),
        }
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::Fixed(category) => fmt::Display::fmt(category, f),
            CategoryChoice::Random => f.write_str(Self::RANDOM_NAME),
        }
    }
}

impl FromStr for CategoryChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case(Self::RANDOM_NAME) || name.eq_ignore_ascii_case("random") {
            return Ok(CategoryChoice::Random);
        }
        name.parse().map(CategoryChoice::Fixed)
    }
}

impl TryFrom<String> for CategoryChoice {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryChoice> for String {
    fn from(choice: CategoryChoice) -> Self {
        choice.to_string()
    }
}

/// Seedable message generator.
pub struct MessageGenerator {
    rng: Mcg128Xsl64,
    today: NaiveDate,
}

impl MessageGenerator {
    /// Generator seeded from entropy, using the local date as "today".
    pub fn new() -> Self {
        Self::from_seed(None)
    }

    /// Generator with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_seed(Some(seed))
    }

    /// Seeded when `seed` is `Some`, random otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self {
            rng,
            today: Local::now().date_naive(),
        }
    }

    /// Override the reference date used for date placeholders.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Build a message of the given category.
    pub fn generate(&mut self, category: Category) -> MessageRecord {
        let professor = self.pick(PROFESSORS);
        let course = self.pick(COURSES);
        let template = Template::new(self.pick(category.templates()));

        tracing::debug!(%category, professor, course, template = template.as_str(), "selected");

        let message = template.render(|placeholder| match placeholder {
            Placeholder::Course => course.to_string(),
            Placeholder::Time => self.random_time(),
            Placeholder::Date => self.random_date().format("%d/%m").to_string(),
        });

        MessageRecord {
            category,
            professor: professor.to_string(),
            course: course.to_string(),
            message,
        }
    }

    /// Build a message of a uniformly chosen category.
    pub fn generate_any(&mut self) -> MessageRecord {
        let category = self.random_category();
        self.generate(category)
    }

    pub fn random_category(&mut self) -> Category {
        Category::ALL[self.rng.gen_range(0..Category::ALL.len())]
    }

    /// Clock time in half-hour steps between 08:00 and 18:30, as `HH:MM`.
    pub fn random_time(&mut self) -> String {
        let hour = self.rng.gen_range(FIRST_HOUR..=LAST_HOUR);
        let minute = if self.rng.gen_bool(0.5) { 30 } else { 0 };
        format!("{hour:02}:{minute:02}")
    }

    /// Date one to seven days after `today`.
    pub fn random_date(&mut self) -> NaiveDate {
        let days = self.rng.gen_range(MIN_DAYS_AHEAD..=MAX_DAYS_AHEAD);
        self.today + Duration::days(days)
    }

    // Catalog slices are non-empty constants.
    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items[self.rng.gen_range(0..items.len())]
    }
}

impl Default for MessageGenerator {
    fn default() -> Self {
        Self::new()
    }
}
