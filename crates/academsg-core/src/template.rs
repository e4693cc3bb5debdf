//! Placeholder substitution for message templates.

/// Token that a template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{curso}`: course name
    Course,
    /// `{hora}`: clock time, `HH:MM`
    Time,
    /// `{fecha}`: calendar date, `DD/MM`
    Date,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Placeholder::Course, Placeholder::Time, Placeholder::Date];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Course => "{curso}",
            Placeholder::Time => "{hora}",
            Placeholder::Date => "{fecha}",
        }
    }
}

/// A fixed message pattern borrowed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholders present in this template.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.0.contains(p.token()))
            .collect()
    }

    /// Substitute every placeholder.
    ///
    /// `value` is called once per placeholder kind that actually appears, so
    /// auxiliary values are only computed when the template needs them.
    pub fn render<F>(&self, mut value: F) -> String
    where
        F: FnMut(Placeholder) -> String,
    {
        self.placeholders()
            .into_iter()
            .fold(self.0.to_string(), |text, p| {
                text.replace(p.token(), &value(p))
            })
    }
}
