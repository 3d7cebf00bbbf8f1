//! Per-dialect term templates.

use bucketquery_foundation::Dialect;

/// A one-parameter template: the term is placed between `prefix` and `suffix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    /// Text before the term.
    pub prefix: &'static str,
    /// Text after the term.
    pub suffix: &'static str,
}

impl Template {
    /// Creates a template.
    #[must_use]
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Appends the template applied to `term` onto `out`.
    pub fn write_to(&self, out: &mut String, term: &str) {
        out.push_str(self.prefix);
        out.push_str(term);
        out.push_str(self.suffix);
    }

    /// Applies the template to `term`.
    #[must_use]
    pub fn apply(&self, term: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + term.len() + self.suffix.len());
        self.write_to(&mut out, term);
        out
    }
}

/// The pair of templates a dialect uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialectTemplates {
    /// Used when the aggregate has exactly one term.
    pub single: Template,
    /// Used for each term when the aggregate has several.
    pub multi: Template,
}

const CATEGORY: DialectTemplates = DialectTemplates {
    single: Template::new("'Category:", "'"),
    multi: Template::new("{'Category:", "'}"),
};

// Monster rendering ignores the single/multi distinction.
const MONSTER_TERM: Template = Template::new("{'dropsline.page_name','", "'}");

const MONSTER: DialectTemplates = DialectTemplates {
    single: MONSTER_TERM,
    multi: MONSTER_TERM,
};

impl DialectTemplates {
    /// Returns the templates for `dialect`.
    #[must_use]
    pub const fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Category => CATEGORY,
            Dialect::Monster => MONSTER,
        }
    }
}
