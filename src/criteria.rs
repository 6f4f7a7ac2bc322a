//! Search criteria model and wire-format parsing.
//!
//! The `search` query parameter carries zero or more clauses separated by
//! `;`, each of the form `name[operator]=value`. Range clauses take their two
//! operands as `start,end`:
//!
//! ```text
//! GET /inventory?search=storeId[equals]=1;inventoryId[range]=5,10
//! ```
//!
//! Clauses with an unrecognised operator or a shape the parser cannot read
//! are dropped rather than rejected, so a typo broadens the result set
//! instead of failing the request. Unknown *field names* are a hard error,
//! but that check belongs to compilation, not parsing.

use serde::{Deserialize, Serialize};

/// Comparison operator permitted in a search clause.
///
/// The set is closed: the compiler matches on it exhaustively, and anything
/// else in the wire format never makes it past [`SearchOperator::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOperator {
    Equals,
    NotEqual,
    Range,
}

impl SearchOperator {
    /// Parse a wire token. Unrecognised tokens yield `None` and the caller
    /// drops the clause.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "equals" => Some(Self::Equals),
            "notEqual" => Some(Self::NotEqual),
            "range" => Some(Self::Range),
            _ => None,
        }
    }
}

/// One filter clause: a field name, an operator and its operand strings.
///
/// `value` is set for `equals`/`notEqual`, `starting_value`/`ending_value`
/// for `range`. Operands stay as strings here; numeric gating happens during
/// compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchField {
    pub name: String,
    pub operator: SearchOperator,
    pub value: Option<String>,
    pub starting_value: Option<String>,
    pub ending_value: Option<String>,
}

impl SearchField {
    #[must_use]
    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operator: SearchOperator::Equals,
            value: Some(value.into()),
            starting_value: None,
            ending_value: None,
        }
    }

    #[must_use]
    pub fn not_equal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operator: SearchOperator::NotEqual,
            value: Some(value.into()),
            starting_value: None,
            ending_value: None,
        }
    }

    #[must_use]
    pub fn range(
        name: impl Into<String>,
        starting_value: Option<&str>,
        ending_value: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            operator: SearchOperator::Range,
            value: None,
            starting_value: starting_value.map(ToString::to_string),
            ending_value: ending_value.map(ToString::to_string),
        }
    }

    /// Field name as used for allow-list lookup: literal `%20` sequences
    /// removed, surrounding whitespace trimmed. Error messages keep the raw
    /// name.
    pub(crate) fn lookup_name(&self) -> String {
        self.name.replace("%20", "").trim().to_string()
    }
}

/// Ordered collection of search clauses plus the join-column equality
/// constraints that scope a sub-resource listing.
///
/// Clause order is preserved so the compiled expression is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub fields: Vec<SearchField>,
    pub join_columns: Vec<(String, String)>,
}

impl SearchCriteria {
    /// Parse the raw `search` query parameter. A missing or empty parameter
    /// yields empty criteria, which compile to a match-everything predicate.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let fields = raw
            .into_iter()
            .flat_map(|raw| raw.split(';'))
            .filter(|clause| !clause.trim().is_empty())
            .filter_map(parse_clause)
            .collect();
        Self {
            fields,
            join_columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_join_column(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.join_columns.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.join_columns.is_empty()
    }
}

fn parse_clause(clause: &str) -> Option<SearchField> {
    let open = clause.find('[')?;
    let close = open + clause[open..].find(']')?;
    let name = clause[..open].to_string();
    let operator = SearchOperator::parse(&clause[open + 1..close])?;
    let operand = clause[close + 1..].strip_prefix('=')?;

    Some(match operator {
        SearchOperator::Range => {
            let (starting_value, ending_value) = match operand.split_once(',') {
                Some((start, end)) => (some_nonempty(start), some_nonempty(end)),
                None => (some_nonempty(operand), None),
            };
            SearchField {
                name,
                operator,
                value: None,
                starting_value,
                ending_value,
            }
        }
        SearchOperator::Equals | SearchOperator::NotEqual => SearchField {
            name,
            operator,
            value: Some(operand.to_string()),
            starting_value: None,
            ending_value: None,
        },
    })
}

fn some_nonempty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
