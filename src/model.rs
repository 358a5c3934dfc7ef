//! Feature table data model
//!
//!     A Document is an ordered list of Tables, each owning its Items. Tier values keep their
//!     type (boolean or text) all the way to serialization. The derived class lists are built
//!     from the closed ClassToken set so that a typo can never leak into the output contract.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the four comparable product levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Standard,
    Premium,
    Deluxe,
    Enterprise,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Standard,
        Tier::Premium,
        Tier::Deluxe,
        Tier::Enterprise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Standard => "standard",
            Tier::Premium => "premium",
            Tier::Deluxe => "deluxe",
            Tier::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unordered pair of distinct tiers
///
/// The declaration order is the order class tokens appear in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TierPair {
    StandardVsPremium,
    StandardVsDeluxe,
    StandardVsEnterprise,
    PremiumVsDeluxe,
    PremiumVsEnterprise,
    DeluxeVsEnterprise,
}

impl TierPair {
    pub const ALL: [TierPair; 6] = [
        TierPair::StandardVsPremium,
        TierPair::StandardVsDeluxe,
        TierPair::StandardVsEnterprise,
        TierPair::PremiumVsDeluxe,
        TierPair::PremiumVsEnterprise,
        TierPair::DeluxeVsEnterprise,
    ];

    /// The two tiers of this pair, lower tier first
    pub fn tiers(self) -> (Tier, Tier) {
        match self {
            TierPair::StandardVsPremium => (Tier::Standard, Tier::Premium),
            TierPair::StandardVsDeluxe => (Tier::Standard, Tier::Deluxe),
            TierPair::StandardVsEnterprise => (Tier::Standard, Tier::Enterprise),
            TierPair::PremiumVsDeluxe => (Tier::Premium, Tier::Deluxe),
            TierPair::PremiumVsEnterprise => (Tier::Premium, Tier::Enterprise),
            TierPair::DeluxeVsEnterprise => (Tier::Deluxe, Tier::Enterprise),
        }
    }

    /// The pair made of `a` and `b`, in either order. `None` when `a == b`.
    pub fn between(a: Tier, b: Tier) -> Option<TierPair> {
        Self::ALL.into_iter().find(|pair| {
            let (first, second) = pair.tiers();
            (first == a && second == b) || (first == b && second == a)
        })
    }

    /// `standard_vs_premium`
    pub fn snake_name(self) -> &'static str {
        match self {
            TierPair::StandardVsPremium => "standard_vs_premium",
            TierPair::StandardVsDeluxe => "standard_vs_deluxe",
            TierPair::StandardVsEnterprise => "standard_vs_enterprise",
            TierPair::PremiumVsDeluxe => "premium_vs_deluxe",
            TierPair::PremiumVsEnterprise => "premium_vs_enterprise",
            TierPair::DeluxeVsEnterprise => "deluxe_vs_enterprise",
        }
    }

    /// `standard-vs-premium`
    pub fn kebab_name(self) -> &'static str {
        match self {
            TierPair::StandardVsPremium => "standard-vs-premium",
            TierPair::StandardVsDeluxe => "standard-vs-deluxe",
            TierPair::StandardVsEnterprise => "standard-vs-enterprise",
            TierPair::PremiumVsDeluxe => "premium-vs-deluxe",
            TierPair::PremiumVsEnterprise => "premium-vs-enterprise",
            TierPair::DeluxeVsEnterprise => "deluxe-vs-enterprise",
        }
    }
}

/// A tier or badge cell: either a boolean or free text, never numeric
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// True only for the boolean `true`; text is never truthy.
    pub fn is_true(&self) -> bool {
        matches!(self, CellValue::Bool(true))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Bool(false)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// Closed set of class identifiers emitted into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassToken {
    /// The table differs somewhere on the desktop view
    TableDesktop,
    Table(TierPair),
    RowDifference,
    Cell(TierPair),
}

impl ClassToken {
    /// Every token, in declaration order
    pub fn all() -> Vec<ClassToken> {
        let mut tokens = vec![ClassToken::TableDesktop];
        tokens.extend(TierPair::ALL.into_iter().map(ClassToken::Table));
        tokens.push(ClassToken::RowDifference);
        tokens.extend(TierPair::ALL.into_iter().map(ClassToken::Cell));
        tokens
    }

    /// Name of the variable holding the CSS class, e.g. `cell_premium_vs_deluxe`
    pub fn variable_name(self) -> String {
        match self {
            ClassToken::TableDesktop => "table_desktop".to_string(),
            ClassToken::Table(pair) => format!("table_{}", pair.snake_name()),
            ClassToken::RowDifference => "row_difference".to_string(),
            ClassToken::Cell(pair) => format!("cell_{}", pair.snake_name()),
        }
    }

    /// The CSS class, e.g. `features-table__cell--different-premium-vs-deluxe`
    pub fn css_class(self) -> String {
        match self {
            ClassToken::TableDesktop => "features-table__table--different-desktop".to_string(),
            ClassToken::Table(pair) => {
                format!("features-table__table--different-{}", pair.kebab_name())
            }
            ClassToken::RowDifference => "features-table__row--different".to_string(),
            ClassToken::Cell(pair) => {
                format!("features-table__cell--different-{}", pair.kebab_name())
            }
        }
    }

    pub fn from_variable_name(name: &str) -> Option<ClassToken> {
        Self::all()
            .into_iter()
            .find(|token| token.variable_name() == name)
    }

    pub fn from_css_class(class: &str) -> Option<ClassToken> {
        Self::all().into_iter().find(|token| token.css_class() == class)
    }
}

/// Ordered, space separated list of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassList(Vec<ClassToken>);

impl ClassList {
    pub fn new() -> Self {
        ClassList(Vec::new())
    }

    pub fn push(&mut self, token: ClassToken) {
        self.0.push(token);
    }

    pub fn tokens(&self) -> &[ClassToken] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: ClassToken) -> bool {
        self.0.contains(&token)
    }

    /// `$cell_standard_vs_premium $cell_premium_vs_deluxe`
    pub fn to_variable_string(&self) -> String {
        self.0
            .iter()
            .map(|token| format!("${}", token.variable_name()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `features-table__cell--different-standard-vs-premium ...`
    pub fn to_css_string(&self) -> String {
        self.0
            .iter()
            .map(|token| token.css_class())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse a whitespace separated list of CSS classes.
    ///
    /// Returns the first unknown class on failure.
    pub fn parse_css(text: &str) -> Result<ClassList, String> {
        text.split_whitespace()
            .map(|class| ClassToken::from_css_class(class).ok_or_else(|| class.to_string()))
            .collect()
    }

    /// Parse a whitespace separated list of `$variable` references.
    ///
    /// Returns the first unknown reference on failure.
    pub fn parse_variables(text: &str) -> Result<ClassList, String> {
        text.split_whitespace()
            .map(|reference| {
                reference
                    .strip_prefix('$')
                    .and_then(ClassToken::from_variable_name)
                    .ok_or_else(|| reference.to_string())
            })
            .collect()
    }
}

impl FromIterator<ClassToken> for ClassList {
    fn from_iter<I: IntoIterator<Item = ClassToken>>(iter: I) -> Self {
        ClassList(iter.into_iter().collect())
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css_string())
    }
}

impl<'de> Deserialize<'de> for ClassList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ClassList::parse_css(&text)
            .map_err(|class| serde::de::Error::custom(format!("unknown class '{class}'")))
    }
}

/// One data row of a feature table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub tooltip: String,
    pub standard: CellValue,
    pub premium: CellValue,
    pub deluxe: CellValue,
    pub enterprise: CellValue,
    pub ki_badge: CellValue,
    pub new_badge: CellValue,
    #[serde(default)]
    pub row_class: ClassList,
    #[serde(default)]
    pub cell_class: ClassList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initially_hidden: Option<CellValue>,
}

impl Item {
    /// An item with the given tier values, no tooltip, no badges and no classes yet
    pub fn with_tiers(label: impl Into<String>, tiers: [CellValue; 4]) -> Self {
        let [standard, premium, deluxe, enterprise] = tiers;
        Item {
            label: label.into(),
            tooltip: String::new(),
            standard,
            premium,
            deluxe,
            enterprise,
            ki_badge: CellValue::Bool(false),
            new_badge: CellValue::Bool(false),
            row_class: ClassList::new(),
            cell_class: ClassList::new(),
            initially_hidden: None,
        }
    }

    pub fn tier(&self, tier: Tier) -> &CellValue {
        match tier {
            Tier::Standard => &self.standard,
            Tier::Premium => &self.premium,
            Tier::Deluxe => &self.deluxe,
            Tier::Enterprise => &self.enterprise,
        }
    }

    /// Collapsed on mobile until expanded
    pub fn is_initially_hidden(&self) -> bool {
        self.initially_hidden
            .as_ref()
            .is_some_and(CellValue::is_true)
    }
}

/// A feature table: one heading and the items below it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub heading: String,
    pub ki_badge: bool,
    pub new_badge: bool,
    #[serde(default)]
    pub table_class: ClassList,
    pub items: Vec<Item>,
}

impl Table {
    pub fn new(heading: impl Into<String>) -> Self {
        Table {
            heading: heading.into(),
            ki_badge: false,
            new_badge: false,
            table_class: ClassList::new(),
            items: Vec::new(),
        }
    }
}

/// All tables built from one input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub tables: Vec<Table>,
}

impl Document {
    pub fn new(tables: Vec<Table>) -> Self {
        Document { tables }
    }

    /// Number of items across all tables
    pub fn total_items(&self) -> usize {
        self.tables.iter().map(|table| table.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_between_is_symmetric() {
        for a in Tier::ALL {
            for b in Tier::ALL {
                assert_eq!(TierPair::between(a, b), TierPair::between(b, a));
                assert_eq!(TierPair::between(a, b).is_none(), a == b);
            }
        }
    }

    #[test]
    fn test_class_token_names() {
        let token = ClassToken::Cell(TierPair::PremiumVsDeluxe);
        assert_eq!(token.variable_name(), "cell_premium_vs_deluxe");
        assert_eq!(
            token.css_class(),
            "features-table__cell--different-premium-vs-deluxe"
        );
        assert_eq!(
            ClassToken::TableDesktop.css_class(),
            "features-table__table--different-desktop"
        );
        assert_eq!(
            ClassToken::RowDifference.css_class(),
            "features-table__row--different"
        );
    }

    #[test]
    fn test_class_token_names_are_unique() {
        let all = ClassToken::all();
        assert_eq!(all.len(), 14);
        for token in &all {
            assert_eq!(ClassToken::from_variable_name(&token.variable_name()), Some(*token));
            assert_eq!(ClassToken::from_css_class(&token.css_class()), Some(*token));
        }
    }

    #[test]
    fn test_class_list_rendering() {
        let list: ClassList = [
            ClassToken::TableDesktop,
            ClassToken::Table(TierPair::StandardVsPremium),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            list.to_variable_string(),
            "$table_desktop $table_standard_vs_premium"
        );
        assert_eq!(ClassList::new().to_variable_string(), "");
        assert_eq!(ClassList::parse_variables(&list.to_variable_string()), Ok(list.clone()));
        assert_eq!(ClassList::parse_css(&list.to_css_string()), Ok(list));
    }

    #[test]
    fn test_class_list_rejects_unknown() {
        assert_eq!(
            ClassList::parse_variables("$row_difference $row_diference"),
            Err("$row_diference".to_string())
        );
        assert_eq!(ClassList::parse_css("nope"), Err("nope".to_string()));
    }

    #[test]
    fn test_cell_value_typing() {
        assert_ne!(CellValue::Bool(true), CellValue::from("true"));
        assert_ne!(CellValue::Bool(false), CellValue::from(""));
        assert!(CellValue::Bool(true).is_true());
        assert!(!CellValue::from("TRUE").is_true());
    }

    #[test]
    fn test_document_total_items() {
        let mut first = Table::new("A");
        first.items.push(Item::with_tiers("a", [true.into(), true.into(), true.into(), true.into()]));
        let mut second = Table::new("B");
        second.items.push(Item::with_tiers("b", [true.into(), true.into(), true.into(), true.into()]));
        second.items.push(Item::with_tiers("c", [true.into(), true.into(), true.into(), true.into()]));
        let doc = Document::new(vec![first, second, Table::new("C")]);
        assert_eq!(doc.total_items(), 3);
        assert!(Document::default().is_empty());
    }
}
