//! Difference annotation
//!
//!     For every item the six tier pairs are compared by exact value: a boolean never equals a
//!     text value. The result is kept in a [PairFlags] record, which drives three class lists:
//!
//!     - cell_class: one `Cell(pair)` token per differing pair
//!     - row_class: `RowDifference` when any pair differs
//!     - table_class: `TableDesktop` when any item of the table differs, then one
//!       `Table(pair)` token per pair differing in at least one item
//!
//!     Tokens always follow the fixed [TierPair::ALL] order. Annotation only reads tier
//!     values, so running it again on an annotated table yields the same classes.

use crate::model::{ClassList, ClassToken, Document, Item, Table, TierPair};

/// Which tier pairs differ, for one item or accumulated over a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairFlags {
    pub standard_vs_premium: bool,
    pub standard_vs_deluxe: bool,
    pub standard_vs_enterprise: bool,
    pub premium_vs_deluxe: bool,
    pub premium_vs_enterprise: bool,
    pub deluxe_vs_enterprise: bool,
}

impl PairFlags {
    /// Compare the tiers of one item.
    pub fn of(item: &Item) -> Self {
        let differs = |pair: TierPair| {
            let (a, b) = pair.tiers();
            item.tier(a) != item.tier(b)
        };

        PairFlags {
            standard_vs_premium: differs(TierPair::StandardVsPremium),
            standard_vs_deluxe: differs(TierPair::StandardVsDeluxe),
            standard_vs_enterprise: differs(TierPair::StandardVsEnterprise),
            premium_vs_deluxe: differs(TierPair::PremiumVsDeluxe),
            premium_vs_enterprise: differs(TierPair::PremiumVsEnterprise),
            deluxe_vs_enterprise: differs(TierPair::DeluxeVsEnterprise),
        }
    }

    pub fn get(&self, pair: TierPair) -> bool {
        match pair {
            TierPair::StandardVsPremium => self.standard_vs_premium,
            TierPair::StandardVsDeluxe => self.standard_vs_deluxe,
            TierPair::StandardVsEnterprise => self.standard_vs_enterprise,
            TierPair::PremiumVsDeluxe => self.premium_vs_deluxe,
            TierPair::PremiumVsEnterprise => self.premium_vs_enterprise,
            TierPair::DeluxeVsEnterprise => self.deluxe_vs_enterprise,
        }
    }

    /// Pairwise OR
    pub fn union(self, other: PairFlags) -> PairFlags {
        PairFlags {
            standard_vs_premium: self.standard_vs_premium || other.standard_vs_premium,
            standard_vs_deluxe: self.standard_vs_deluxe || other.standard_vs_deluxe,
            standard_vs_enterprise: self.standard_vs_enterprise || other.standard_vs_enterprise,
            premium_vs_deluxe: self.premium_vs_deluxe || other.premium_vs_deluxe,
            premium_vs_enterprise: self.premium_vs_enterprise || other.premium_vs_enterprise,
            deluxe_vs_enterprise: self.deluxe_vs_enterprise || other.deluxe_vs_enterprise,
        }
    }

    pub fn any(&self) -> bool {
        TierPair::ALL.into_iter().any(|pair| self.get(pair))
    }

    /// The flagged pairs, in fixed order
    pub fn set_pairs(&self) -> impl Iterator<Item = TierPair> + '_ {
        TierPair::ALL.into_iter().filter(move |pair| self.get(*pair))
    }
}

/// Annotation knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Whether initially hidden items count towards the table classes
    pub count_hidden_items: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptions {
            count_hidden_items: true,
        }
    }
}

pub fn cell_classes(flags: &PairFlags) -> ClassList {
    flags.set_pairs().map(ClassToken::Cell).collect()
}

pub fn row_classes(flags: &PairFlags) -> ClassList {
    if flags.any() {
        [ClassToken::RowDifference].into_iter().collect()
    } else {
        ClassList::new()
    }
}

pub fn table_classes(flags: &PairFlags) -> ClassList {
    let desktop = flags.any().then_some(ClassToken::TableDesktop);
    desktop
        .into_iter()
        .chain(flags.set_pairs().map(ClassToken::Table))
        .collect()
}

/// Set the class lists of `table` and its items. Returns the table accumulator.
pub fn annotate_table(table: &mut Table, options: &AnnotateOptions) -> PairFlags {
    let mut table_flags = PairFlags::default();

    for item in &mut table.items {
        let flags = PairFlags::of(item);
        item.cell_class = cell_classes(&flags);
        item.row_class = row_classes(&flags);

        if options.count_hidden_items || !item.is_initially_hidden() {
            table_flags = table_flags.union(flags);
        }
    }

    table.table_class = table_classes(&table_flags);
    table_flags
}

pub fn annotate_document(document: &mut Document, options: &AnnotateOptions) {
    for table in &mut document.tables {
        annotate_table(table, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn item(tiers: [CellValue; 4]) -> Item {
        Item::with_tiers("feature", tiers)
    }

    #[test]
    fn test_premium_differs() {
        let flags = PairFlags::of(&item([
            true.into(),
            false.into(),
            true.into(),
            true.into(),
        ]));
        let set: Vec<_> = flags.set_pairs().collect();
        assert_eq!(
            set,
            vec![
                TierPair::StandardVsPremium,
                TierPair::PremiumVsDeluxe,
                TierPair::PremiumVsEnterprise,
            ]
        );
    }

    #[test]
    fn test_bool_never_equals_text() {
        let flags = PairFlags::of(&item([
            true.into(),
            "true".into(),
            "TRUE".into(),
            true.into(),
        ]));
        assert!(flags.standard_vs_premium);
        assert!(flags.standard_vs_deluxe);
        assert!(!flags.standard_vs_enterprise);
        assert!(flags.premium_vs_deluxe);
    }

    #[test]
    fn test_equal_tiers_have_no_classes() {
        let mut table = Table::new("Limits");
        table.items.push(item([
            "Unlimited".into(),
            "Unlimited".into(),
            "Unlimited".into(),
            "Unlimited".into(),
        ]));
        let flags = annotate_table(&mut table, &AnnotateOptions::default());

        assert!(!flags.any());
        assert!(table.items[0].cell_class.is_empty());
        assert!(table.items[0].row_class.is_empty());
        assert!(table.table_class.is_empty());
    }

    #[test]
    fn test_table_class_accumulates_items() {
        let mut table = Table::new("Mixed");
        table.items.push(item([
            true.into(),
            true.into(),
            true.into(),
            false.into(),
        ]));
        table.items.push(item([
            "1".into(),
            "2".into(),
            "2".into(),
            "2".into(),
        ]));
        annotate_table(&mut table, &AnnotateOptions::default());

        assert_eq!(
            table.table_class.to_variable_string(),
            "$table_desktop $table_standard_vs_premium $table_standard_vs_deluxe \
             $table_standard_vs_enterprise $table_premium_vs_enterprise $table_deluxe_vs_enterprise"
        );
        assert_eq!(
            table.items[0].cell_class.to_variable_string(),
            "$cell_standard_vs_enterprise $cell_premium_vs_enterprise $cell_deluxe_vs_enterprise"
        );
        assert_eq!(table.items[0].row_class.to_variable_string(), "$row_difference");
    }

    #[test]
    fn test_hidden_items_can_be_left_out_of_table_class() {
        let mut table = Table::new("Hidden");
        let mut hidden = item([true.into(), false.into(), false.into(), false.into()]);
        hidden.initially_hidden = Some(CellValue::Bool(true));
        table.items.push(hidden);

        let options = AnnotateOptions {
            count_hidden_items: false,
        };
        annotate_table(&mut table, &options);
        assert!(table.table_class.is_empty());
        assert!(!table.items[0].row_class.is_empty());

        annotate_table(&mut table, &AnnotateOptions::default());
        assert!(table.table_class.contains(ClassToken::TableDesktop));
    }
}
