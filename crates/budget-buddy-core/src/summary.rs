//! Per-category spending totals.

use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of amounts in cents.
    pub total_cents: i64,
}

/// Group expenses by category and sum their amounts.
///
/// Results are ordered by descending total. Categories with equal totals keep
/// the order in which they first appear in `expenses`.
#[must_use]
pub fn summarize<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => {
                total.total_cents = total.total_cents.saturating_add(expense.amount_cents);
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total_cents: expense.amount_cents,
            }),
        }
    }

    // Stable sort keeps first-seen order on ties.
    totals.sort_by(|a, b| b.total_cents.cmp(&a.total_cents));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::NewExpense;

    fn expense(category: &str, amount_cents: i64) -> Expense {
        Expense::new(
            "u1".parse().unwrap(),
            NewExpense {
                category: category.to_string(),
                description: "item".to_string(),
                amount_cents,
            },
        )
    }

    #[test]
    fn empty_input_yields_no_totals() {
        assert!(summarize(&Vec::<Expense>::new()).is_empty());
    }

    #[test]
    fn totals_are_grouped_and_sorted() {
        let expenses = vec![
            expense("Food", 450),
            expense("Rent", 120_000),
            expense("Food", 1_050),
            expense("Fun", 2_000),
        ];

        let totals = summarize(&expenses);
        assert_eq!(
            totals,
            vec![
                CategoryTotal { category: "Rent".into(), total_cents: 120_000 },
                CategoryTotal { category: "Fun".into(), total_cents: 2_000 },
                CategoryTotal { category: "Food".into(), total_cents: 1_500 },
            ]
        );
    }

    #[test]
    fn totals_do_not_depend_on_order() {
        let mut expenses = vec![
            expense("A", 100),
            expense("B", 300),
            expense("A", 250),
            expense("C", 5),
        ];
        let forward = summarize(&expenses);
        expenses.reverse();
        let backward = summarize(&expenses);

        assert_eq!(forward, backward);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let expenses = vec![expense("Second", 100), expense("First", 100)];
        let totals = summarize(&expenses);
        assert_eq!(totals[0].category, "Second");
        assert_eq!(totals[1].category, "First");
    }
}
