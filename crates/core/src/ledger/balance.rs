//! Statement balance calculation.

use rust_decimal::Decimal;

use super::types::Operation;

/// Computes the balance of a statement.
///
/// Left fold over the operations in order: credits add their amount,
/// debits subtract it. An empty statement yields zero.
#[must_use]
pub fn compute_balance(statement: &[Operation]) -> Decimal {
    statement
        .iter()
        .fold(Decimal::ZERO, |acc, operation| {
            acc + operation.kind.signed(operation.amount)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::OperationKind;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn operation(kind: OperationKind, amount: Decimal) -> Operation {
        Operation {
            description: None,
            amount,
            created_at: Utc::now(),
            kind,
        }
    }

    #[test]
    fn test_empty_statement_is_zero() {
        assert_eq!(compute_balance(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_credits_add_debits_subtract() {
        let statement = vec![
            operation(OperationKind::Credit, dec!(100)),
            operation(OperationKind::Debit, dec!(40)),
            operation(OperationKind::Credit, dec!(2.50)),
        ];
        assert_eq!(compute_balance(&statement), dec!(62.50));
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn statement_strategy(max_len: usize) -> impl Strategy<Value = Vec<Operation>> {
        prop::collection::vec(
            (any::<bool>(), amount_strategy()).prop_map(|(credit, amount)| {
                let kind = if credit {
                    OperationKind::Credit
                } else {
                    OperationKind::Debit
                };
                operation(kind, amount)
            }),
            0..=max_len,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The fold equals the sum of signed amounts, regardless of mix.
        #[test]
        fn prop_balance_equals_signed_sum(statement in statement_strategy(30)) {
            let expected: Decimal = statement
                .iter()
                .map(|op| op.kind.signed(op.amount))
                .sum();
            prop_assert_eq!(compute_balance(&statement), expected);
        }

        /// Appending one operation moves the balance by exactly its signed amount.
        #[test]
        fn prop_append_shifts_balance_by_signed_amount(
            mut statement in statement_strategy(20),
            amount in amount_strategy(),
            credit in any::<bool>(),
        ) {
            let before = compute_balance(&statement);
            let kind = if credit { OperationKind::Credit } else { OperationKind::Debit };
            statement.push(operation(kind, amount));
            prop_assert_eq!(compute_balance(&statement), before + kind.signed(amount));
        }
    }
}
