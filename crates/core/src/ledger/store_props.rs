//! Property tests for the store's balance bookkeeping.

use caixa_shared::Cpf;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::compute_balance;
use super::error::LedgerError;
use super::store::LedgerStore;

#[derive(Debug, Clone)]
enum Action {
    Deposit(Decimal),
    Withdraw(Decimal),
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        amount_strategy().prop_map(Action::Deposit),
        amount_strategy().prop_map(Action::Withdraw),
    ]
}

fn actions_strategy(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance field always equals the statement fold, and both equal
    /// the running sum of the operations that were actually accepted.
    #[test]
    fn prop_balance_field_matches_statement_fold(actions in actions_strategy(40)) {
        let mut store = LedgerStore::new();
        let cpf = Cpf::from("111");
        store.create(cpf.clone(), "Prop").expect("create");

        let mut expected = Decimal::ZERO;
        for action in actions {
            match action {
                Action::Deposit(amount) => {
                    store.deposit(&cpf, None, amount).expect("deposit");
                    expected += amount;
                }
                Action::Withdraw(amount) => match store.withdraw(&cpf, amount) {
                    Ok(_) => expected -= amount,
                    Err(LedgerError::InsufficientFunds) => {
                        prop_assert!(expected < amount);
                    }
                    Err(other) => return Err(TestCaseError::fail(other.to_string())),
                },
            }
        }

        let customer = store.find_by_cpf(&cpf).expect("customer");
        prop_assert_eq!(customer.balance, expected);
        prop_assert_eq!(compute_balance(&customer.statement), expected);
    }

    /// A rejected withdrawal is a complete no-op.
    #[test]
    fn prop_failed_withdraw_mutates_nothing(
        deposit in amount_strategy(),
        excess in amount_strategy(),
    ) {
        let mut store = LedgerStore::new();
        let cpf = Cpf::from("111");
        store.create(cpf.clone(), "Prop").expect("create");
        store.deposit(&cpf, None, deposit).expect("deposit");

        let over = deposit + excess + Decimal::ONE;
        prop_assert!(matches!(
            store.withdraw(&cpf, over),
            Err(LedgerError::InsufficientFunds)
        ));

        let customer = store.find_by_cpf(&cpf).expect("customer");
        prop_assert_eq!(customer.statement.len(), 1);
        prop_assert_eq!(customer.balance, deposit);
    }

    /// Registration under an existing key always fails, whatever the name.
    #[test]
    fn prop_duplicate_cpf_always_rejected(name in "[a-zA-Z ]{1,24}") {
        let mut store = LedgerStore::new();
        let cpf = Cpf::from("111");
        store.create(cpf.clone(), "First").expect("create");

        prop_assert!(matches!(
            store.create(cpf, name),
            Err(LedgerError::CustomerAlreadyExists)
        ));
    }
}
