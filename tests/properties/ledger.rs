//! Property tests for ledger state transitions.

use proptest::prelude::*;

use star_notary::{AccountId, AssetId, Ledger, Money, NotaryError, RegistryInfo};

const USERS: usize = 4;

fn user(n: usize) -> AccountId {
    AccountId::new(format!("user{n}"))
}

fn star_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 !#]{0,15}").unwrap()
}

/// One registry call with inputs drawn from a small pool, so sequences hit
/// duplicates, wrong owners, unlisted purchases, and missing ids often.
#[derive(Debug, Clone)]
enum Op {
    Create { id: u64, name: String, actor: usize },
    List { id: u64, price: u128, actor: usize },
    Settle { id: u64, actor: usize },
    Transfer { id: u64, to: usize, actor: usize },
    Exchange { a: u64, b: u64, actor: usize },
}

fn op() -> impl Strategy<Value = Op> {
    let id = 0u64..6;
    let actor = 0usize..USERS;
    prop_oneof![
        (id.clone(), star_name(), actor.clone())
            .prop_map(|(id, name, actor)| Op::Create { id, name, actor }),
        (id.clone(), 0u128..1_000, actor.clone())
            .prop_map(|(id, price, actor)| Op::List { id, price, actor }),
        (id.clone(), actor.clone()).prop_map(|(id, actor)| Op::Settle { id, actor }),
        (id.clone(), 0usize..USERS, actor.clone())
            .prop_map(|(id, to, actor)| Op::Transfer { id, to, actor }),
        (id.clone(), id, actor).prop_map(|(a, b, actor)| Op::Exchange { a, b, actor }),
    ]
}

fn apply(ledger: &mut Ledger, op: &Op) {
    let _ = match op {
        Op::Create { id, name, actor } => {
            ledger.create_star(AssetId::new(*id), name, &user(*actor))
        }
        Op::List { id, price, actor } => {
            ledger.list_for_sale(AssetId::new(*id), Money::new(*price), &user(*actor))
        }
        Op::Settle { id, actor } => {
            let buyer = user(*actor);
            ledger
                .plan_purchase(AssetId::new(*id), &buyer, Money::new(u128::MAX))
                .and_then(|_| ledger.settle_purchase(AssetId::new(*id), &buyer))
        }
        Op::Transfer { id, to, actor } => {
            ledger.transfer_star(AssetId::new(*id), &user(*to), &user(*actor))
        }
        Op::Exchange { a, b, actor } => ledger
            .exchange_stars(AssetId::new(*a), AssetId::new(*b), &user(*actor))
            .map(|_| ()),
    };
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second create under the same id always fails and leaves
    /// the first record fully intact.
    #[test]
    fn property_ids_are_never_reused(
        id in 0u64..1000,
        first in star_name(),
        second in star_name(),
        owner_a in 0usize..USERS,
        owner_b in 0usize..USERS,
    ) {
        let mut ledger = Ledger::new(RegistryInfo::default());
        ledger.create_star(AssetId::new(id), &first, &user(owner_a)).unwrap();

        let err = ledger
            .create_star(AssetId::new(id), &second, &user(owner_b))
            .unwrap_err();
        prop_assert_eq!(err, NotaryError::DuplicateAsset { id: AssetId::new(id) });
        prop_assert_eq!(ledger.look_up(AssetId::new(id)).unwrap(), first.as_str());
        prop_assert_eq!(ledger.owner_of(AssetId::new(id)).unwrap(), &user(owner_a));
    }

    /// PROPERTY: exchanging the same pair twice restores both owners.
    #[test]
    fn property_exchange_is_an_involution(
        owner_a in 0usize..USERS,
        owner_b in 0usize..USERS,
        initiator_owns_a in any::<bool>(),
    ) {
        let mut ledger = Ledger::new(RegistryInfo::default());
        ledger.create_star(AssetId::new(1), "a", &user(owner_a)).unwrap();
        ledger.create_star(AssetId::new(2), "b", &user(owner_b)).unwrap();

        // Either side may initiate; pick whichever the flag says.
        let initiator = if initiator_owns_a { user(owner_a) } else { user(owner_b) };
        ledger.exchange_stars(AssetId::new(1), AssetId::new(2), &initiator).unwrap();
        ledger.exchange_stars(AssetId::new(1), AssetId::new(2), &initiator).unwrap();

        prop_assert_eq!(ledger.owner_of(AssetId::new(1)).unwrap(), &user(owner_a));
        prop_assert_eq!(ledger.owner_of(AssetId::new(2)).unwrap(), &user(owner_b));
    }

    /// PROPERTY: no sequence of calls panics, deletes a star, renames a
    /// star, or leaves a listing at a zero price.
    #[test]
    fn property_op_soup_preserves_ledger_invariants(
        ops in proptest::collection::vec(op(), 0..60)
    ) {
        let mut ledger = Ledger::new(RegistryInfo::default());
        let mut names: std::collections::BTreeMap<u64, String> = Default::default();

        for op in &ops {
            if let Op::Create { id, name, .. } = op {
                let existed = names.contains_key(id);
                apply(&mut ledger, op);
                if !existed && ledger.look_up(AssetId::new(*id)).is_ok() {
                    names.insert(*id, name.clone());
                }
            } else {
                apply(&mut ledger, op);
            }

            // Stars never disappear and never change name.
            prop_assert_eq!(ledger.star_count(), names.len());
            for (id, name) in &names {
                prop_assert_eq!(ledger.look_up(AssetId::new(*id)).unwrap(), name.as_str());
            }
            // Every listing has a positive price.
            for (_, star) in ledger.iter() {
                if let Some(price) = star.sale_price() {
                    prop_assert!(!price.is_zero());
                }
            }
        }
    }
}
