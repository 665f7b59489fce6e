//! Property tests for purchase settlement and money conservation.

use proptest::prelude::*;

use star_notary::{AccountId, AssetId, InMemoryBank, Money, Notary, RegistryInfo};

const USERS: usize = 4;

fn user(n: usize) -> AccountId {
    AccountId::new(format!("user{n}"))
}

/// One registry call with inputs drawn from a small pool, so sequences hit
/// resales, rejected purchases, and listings consumed by transfers often.
#[derive(Debug, Clone)]
enum Op {
    Create { id: u64, actor: usize },
    List { id: u64, price: u128, actor: usize },
    Purchase { id: u64, paid: u128, actor: usize },
    Transfer { id: u64, to: usize, actor: usize },
    Exchange { a: u64, b: u64, actor: usize },
}

fn op() -> impl Strategy<Value = Op> {
    let id = 0u64..6;
    let actor = 0usize..USERS;
    prop_oneof![
        (id.clone(), actor.clone()).prop_map(|(id, actor)| Op::Create { id, actor }),
        (id.clone(), 0u128..1_000, actor.clone())
            .prop_map(|(id, price, actor)| Op::List { id, price, actor }),
        (id.clone(), 0u128..2_000, actor.clone())
            .prop_map(|(id, paid, actor)| Op::Purchase { id, paid, actor }),
        (id.clone(), 0usize..USERS, actor.clone())
            .prop_map(|(id, to, actor)| Op::Transfer { id, to, actor }),
        (id.clone(), id, actor).prop_map(|(a, b, actor)| Op::Exchange { a, b, actor }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a successful purchase moves exactly the listing price from
    /// buyer to seller; the bank's total supply never changes.
    #[test]
    fn property_purchase_conserves_money(
        price in 1u128..1_000_000,
        excess in 0u128..1_000_000,
        buyer_cushion in 0u128..1_000_000,
        seller_start in 0u128..1_000_000,
    ) {
        let price = Money::new(price);
        let paid = price.checked_add(Money::new(excess)).unwrap();
        let buyer_start = price.checked_add(Money::new(buyer_cushion)).unwrap();
        let seller_start = Money::new(seller_start);

        let mut bank = InMemoryBank::new();
        bank.deposit(&user(1), seller_start);
        bank.deposit(&user(2), buyer_start);
        let total_before = bank.total();

        let mut notary = Notary::new(RegistryInfo::default(), bank);
        let id = AssetId::new(1);
        notary.create_star(id, "awesome star", &user(1)).unwrap();
        notary.list_for_sale(id, price, &user(1)).unwrap();

        let receipt = notary.purchase(id, &user(2), paid).unwrap();

        prop_assert_eq!(receipt.price, price);
        prop_assert_eq!(receipt.price.checked_add(receipt.refund), Some(paid));
        prop_assert_eq!(
            notary.gateway().balance_of(&user(1)),
            seller_start.checked_add(price).unwrap()
        );
        prop_assert_eq!(
            notary.gateway().balance_of(&user(2)),
            buyer_start.checked_sub(price).unwrap()
        );
        prop_assert_eq!(notary.gateway().total(), total_before);
    }

    /// PROPERTY: a rejected purchase moves no money at all.
    #[test]
    fn property_failed_purchase_moves_nothing(
        price in 1u128..1_000_000,
        shortfall in 1u128..1_000_000,
    ) {
        let price = Money::new(price);
        let paid = price.checked_sub(Money::new(shortfall)).unwrap_or(Money::ZERO);

        let mut bank = InMemoryBank::new();
        bank.deposit(&user(2), Money::new(2_000_000));
        let mut notary = Notary::new(RegistryInfo::default(), bank);

        let id = AssetId::new(1);
        notary.create_star(id, "awesome star", &user(1)).unwrap();
        notary.list_for_sale(id, price, &user(1)).unwrap();

        prop_assert!(notary.purchase(id, &user(2), paid).is_err());
        prop_assert_eq!(notary.gateway().balance_of(&user(1)), Money::ZERO);
        prop_assert_eq!(notary.gateway().balance_of(&user(2)), Money::new(2_000_000));
        prop_assert_eq!(notary.owner_of(id).unwrap(), user(1));
        prop_assert_eq!(notary.sale_price(id), Some(price));
    }

    /// PROPERTY: across any sequence of calls the bank's total supply never
    /// changes, and every account's balance moves only by the receipts of
    /// the purchases it took part in.
    #[test]
    fn property_op_soup_conserves_money(
        ops in proptest::collection::vec(op(), 0..60)
    ) {
        const START: u128 = 1_000_000;

        let mut bank = InMemoryBank::new();
        for n in 0..USERS {
            bank.deposit(&user(n), Money::new(START));
        }
        let total = bank.total();

        let mut notary = Notary::new(RegistryInfo::default(), bank);
        let mut expected: std::collections::BTreeMap<AccountId, u128> =
            (0..USERS).map(|n| (user(n), START)).collect();

        for op in &ops {
            match op {
                Op::Create { id, actor } => {
                    let _ = notary.create_star(AssetId::new(*id), "star", &user(*actor));
                }
                Op::List { id, price, actor } => {
                    let _ = notary.list_for_sale(
                        AssetId::new(*id),
                        Money::new(*price),
                        &user(*actor),
                    );
                }
                Op::Purchase { id, paid, actor } => {
                    let buyer = user(*actor);
                    if let Ok(receipt) =
                        notary.purchase(AssetId::new(*id), &buyer, Money::new(*paid))
                    {
                        // Self-purchase is rejected, so seller and buyer are
                        // always distinct entries.
                        *expected.get_mut(&receipt.seller).unwrap() +=
                            receipt.price.base_units();
                        *expected.get_mut(&buyer).unwrap() -= receipt.price.base_units();
                    }
                }
                Op::Transfer { id, to, actor } => {
                    let _ = notary.transfer_star(AssetId::new(*id), &user(*to), &user(*actor));
                }
                Op::Exchange { a, b, actor } => {
                    let _ = notary.exchange_stars(
                        AssetId::new(*a),
                        AssetId::new(*b),
                        &user(*actor),
                    );
                }
            }
            prop_assert_eq!(notary.gateway().total(), total);
        }

        for (account, balance) in &expected {
            prop_assert_eq!(notary.gateway().balance_of(account), Money::new(*balance));
        }
    }
}
