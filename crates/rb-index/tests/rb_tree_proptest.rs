use std::collections::BTreeMap;

use proptest::prelude::*;
use rb_index::{RbError, RbTree};

const PROPTEST_CASES: u32 = 256;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Delete(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Delete),
    ]
}

/// Multiset model: key -> number of copies.
#[derive(Clone, Debug)]
enum RawOp {
    Insert(i16),
    BstInsert(i16),
    Rotate(prop::sample::Index, bool),
    Delete(i16),
}

fn raw_op() -> impl Strategy<Value = RawOp> {
    prop_oneof![
        2 => (-16i16..16).prop_map(RawOp::Insert),
        1 => (-16i16..16).prop_map(RawOp::BstInsert),
        2 => (any::<prop::sample::Index>(), any::<bool>())
            .prop_map(|(i, left)| RawOp::Rotate(i, left)),
        2 => (-16i16..16).prop_map(RawOp::Delete),
    ]
}

fn model_keys(model: &BTreeMap<i16, usize>) -> Vec<i16> {
    model
        .iter()
        .flat_map(|(&k, &n)| std::iter::repeat(k).take(n))
        .collect()
}

fn height_bound(n: usize) -> usize {
    (2.0 * ((n + 1) as f64).log2()).floor() as usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn invariants_hold_after_every_op(ops in proptest::collection::vec(op(), 0..200)) {
        let mut tree = RbTree::new();
        let mut model = BTreeMap::<i16, usize>::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert(k);
                    *model.entry(k).or_default() += 1;
                    prop_assert!(tree.contains(&k));
                }
                Op::Delete(k) => {
                    let before: Vec<i16> = tree.inorder().copied().collect();
                    match model.get_mut(&k) {
                        Some(n) => {
                            prop_assert_eq!(tree.delete(&k), Ok(k));
                            *n -= 1;
                            if *n == 0 {
                                model.remove(&k);
                                prop_assert!(!tree.contains(&k));
                            }
                        }
                        None => {
                            prop_assert_eq!(tree.delete(&k), Err(RbError::NotFound));
                            prop_assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), before);
                        }
                    }
                }
            }
            if let Err(err) = tree.validate() {
                return Err(TestCaseError::fail(format!("{err}\n{}", tree.dump())));
            }
            prop_assert_eq!(tree.len(), model.values().sum::<usize>());
            prop_assert!(tree.height() <= height_bound(tree.len()));
        }

        prop_assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), model_keys(&model));
    }

    #[test]
    fn inorder_is_sorted(keys in proptest::collection::vec(any::<i32>(), 0..300)) {
        let tree: RbTree<i32> = keys.iter().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), sorted);
        prop_assert_eq!(tree.preorder().len(), keys.len());
        prop_assert_eq!(tree.postorder().len(), keys.len());
    }

    #[test]
    fn successor_matches_sorted_order(
        keys in proptest::collection::btree_set(-1000i32..1000, 1..200)
    ) {
        let tree: RbTree<i32> = keys.iter().copied().collect();
        let sorted: Vec<i32> = keys.into_iter().collect();
        for pair in sorted.windows(2) {
            prop_assert_eq!(tree.find_successor(&pair[0]), Ok(&pair[1]));
            prop_assert_eq!(tree.find_predecessor(&pair[1]), Ok(&pair[0]));
        }
        let last = *sorted.last().unwrap();
        prop_assert_eq!(tree.find_successor(&last), Err(RbError::NoSuccessor));
        prop_assert_eq!(tree.min(), Ok(&sorted[0]));
        prop_assert_eq!(tree.max(), Ok(&last));
    }

    #[test]
    fn mixed_primitives_keep_order(ops in proptest::collection::vec(raw_op(), 0..120)) {
        let mut tree = RbTree::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            match op {
                RawOp::Insert(k) => {
                    tree.insert(k);
                    model.push(k);
                }
                RawOp::BstInsert(k) => {
                    tree.bst_insert(k);
                    model.push(k);
                }
                RawOp::Rotate(pick, left) => {
                    if model.is_empty() {
                        continue;
                    }
                    let node = tree.find(pick.get(&model)).unwrap();
                    let _ = if left {
                        tree.rotate_left(node)
                    } else {
                        tree.rotate_right(node)
                    };
                }
                RawOp::Delete(k) => match model.iter().position(|&m| m == k) {
                    Some(i) => {
                        prop_assert_eq!(tree.delete(&k), Ok(k));
                        model.swap_remove(i);
                    }
                    None => prop_assert_eq!(tree.delete(&k), Err(RbError::NotFound)),
                },
            }
            model.sort();
            prop_assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), model.clone());
        }

        for k in model.clone() {
            prop_assert_eq!(tree.delete(&k), Ok(k));
        }
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn rotations_preserve_inorder(
        keys in proptest::collection::vec(-100i32..100, 1..64),
        picks in proptest::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..32)
    ) {
        let mut tree = RbTree::new();
        for &k in &keys {
            tree.bst_insert(k);
        }
        let expected: Vec<i32> = tree.inorder().copied().collect();

        for (pick, left) in picks {
            let target = *pick.get(&keys);
            let node = tree.find(&target).unwrap();
            let before: Vec<i32> = tree.preorder().copied().collect();
            let result = if left {
                tree.rotate_left(node)
            } else {
                tree.rotate_right(node)
            };
            if result.is_err() {
                prop_assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), before);
            }
            prop_assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), expected.clone());
        }
    }
}
