use std::collections::BTreeSet;

use balanced_bst::{Node, TraversalOrder, Tree, TreeError};
use rand::{seq::SliceRandom, thread_rng, Rng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn in_order_keys(tree: &Tree<i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    let push = |n: &Node<i32>| keys.push(*n.key());
    tree.in_order(Some(push)).unwrap();
    keys
}

fn assert_strictly_increasing(keys: &[i32]) {
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "{:?}", keys);
}

#[test]
fn construct_delete_scenario() {
    init_logger();
    let mut tree = Tree::new(vec![5, 3, 3, 8, 1]);
    assert_eq!(*tree.root().unwrap().key(), 3);
    assert_eq!(in_order_keys(&tree), vec![1, 3, 5, 8]);
    assert!(tree.is_balanced());

    tree.delete(&3);
    assert_eq!(*tree.root().unwrap().key(), 5);
    assert_eq!(in_order_keys(&tree), vec![1, 5, 8]);
}

#[test]
fn construct_dedups_and_balances() {
    init_logger();
    let mut rng = thread_rng();
    for size in [0, 1, 2, 3, 7, 8, 100, 1000] {
        let items: Vec<i32> = (0..size).map(|_| rng.gen_range(0..50)).collect();
        let tree = Tree::new(items.clone());

        let unique: BTreeSet<i32> = items.iter().copied().collect();
        let expected: Vec<i32> = unique.into_iter().collect();
        assert_eq!(in_order_keys(&tree), expected);
        assert_eq!(tree.len(), expected.len());
        assert!(tree.is_balanced());
        assert_eq!(tree.get_stats().height, tree.get_stats().ideal_height());
    }
}

#[test]
fn repeated_insert_keeps_one_copy() {
    let mut tree = Tree::new([10, 20]);
    for _ in 0..50 {
        tree.insert(15);
    }
    assert_eq!(in_order_keys(&tree), vec![10, 15, 20]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn random_ops_match_btreeset() {
    init_logger();
    let mut rng = thread_rng();
    let mut tree: Tree<i32> = Tree::default();
    let mut model = BTreeSet::new();

    for step in 0..5000 {
        let key = rng.gen_range(-500..500);
        match rng.gen_range(0..10) {
            0..=4 => {
                assert_eq!(tree.insert_new(key), model.insert(key));
            }
            5..=7 => {
                let before = in_order_keys(&tree);
                let removed = tree.delete_with_result(&key).is_removed();
                assert_eq!(removed, model.remove(&key));
                if !removed {
                    assert_eq!(in_order_keys(&tree), before);
                }
                assert!(tree.find(&key).is_none());
            }
            8 => {
                assert_eq!(tree.find(&key).map(|n| *n.key()), model.get(&key).copied());
                assert_eq!(tree.height(&key).is_some(), model.contains(&key));
                assert_eq!(tree.depth(&key).is_some(), model.contains(&key));
            }
            _ => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
        }

        if step % 250 == 0 {
            let keys = in_order_keys(&tree);
            assert_strictly_increasing(&keys);
            assert!(keys.iter().eq(model.iter()));
        }
    }

    for key in model.iter() {
        assert_eq!(tree.find(key).map(|n| *n.key()), Some(*key));
    }
    assert_eq!(tree.len(), model.len());
}

#[test]
fn delete_keeps_other_keys() {
    let mut rng = thread_rng();
    let mut keys: Vec<i32> = (0..200).collect();
    keys.shuffle(&mut rng);

    let mut tree = Tree::empty();
    tree.extend(keys.iter().copied());

    keys.shuffle(&mut rng);
    let (gone, kept) = keys.split_at(100);
    for key in gone {
        tree.delete(key);
        assert!(tree.find(key).is_none());
    }
    for key in kept {
        assert_eq!(tree.find(key).map(|n| *n.key()), Some(*key));
    }
    assert_strictly_increasing(&in_order_keys(&tree));
}

#[test]
fn depth_and_height_along_a_chain() {
    let mut tree = Tree::empty();
    tree.extend(1..=5);
    for key in 1..=5 {
        assert_eq!(tree.depth(&key), Some((key - 1) as usize));
        assert_eq!(tree.height(&key), Some((5 - key) as usize));
    }
    assert_eq!(tree.depth(&6), None);
    assert_eq!(tree.height(&0), None);
    assert!(!tree.is_balanced());

    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(tree.depth(&3), Some(0));
    assert_eq!(tree.height(&3), Some(2));
}

#[test]
fn traversals_visit_every_key_once() {
    let mut rng = thread_rng();
    let items: Vec<i32> = (0..300).map(|_| rng.gen_range(0..1000)).collect();
    let mut tree = Tree::new(items);
    tree.extend([2000, 3000, 4000]);
    let expected = in_order_keys(&tree);

    for order in TraversalOrder::ALL {
        let mut visited = Vec::new();
        let push = |n: &Node<i32>| visited.push(*n.key());
        tree.traverse(order, Some(push)).unwrap();
        assert_eq!(visited.len(), tree.len());

        let pulled: Vec<i32> = tree.iter(order).map(|n| *n.key()).collect();
        assert_eq!(pulled, visited);

        visited.sort();
        assert_eq!(visited, expected);
    }
}

#[test]
fn traversal_without_callback_fails() {
    let tree = Tree::new([1, 2, 3]);
    let before = tree.clone();
    assert_eq!(
        tree.level_order(None::<fn(&Node<i32>)>),
        Err(TreeError::InvalidArgument("level_order"))
    );
    assert_eq!(
        tree.pre_order(None::<fn(&Node<i32>)>),
        Err(TreeError::InvalidArgument("pre_order"))
    );
    assert_eq!(
        tree.in_order(None::<fn(&Node<i32>)>),
        Err(TreeError::InvalidArgument("in_order"))
    );
    assert_eq!(
        tree.post_order(None::<fn(&Node<i32>)>),
        Err(TreeError::InvalidArgument("post_order"))
    );
    assert_eq!(tree, before);
}

#[test]
fn rebalance_after_degrading_inserts() {
    init_logger();
    let mut tree = Tree::new((0..100).collect::<Vec<i32>>());
    tree.extend([150, 200, 300]);
    assert!(!tree.is_balanced());

    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(tree.len(), 103);
    assert_eq!(tree.min(), Some(&0));
    assert_eq!(tree.max(), Some(&300));
}
