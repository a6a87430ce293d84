use std::env;

use balanced_bst::{Node, TraversalOrder, Tree};
use rand::{thread_rng, Rng};

fn random_keys(size: usize) -> Vec<i32> {
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen_range(0..100)).collect()
}

fn print_traversals(tree: &Tree<i32>, suffix: &str) -> balanced_bst::Result<()> {
    for order in TraversalOrder::ALL {
        println!("\n{}{}:", order.name(), suffix);
        tree.traverse(order, Some(|n: &Node<i32>| println!("{}", n.key())))?;
    }
    Ok(())
}

fn main() -> balanced_bst::Result<()> {
    env_logger::init();

    let size = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let keys = random_keys(size);
    println!("Initial array: {:?}", keys);
    let mut tree = Tree::new(keys);

    println!("\nIs tree balanced? {}", tree.is_balanced());
    println!("Initial tree structure:");
    print!("{}", tree);

    print_traversals(&tree, "")?;

    println!("\nAdding numbers > 100 to unbalance:");
    for key in [150, 200, 300] {
        tree.insert(key);
    }
    println!("After adding large numbers:");
    print!("{}", tree);
    println!("Is tree balanced? {}", tree.is_balanced());

    println!("\nRebalancing tree:");
    tree.rebalance();
    println!("After rebalancing:");
    print!("{}", tree);
    println!("Is tree balanced? {}", tree.is_balanced());

    print_traversals(&tree, " after rebalance")
}
