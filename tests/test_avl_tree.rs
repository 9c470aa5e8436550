use avl_tree::{AvlTree, Error, TraversalOrder};
use rand::Rng;

const NUM_OF_OPERATIONS: usize = 10_000;

// height of an AVL tree with n entries is below 1.44 * log2(n + 2)
fn assert_height_bound(tree: &AvlTree<u32>) {
    let bound = 1.44 * ((tree.len() + 2) as f64).log2();
    assert!((tree.height() as f64) < bound);
}

#[test]
fn test_random_inserts_against_sorted_vec() {
    let mut rng = rand::thread_rng();
    let mut tree = AvlTree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let entry = rng.gen::<u32>();
        if !tree.contains(&entry) {
            tree.insert(entry).unwrap();
            expected.push(entry);
        }
    }

    expected.sort();

    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), expected);
    assert_height_bound(&tree);
}

#[test]
fn test_random_deletes_against_sorted_vec() {
    let mut rng = rand::thread_rng();
    let mut tree = AvlTree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let entry = rng.gen::<u32>();
        if !tree.contains(&entry) {
            tree.insert(entry).unwrap();
            expected.push(entry);
        }
    }

    expected.sort();

    while expected.len() > NUM_OF_OPERATIONS / 2 {
        let index = rng.gen_range(0, expected.len());
        let entry = expected.remove(index);

        assert_eq!(tree.delete(&entry), Ok(entry));
        assert!(!tree.contains(&entry));
        assert_eq!(tree.delete(&entry), Err(Error::NotFound));
    }

    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), expected);
    assert_height_bound(&tree);
}

#[test]
fn test_pred_succ_against_sorted_vec() {
    let mut rng = rand::thread_rng();
    let mut tree = AvlTree::new();
    let mut expected = Vec::new();

    for _ in 0..1000 {
        let entry = rng.gen::<u32>();
        if !tree.contains(&entry) {
            tree.insert(entry).unwrap();
            expected.push(entry);
        }
    }

    expected.sort();

    assert_eq!(tree.min(), Ok(&expected[0]));
    assert_eq!(tree.max(), Ok(expected.last().unwrap()));
    assert_eq!(tree.pred(&expected[0]), Err(Error::NotFound));
    assert_eq!(tree.succ(expected.last().unwrap()), Err(Error::NotFound));

    for window in expected.windows(2) {
        assert_eq!(tree.succ(&window[0]), Ok(&window[1]));
        assert_eq!(tree.pred(&window[1]), Ok(&window[0]));
    }
}

#[test]
fn test_traversals_agree_on_content() {
    let mut rng = rand::thread_rng();
    let mut tree = AvlTree::new();

    for _ in 0..1000 {
        let _ = tree.insert(rng.gen::<u32>());
    }

    let in_order = tree.traverse(TraversalOrder::InOrder).collect::<Vec<&u32>>();
    assert!(in_order.windows(2).all(|window| window[0] < window[1]));

    for order in &[
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::BreadthFirst,
    ] {
        let mut entries = tree.traverse(*order).collect::<Vec<&u32>>();
        entries.sort();
        assert_eq!(entries, in_order);
    }
}

#[test]
fn test_rebuilt_tree_equals_original() {
    let mut rng = rand::thread_rng();
    let mut tree = AvlTree::new();

    for _ in 0..1000 {
        let _ = tree.insert(rng.gen::<u32>());
    }

    let rebuilt = AvlTree::try_from_tree(&tree).unwrap();
    assert!(rebuilt == tree);

    let cloned = tree.clone();
    assert!(cloned == tree);
}
