use sentinel_tree::{Color, RbTree, TreeError, NIL};

fn fixture() -> RbTree<i32> {
    let mut tree = RbTree::new();
    for k in [10, 5, 15, 3, 7, 20] {
        tree.insert(k);
    }
    tree
}

/// Full structural snapshot: per node (index, parent, left, right, color).
fn snapshot(tree: &RbTree<i32>) -> Vec<(u32, u32, u32, u32, Color)> {
    tree.iter()
        .map(|i| {
            (
                i,
                tree.parent(i),
                tree.left(i),
                tree.right(i),
                tree.color(i),
            )
        })
        .collect()
}

#[test]
fn left_then_right_rotation_round_trips() {
    let mut tree = fixture();
    let before = snapshot(&tree);
    let root_before = tree.root();

    let x = tree.root();
    let y = tree.right(x);
    assert_ne!(y, NIL);

    tree.rotate_left(x).unwrap();
    assert_eq!(tree.root(), y, "right child takes the rotated node's place");

    // A rotation moves no keys: in-order sequence is untouched even while
    // the shape is different.
    let ordered: Vec<i32> = tree.keys().copied().collect();
    assert_eq!(ordered, vec![3, 5, 7, 10, 15, 20]);

    tree.rotate_right(y).unwrap();
    assert_eq!(tree.root(), root_before);
    assert_eq!(snapshot(&tree), before, "round trip must restore the shape");
    assert!(tree.is_valid());
}

#[test]
fn rotation_round_trips_below_the_root() {
    let mut tree = fixture();
    let before = snapshot(&tree);

    let x = tree.search(&15);
    let y = tree.right(x);
    tree.rotate_left(x).unwrap();
    assert_ne!(snapshot(&tree), before);

    tree.rotate_right(y).unwrap();
    assert_eq!(snapshot(&tree), before);
}

#[test]
fn rotation_preserves_parent_links() {
    let mut tree = fixture();
    let x = tree.root();
    tree.rotate_left(x).unwrap();

    for i in tree.iter() {
        let l = tree.left(i);
        let r = tree.right(i);
        if l != NIL {
            assert_eq!(tree.parent(l), i);
        }
        if r != NIL {
            assert_eq!(tree.parent(r), i);
        }
    }
    assert_eq!(tree.parent(tree.root()), NIL);
}

#[test]
fn rotating_without_the_required_child_fails() {
    let mut tree = fixture();

    // 20 is a leaf: neither rotation has a pivot child to promote.
    let leaf = tree.search(&20);
    assert_eq!(tree.left(leaf), NIL);
    assert_eq!(
        tree.rotate_left(leaf),
        Err(TreeError::InvalidRotationTarget)
    );
    assert_eq!(
        tree.rotate_right(leaf),
        Err(TreeError::InvalidRotationTarget)
    );

    // The sentinel is never a valid pivot.
    assert_eq!(tree.rotate_left(NIL), Err(TreeError::InvalidRotationTarget));

    // Failed rotations leave the tree untouched.
    assert!(tree.is_valid());
    assert_eq!(
        tree.keys().copied().collect::<Vec<_>>(),
        vec![3, 5, 7, 10, 15, 20]
    );
}
