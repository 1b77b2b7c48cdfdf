use plect::model::{BranchLength, GeneTree};

// ============= Construction =============

#[test]
fn test_building_tree() {
    let mut tree = GeneTree::new();
    let index_l1 = tree.add_leaf("gallus_g1_a".to_string(), Some(BranchLength::new(1.0)));
    let index_l2 = tree.add_leaf("gallus_g1_b".to_string(), Some(BranchLength::new(1.0)));
    let index_l3 = tree.add_leaf("meleagris_g1_a".to_string(), Some(BranchLength::new(0.5)));
    let index_i1 = tree.add_internal(vec![index_l1, index_l2], Some(BranchLength::new(1.5)));
    let index_root = tree.add_internal(vec![index_i1, index_l3], None);
    tree.set_root(index_root);

    // Counts
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 2);
    assert_eq!(tree.num_vertices(), 5);

    // Root
    let root = tree.root();
    assert_eq!(root.index(), index_root);
    assert!(root.is_internal());
    assert_eq!(root.parent(), None);

    // Leaf
    let l2 = &tree[index_l2];
    assert!(l2.is_leaf());
    assert_eq!(l2.index(), index_l2);
    assert_eq!(l2.name(), Some("gallus_g1_b"));
    assert_eq!(l2.parent(), Some(index_i1));

    // Internal
    let inner = &tree[index_i1];
    assert!(inner.is_internal());
    assert_eq!(inner.children(), Some(&[index_l1, index_l2][..]));
    assert_eq!(inner.branch_length().unwrap(), BranchLength::new(1.5));

    assert!(tree.is_valid());
}

#[test]
fn test_single_leaf_tree() {
    let mut tree = GeneTree::new();
    let leaf = tree.add_leaf("gallus_g1_a".to_string(), None);
    tree.set_root(leaf);

    assert_eq!(tree.num_leaves(), 1);
    assert_eq!(tree.num_vertices(), 1);
    assert!(tree.root().is_leaf());
    assert!(tree.is_valid());
}

#[test]
fn test_empty_tree_is_valid() {
    let tree = GeneTree::new();
    assert_eq!(tree.num_vertices(), 0);
    assert!(!tree.is_root_set());
    assert!(tree.is_valid());
    assert_eq!(tree.leaves().count(), 0);
}

#[test]
fn test_tree_without_root_is_invalid() {
    let mut tree = GeneTree::new();
    tree.add_leaf("a".to_string(), None);
    assert!(!tree.is_valid());
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = GeneTree::new();
    tree.root(); // Should panic
}

#[test]
#[should_panic]
fn test_get_vertex_out_of_bounds() {
    let tree = GeneTree::new();
    let _ = &tree[55];
}

// ============= Traversal =============

/// Builds `((a,b),(c,d))` and returns (tree, [a, b, c, d, ab, cd, root]).
fn build_quartet() -> (GeneTree, [usize; 7]) {
    let mut tree = GeneTree::new();
    let a = tree.add_leaf("a".to_string(), None);
    let b = tree.add_leaf("b".to_string(), None);
    let c = tree.add_leaf("c".to_string(), None);
    let d = tree.add_leaf("d".to_string(), None);
    let ab = tree.add_internal(vec![a, b], None);
    let cd = tree.add_internal(vec![c, d], None);
    let root = tree.add_internal(vec![ab, cd], None);
    tree.set_root(root);
    (tree, [a, b, c, d, ab, cd, root])
}

#[test]
fn test_pre_order_parents_before_children() {
    let (tree, [a, b, c, d, ab, cd, root]) = build_quartet();
    let order: Vec<_> = tree.pre_order_iter().map(|v| v.index()).collect();
    assert_eq!(order, vec![root, ab, a, b, cd, c, d]);
}

#[test]
fn test_leaves_in_left_to_right_order() {
    let (tree, _) = build_quartet();
    let names: Vec<_> = tree.leaves().map(|v| v.name().unwrap()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_ancestors_walk() {
    let (tree, [a, _, _, _, ab, _, root]) = build_quartet();
    let walk: Vec<_> = tree.ancestors(a).collect();
    assert_eq!(walk, vec![a, ab, root]);

    let from_root: Vec<_> = tree.ancestors(root).collect();
    assert_eq!(from_root, vec![root]);
}

#[test]
fn test_depth() {
    let (tree, [a, _, _, _, ab, _, root]) = build_quartet();
    assert_eq!(tree.depth(root), 0);
    assert_eq!(tree.depth(ab), 1);
    assert_eq!(tree.depth(a), 2);
}

// ============= LCA =============

#[test]
fn test_lca_of_single_vertex_is_itself() {
    let (tree, [a, ..]) = build_quartet();
    assert_eq!(tree.lca(&[a]), Some(a));
}

#[test]
fn test_lca_of_siblings_is_parent() {
    let (tree, [a, b, _, _, ab, _, _]) = build_quartet();
    assert_eq!(tree.lca(&[a, b]), Some(ab));
}

#[test]
fn test_lca_across_subtrees_is_root() {
    let (tree, [a, _, c, _, _, _, root]) = build_quartet();
    assert_eq!(tree.lca(&[a, c]), Some(root));
}

#[test]
fn test_lca_of_all_leaves_is_root() {
    let (tree, [a, b, c, d, _, _, root]) = build_quartet();
    assert_eq!(tree.lca(&[a, b, c, d]), Some(root));
}

#[test]
fn test_lca_includes_internal_vertices() {
    let (tree, [a, _, _, _, _, cd, root]) = build_quartet();
    assert_eq!(tree.lca(&[a, cd]), Some(root));
    assert_eq!(tree.lca(&[root, a]), Some(root));
}

#[test]
fn test_lca_of_empty_set_is_none() {
    let (tree, _) = build_quartet();
    assert_eq!(tree.lca(&[]), None);
}

#[test]
fn test_lca_in_unary_chain() {
    // ((a,b)) with an extra unary vertex above the cherry
    let mut tree = GeneTree::new();
    let a = tree.add_leaf("a".to_string(), None);
    let b = tree.add_leaf("b".to_string(), None);
    let cherry = tree.add_internal(vec![a, b], None);
    let root = tree.add_internal(vec![cherry], None);
    tree.set_root(root);

    assert!(tree.is_valid());
    assert_eq!(tree.lca(&[a, b]), Some(cherry));
    assert_eq!(tree.depth(a), 2);
}
