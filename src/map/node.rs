//! Tree nodes, iterative teardown and copying.

/// An owning link to a subtree. `None` is an empty subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry of the tree together with the subtrees it owns.
///
/// Nodes hold no reference to their parent; the parent of a node is found
/// by descending from the root again.
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children.
    pub(super) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// Drops every node reachable from `root`.
///
/// The tree is not balanced, so its depth can equal its length. Dropping
/// `Box<Node>` recursively would then exhaust the call stack; this walks the
/// tree with a heap-allocated worklist instead and detaches the children of
/// each node before the node itself is dropped.
pub(super) fn dismantle<K, V>(root: Link<K, V>) {
    let mut pending: Vec<Box<Node<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Copies the subtree at `root` node for node, keeping its exact shape.
///
/// Children are built before their parent (post-order), so the copy needs
/// no recursion on depth either.
pub(super) fn replicate<K: Clone, V: Clone>(root: Option<&Node<K, V>>) -> Link<K, V> {
    enum Step<'a, K, V> {
        Visit(Option<&'a Node<K, V>>),
        Build(&'a Node<K, V>),
    }

    let mut pending = vec![Step::Visit(root)];
    let mut built: Vec<Link<K, V>> = Vec::new();
    while let Some(step) = pending.pop() {
        match step {
            Step::Visit(None) => built.push(None),
            Step::Visit(Some(node)) => {
                pending.push(Step::Build(node));
                pending.push(Step::Visit(node.right.as_deref()));
                pending.push(Step::Visit(node.left.as_deref()));
            }
            Step::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    key: node.key.clone(),
                    value: node.value.clone(),
                    left,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn left_chain(depth: usize) -> Link<usize, usize> {
        let mut root: Link<usize, usize> = None;
        for key in 0..depth {
            let mut node = Box::new(Node::leaf(key, key));
            node.left = root;
            root = Some(node);
        }
        root
    }

    #[rstest]
    fn test_leaf_has_no_children() {
        let node = Node::leaf(1, "one");
        assert_eq!(node.key, 1);
        assert_eq!(node.value, "one");
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[rstest]
    fn test_dismantle_empty_link() {
        dismantle::<i32, i32>(None);
    }

    #[rstest]
    fn test_dismantle_degenerate_chain_does_not_recurse() {
        dismantle(left_chain(200_000));
    }

    #[rstest]
    fn test_replicate_empty_link() {
        assert!(replicate::<i32, i32>(None).is_none());
    }

    #[rstest]
    fn test_replicate_keeps_children_on_their_side() {
        let mut root = Box::new(Node::leaf(20, 'a'));
        let mut right = Box::new(Node::leaf(20, 'b'));
        right.right = Some(Box::new(Node::leaf(30, 'c')));
        root.left = Some(Box::new(Node::leaf(5, 'd')));
        root.right = Some(right);

        let copy = replicate(Some(&root));
        let copy = copy.as_deref();
        assert_eq!(copy.map(|node| node.value), Some('a'));
        assert_eq!(
            copy.and_then(|node| node.left.as_deref()).map(|node| node.value),
            Some('d')
        );
        let right = copy.and_then(|node| node.right.as_deref());
        assert_eq!(right.map(|node| (node.key, node.value)), Some((20, 'b')));
        assert!(right.is_some_and(|node| node.left.is_none()));
        assert_eq!(
            right.and_then(|node| node.right.as_deref()).map(|node| node.key),
            Some(30)
        );
        dismantle(Some(root));
    }

    #[rstest]
    fn test_replicate_degenerate_chain_does_not_recurse() {
        let chain = left_chain(200_000);
        let copy = replicate(chain.as_deref());
        assert_eq!(copy.as_deref().map(|node| node.key), Some(199_999));
        dismantle(copy);
        dismantle(chain);
    }
}
