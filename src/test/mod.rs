
/// Assert the element at a node and at each of its children (`None` for a missing child).
macro_rules! assert_node {
    ($node:expr, $element:expr, $left:expr, $right:expr) => {{
        let node = $node.expect("node is present");
        assert_eq!(node.element, $element);
        assert_eq!(node.left().map(|n| n.element), $left);
        assert_eq!(node.right().map(|n| n.element), $right);
    }};
}

pub(crate) use assert_node;
