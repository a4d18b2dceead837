use thiserror::Error;

/// Structural defect reported by [`AvlSet::assert_valid`](crate::avl::AvlSet::assert_valid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("Root has parent")]
    RootHasParent,
    #[error("Broken parent link at node {node}")]
    BrokenParentLink { node: u32 },
    #[error("Height mismatch at node {node}: cached {cached}, actual {actual}")]
    HeightMismatch { node: u32, cached: i32, actual: i32 },
    #[error("AVL balance violated at node {node}: balance factor {balance}")]
    BalanceViolated { node: u32, balance: i32 },
    #[error("Node order violated at node {node}")]
    OrderViolated { node: u32 },
    #[error("Size mismatch: recorded {recorded}, reachable {reachable}")]
    SizeMismatch { recorded: usize, reachable: usize },
}
