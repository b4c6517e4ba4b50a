mod node;
mod tree;

pub(crate) use node::Node;
pub(crate) use tree::RawTree;
