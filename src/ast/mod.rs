/// AST (Abstract Syntax Tree) module
/// Contains the node arena and the node definitions
///
/// Submodules:
/// - arena: the append-only node store, addressed by integer index
/// - node: the tagged node type, one variant per construct
pub mod arena;
pub mod node;
