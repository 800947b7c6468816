pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub(crate) mod orchestrator;
pub(crate) mod schema_graph;
