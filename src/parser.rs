//! Reading and writing ontologies in the `.obo` format

/// Module to parse and write `go.obo` files
pub(crate) mod go_obo;
