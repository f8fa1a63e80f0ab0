//! Workspace-level tooling package. See the member crates under `crates/`.
