use crate::core::shell::{self, StdinSource};
use crate::core::storage::Store;
use crate::error::Result;

/// Execute a saved command through `bash -c`.
pub fn run(store: &Store, name: &str) -> Result<()> {
    let recipe = store.load(name)?;
    shell::execute(&recipe, StdinSource::detect())
}
