use crate::core::pipeline;
use crate::core::storage::Store;
use crate::error::Result;

/// Print the pipeline of a saved command without running it.
pub fn run(store: &Store, name: &str) -> Result<()> {
    let recipe = store.load(name)?;
    println!("{}", pipeline::format(&recipe));
    Ok(())
}
