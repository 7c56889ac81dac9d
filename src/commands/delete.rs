use crate::core::storage::Store;
use crate::error::Result;
use console::style;

/// Delete a saved command.
pub fn run(store: &Store, name: &str) -> Result<()> {
    store.remove(name)?;
    println!("{}", style("Command removed").green());
    Ok(())
}
