use crate::core::pipeline;
use crate::core::storage::Store;
use crate::error::Result;
use console::style;

/// Parse a pipeline and store it under `name`.
pub fn run(store: &Store, name: &str, line: &str, stdin: bool) -> Result<()> {
    let steps = pipeline::parse(line)?;
    let recipe = pipeline::pack(steps, stdin);
    store.save(name, &recipe)?;
    println!("{}", style("Command saved").green());
    Ok(())
}
