use crate::cli::Cli;
use crate::core::storage::Store;
use crate::error::{GcmdError, Result};

pub mod delete;
pub mod echo;
pub mod list;
pub mod run;
pub mod save;

/// The action an invocation resolves to.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    List,
    Remove { name: &'a str },
    Save { name: &'a str, pipeline: &'a str, stdin: bool },
    Echo { name: &'a str },
    Run { name: &'a str },
}

impl<'a> Mode<'a> {
    /// Picks the action from the parsed flags. `-ls` wins over everything,
    /// then `-rm`, then `-save`; otherwise the named command is echoed or run.
    pub fn select(cli: &'a Cli) -> Result<Self> {
        if cli.ls {
            return Ok(Mode::List);
        }
        let name = cli.name.as_deref().filter(|n| !n.is_empty());

        if cli.rm {
            let name = name.ok_or_else(|| GcmdError::validation("Provide a command"))?;
            return Ok(Mode::Remove { name });
        }
        if cli.save {
            let name = name.ok_or_else(|| GcmdError::validation("Name cannot be empty"))?;
            return Ok(Mode::Save {
                name,
                pipeline: cli.pipeline.as_deref().unwrap_or(""),
                stdin: cli.stdin,
            });
        }

        let name = name.ok_or_else(|| GcmdError::validation("Provide a command"))?;
        if cli.echo {
            Ok(Mode::Echo { name })
        } else {
            Ok(Mode::Run { name })
        }
    }
}

/// Dispatches the parsed invocation to the appropriate handler.
pub fn dispatch(cli: &Cli, store: &Store) -> Result<()> {
    let mode = Mode::select(cli)?;
    tracing::debug!(?mode, dir = %store.dir().display(), "dispatching");
    match mode {
        Mode::List => list::run(store),
        Mode::Remove { name } => delete::run(store, name),
        Mode::Save {
            name,
            pipeline,
            stdin,
        } => save::run(store, name, pipeline, stdin),
        Mode::Echo { name } => echo::run(store, name),
        Mode::Run { name } => run::run(store, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(f: impl FnOnce(&mut Cli)) -> Cli {
        let mut cli = Cli::default();
        f(&mut cli);
        cli
    }

    #[test]
    fn ls_ignores_everything_else() {
        let c = cli(|c| {
            c.ls = true;
            c.rm = true;
            c.save = true;
        });
        assert_eq!(Mode::select(&c).unwrap(), Mode::List);
    }

    #[test]
    fn rm_beats_save() {
        let c = cli(|c| {
            c.rm = true;
            c.save = true;
            c.name = Some("foo".into());
        });
        assert_eq!(Mode::select(&c).unwrap(), Mode::Remove { name: "foo" });
    }

    #[test]
    fn save_requires_a_name_but_not_a_pipeline() {
        let c = cli(|c| c.save = true);
        assert_eq!(Mode::select(&c).unwrap_err().to_string(), "Name cannot be empty");

        let c = cli(|c| {
            c.save = true;
            c.stdin = true;
            c.name = Some("foo".into());
        });
        assert_eq!(
            Mode::select(&c).unwrap(),
            Mode::Save {
                name: "foo",
                pipeline: "",
                stdin: true
            }
        );
    }

    #[test]
    fn run_echo_and_rm_need_a_name() {
        let c = cli(|_| {});
        assert_eq!(Mode::select(&c).unwrap_err().to_string(), "Provide a command");
        let c = cli(|c| c.echo = true);
        assert_eq!(Mode::select(&c).unwrap_err().to_string(), "Provide a command");
        let c = cli(|c| c.rm = true);
        assert_eq!(Mode::select(&c).unwrap_err().to_string(), "Provide a command");
    }

    #[test]
    fn stdin_flag_is_ignored_outside_save() {
        let c = cli(|c| {
            c.stdin = true;
            c.name = Some("foo".into());
        });
        assert_eq!(Mode::select(&c).unwrap(), Mode::Run { name: "foo" });

        let c = cli(|c| {
            c.echo = true;
            c.name = Some("foo".into());
        });
        assert_eq!(Mode::select(&c).unwrap(), Mode::Echo { name: "foo" });
    }
}
