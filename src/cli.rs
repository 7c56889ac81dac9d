//! Defines the command-line interface structure using clap.

use clap::Parser;
use std::ffi::OsString;

/// Long flags that may also be written with a single dash (`-save`, `-ls=true`).
const SINGLE_DASH_LONGS: &[&str] = &["save", "rm", "echo", "ls", "verbose"];

#[derive(Parser, Debug, Default)]
#[command(
    name = "gcmd",
    version,
    about = "Save shell pipelines under a name and run them later",
    override_usage = "gcmd [flags] [name] [pipeline]"
)]
pub struct Cli {
    /// Save a command
    #[arg(long)]
    pub save: bool,
    /// Remove a command
    #[arg(long)]
    pub rm: bool,
    /// Print the command rather than executing it
    #[arg(long)]
    pub echo: bool,
    /// List available commands
    #[arg(long)]
    pub ls: bool,
    /// Take input from stdin (for -save only)
    #[arg(short = 'i')]
    pub stdin: bool,
    /// Print diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Name of the saved command
    pub name: Option<String>,
    /// Pipeline to save, stages separated by " | "
    pub pipeline: Option<String>,
    /// Extra positionals, accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parses the process arguments, accepting Go-style single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-save` / `-ls=true` style flags to their `--` form and drops
/// flags explicitly set to false. A value that is not a bool is handed to
/// clap as `--flag=value` so it is rejected there. Everything after a literal `--` is left
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg.as_os_str() == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        out.extend(rewrite_flag(arg));
    }
    out
}

fn rewrite_flag(arg: OsString) -> Option<OsString> {
    let Some(body) = arg.to_str().and_then(|s| s.strip_prefix('-')) else {
        return Some(arg);
    };
    if body.starts_with('-') {
        return Some(arg);
    }
    let (flag, value) = match body.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (body, None),
    };
    let rewritten = match flag {
        "i" | "v" => format!("-{}", flag),
        _ if SINGLE_DASH_LONGS.contains(&flag) => format!("--{}", flag),
        _ => return Some(arg),
    };
    let Some(value) = value else {
        return Some(OsString::from(rewritten));
    };
    match parse_bool(value) {
        Some(true) => Some(OsString::from(rewritten)),
        Some(false) => None,
        None => Some(OsString::from(format!("{}={}", rewritten, value))),
    }
}

/// Bool spellings accepted after `=`, as in Go's `strconv.ParseBool`.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["gcmd"];
        full.extend_from_slice(args);
        Cli::try_parse_from(normalize_args(full)).unwrap()
    }

    #[test]
    fn go_style_flags_are_accepted() {
        let cli = parse(&["-save", "-i", "count", "grep foo | wc -l"]);
        assert!(cli.save && cli.stdin);
        assert_eq!(cli.name.as_deref(), Some("count"));
        assert_eq!(cli.pipeline.as_deref(), Some("grep foo | wc -l"));
    }

    #[test]
    fn flags_may_follow_positionals() {
        let cli = parse(&["-save", "count", "-i", "grep foo | wc -l"]);
        assert!(cli.save && cli.stdin);
        assert_eq!(cli.pipeline.as_deref(), Some("grep foo | wc -l"));
    }

    #[test]
    fn double_dash_and_explicit_values() {
        let cli = parse(&["--ls"]);
        assert!(cli.ls);
        let cli = parse(&["-echo=true", "foo"]);
        assert!(cli.echo);
        assert_eq!(cli.name.as_deref(), Some("foo"));
    }

    #[test]
    fn pipeline_after_separator_is_untouched() {
        let cli = parse(&["-save", "neg", "--", "-ls"]);
        assert_eq!(cli.pipeline.as_deref(), Some("-ls"));
        assert!(!cli.ls);
    }

    #[test]
    fn explicit_false_drops_the_flag() {
        let cli = parse(&["-ls=false", "-echo", "foo"]);
        assert!(!cli.ls && cli.echo);
        assert_eq!(cli.name.as_deref(), Some("foo"));
        assert_eq!(cli.pipeline, None);
    }

    #[test]
    fn go_bool_spellings() {
        for off in ["0", "f", "F", "false", "FALSE", "False"] {
            let flag = format!("-ls={}", off);
            let cli = parse(&[flag.as_str(), "-echo", "foo"]);
            assert!(!cli.ls, "-ls={} should be off", off);
        }
        for on in ["1", "t", "T", "true", "TRUE", "True"] {
            let flag = format!("-ls={}", on);
            assert!(parse(&[flag.as_str()]).ls, "-ls={} should be on", on);
        }
        assert!(Cli::try_parse_from(normalize_args(["gcmd", "-ls=maybe"])).is_err());
        assert!(Cli::try_parse_from(normalize_args(["gcmd", "-ls=fAlse"])).is_err());
    }

    #[test]
    fn extra_positionals_are_accepted() {
        let cli = parse(&["-save", "foo", "echo hi", "extra"]);
        assert_eq!(cli.pipeline.as_deref(), Some("echo hi"));
        assert_eq!(cli.rest, ["extra"]);
    }

    #[test]
    fn unknown_single_dash_words_are_left_alone() {
        let args: Vec<String> = normalize_args(["gcmd", "-save", "-rf", "name"])
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect();
        assert_eq!(args, ["gcmd", "--save", "-rf", "name"]);
    }
}
