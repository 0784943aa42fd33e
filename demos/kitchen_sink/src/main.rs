//! Kitchen-sink demo: binds every supported field kind and prints the result.
//!
//! Run without arguments to parse a built-in argument list. Set `TAGFLAG_LOG`
//! (for example `TAGFLAG_LOG=tagflag=debug`) to see binding decisions.

use std::io::{self, Write};

use color_eyre::eyre::eyre;
use tagflag::{Binder, FlagRecord};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TAGFLAG_LOG";

/// Arguments parsed when the demo is started without any.
const DEMO_ARGS: [&str; 8] = [
    "--Age", "10", "--Bar", "7", "--GDP", "2", "hello", "world",
];

#[derive(Debug, Default, FlagRecord)]
struct Opt {
    #[flag("tagflag demonstrator")]
    usage: String,
    #[flag("contains the something      | /dev/null")]
    some_file: String,
    #[flag("do not inflate              | 42", rename = "IQ")]
    iq: i32,
    #[flag("in Vietnamese Dong          | 42000000000000000000000000.0", rename = "GDP")]
    gdp: f64,
    #[flag("in milliseconds since epoch | 42000000000000")]
    age: i64,
    #[flag("! is command that might contain pipe char ! 'yes | head'")]
    some_command: String,
    #[flag("bool flags take `--Verbose=value` to be unambiguous | false")]
    verbose: bool,
    #[flag(" must be writable | /an/output/file")]
    out_data: String,
    #[flag("trailing underscore is dropped from the flag | 3")]
    baz_: i32,
    #[flag("print the usage text and exit | false")]
    help_: bool,
    /// Set before parsing, so never bound.
    #[flag("preset value")]
    foo: Option<i32>,
    #[flag("only set when supplied")]
    bar: Option<i32>,
    args: Vec<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let mut opt = Opt {
        foo: Some(1),
        ..Opt::default()
    };
    if std::env::args_os().len() <= 1 {
        opt.args = DEMO_ARGS.iter().map(|arg| (*arg).to_owned()).collect();
    }
    Binder::new().parse_or_exit(&mut opt);
    tracing::debug!(leftover = opt.args.len(), "binding finished");

    let mut out = io::stdout().lock();
    if opt.help_ {
        writeln!(out, "{}", opt.usage.trim_start())?;
        return Ok(());
    }
    print_opt(&mut out, &opt)?;
    Ok(())
}

fn init_tracing() -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!(err))
}

fn print_opt(out: &mut impl Write, opt: &Opt) -> io::Result<()> {
    writeln!(out, "SomeFile= {}", opt.some_file)?;
    writeln!(out, "Age= {}", opt.age)?;
    writeln!(out, "IQ= {}", opt.iq)?;
    writeln!(out, "GDP= {}", opt.gdp)?;
    writeln!(out, "SomeCommand= {}", opt.some_command)?;
    writeln!(out, "Verbose= {}", opt.verbose)?;
    writeln!(out, "OutData= {}", opt.out_data)?;
    writeln!(out, "Baz= {}", opt.baz_)?;
    match opt.foo {
        Some(foo) => writeln!(out, "Foo= {foo}")?,
        None => writeln!(out, "Foo was not set")?,
    }
    match opt.bar {
        Some(bar) => writeln!(out, "Bar= {bar}")?,
        None => writeln!(out, "Bar was not set")?,
    }
    for (index, arg) in opt.args.iter().enumerate() {
        writeln!(out, "arg num {index} : {arg}")?;
    }
    Ok(())
}
