//! Simple command that prints one or '-n count' UUIDs of a chosen version

use std::{env, io, io::Write, process::ExitCode};
use uuid4122::{uuid1, uuid3, uuid4, uuid5, Namespace, Uuid};

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-v {{1|3|4|5}}] [name]",
                    program.as_deref().unwrap_or("uuidgen")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let ns = Namespace::Bytes(Uuid::NAMESPACE_DNS.as_bytes());
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        let uuid = match opts.version {
            1 => uuid1(&rand::random::<[u8; 6]>()),
            3 => uuid3(&ns, opts.name.as_bytes()).expect("name-based generation cannot fail"),
            5 => uuid5(&ns, opts.name.as_bytes()).expect("name-based generation cannot fail"),
            _ => uuid4(),
        };
        writeln!(buf, "{}", uuid)?;
    }

    Ok(ExitCode::SUCCESS)
}

struct Options {
    count: usize,
    version: u8,
    name: String,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut count = None;
    let mut version = None;
    let mut name = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            "-v" => {
                if version.is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
                let Some(v_arg) = args.next() else {
                    return Err("argument to option 'v' missing".to_owned());
                };
                match v_arg.parse() {
                    Ok(v @ (1 | 3 | 4 | 5)) => version.replace(v),
                    _ => return Err(format!("invalid argument to option 'v': '{}'", v_arg)),
                };
            }
            _ if name.is_none() && !arg.starts_with('-') => {
                name.replace(arg);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    let version = version.unwrap_or(4);
    if matches!(version, 3 | 5) && name.is_none() {
        return Err("name-based versions need a name argument".to_owned());
    }
    Ok(Options {
        count: count.unwrap_or(1),
        version,
        name: name.unwrap_or_default(),
    })
}
