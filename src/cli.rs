//! Command line front end.
//!
//! Each subcommand is turned into a [`Request`] and runs through the same
//! dispatcher as batch mode.

use crate::config::{parse_limit, Config, OutputFormat};
use crate::models::Cidr;
use crate::output;
use crate::processing::{execute, read_requests, run_batch, Request};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Single(Request),
    Batch(PathBuf),
}

/// Parsed command line, flags not given are `None` and fall back to [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub invocation: Invocation,
    pub format: Option<OutputFormat>,
    pub limit: Option<usize>,
}

pub fn build() -> Command {
    let prefix_arg = |help: &'static str| {
        Arg::new("prefix")
            .help(help)
            .required(true)
            .value_parser(value_parser!(u8))
    };

    Command::new("netify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("IPv4 addressing and subnetting calculator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .global(true)
                .value_parser(OutputFormat::NAMES)
                .help("Output format [env: NETIFY_OUTPUT]"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .global(true)
                .value_parser(parse_limit)
                .help("Max subnets listed per plan [env: NETIFY_SUBNET_LIMIT]"),
        )
        .subcommand(
            Command::new("bin")
                .about("Convert a dotted IPv4 address to 32 binary digits")
                .arg(Arg::new("address").required(true)),
        )
        .subcommand(
            Command::new("dec")
                .about("Convert 32 binary digits to a dotted IPv4 address")
                .arg(Arg::new("bits").required(true)),
        )
        .subcommand(
            Command::new("mask")
                .about("Convert between prefix lengths and subnet masks")
                .subcommand_required(true)
                .subcommand(
                    Command::new("prefix")
                        .about("Subnet mask for a prefix length")
                        .arg(prefix_arg("Prefix length (1-32)")),
                )
                .subcommand(
                    Command::new("ip")
                        .about("Prefix length for a subnet mask")
                        .arg(Arg::new("mask").required(true)),
                ),
        )
        .subcommand(
            Command::new("details")
                .about("Network, broadcast, hosts, class and status of an address")
                .arg(
                    Arg::new("address")
                        .help("IPv4 address, or ADDRESS/PREFIX when PREFIX is omitted")
                        .required(true),
                )
                .arg(prefix_arg("Prefix length of the network (1-32)").required(false)),
        )
        .subcommand(
            Command::new("subnets")
                .about("Divide a network into subnets holding at least HOSTS hosts each")
                .arg(Arg::new("network").required(true))
                .arg(prefix_arg("Prefix length of the network (1-32)"))
                .arg(
                    Arg::new("hosts")
                        .help("Required usable hosts per subnet")
                        .required(true)
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("batch")
                .about("Run a JSON file of requests")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn string_arg(matches: &ArgMatches, id: &str) -> Result<String, Box<dyn Error>> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("missing argument <{id}>").into())
}

fn copy_arg<T: Copy + Send + Sync + 'static>(
    matches: &ArgMatches,
    id: &str,
) -> Result<T, Box<dyn Error>> {
    matches
        .get_one::<T>(id)
        .copied()
        .ok_or_else(|| format!("missing argument <{id}>").into())
}

/// Address and prefix given either as two arguments or as one `a.b.c.d/p`.
fn address_and_prefix(matches: &ArgMatches) -> Result<(String, u8), Box<dyn Error>> {
    let address = string_arg(matches, "address")?;
    match matches.get_one::<u8>("prefix") {
        Some(prefix) if !address.contains('/') => Ok((address, *prefix)),
        Some(_) => Err(format!("'{address}' already carries a prefix").into()),
        None => {
            let cidr: Cidr = address.parse()?;
            Ok((cidr.addr().to_string(), cidr.prefix()))
        }
    }
}

/// Turn clap matches into a [`Cli`].
pub fn parse_matches(matches: &ArgMatches) -> Result<Cli, Box<dyn Error>> {
    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()?;
    let limit = matches.get_one::<usize>("limit").copied();

    let invocation = match matches.subcommand() {
        Some(("bin", sub)) => Invocation::Single(Request::Binary {
            ip_address: string_arg(sub, "address")?,
        }),
        Some(("dec", sub)) => Invocation::Single(Request::Decimal {
            ip_address_bin: string_arg(sub, "bits")?,
        }),
        Some(("mask", sub)) => match sub.subcommand() {
            Some(("prefix", m)) => Invocation::Single(Request::PrefixToMask {
                prefix: copy_arg(m, "prefix")?,
            }),
            Some(("ip", m)) => Invocation::Single(Request::MaskToPrefix {
                mask_ip: string_arg(m, "mask")?,
            }),
            _ => return Err("mask: expected 'prefix' or 'ip'".into()),
        },
        Some(("details", sub)) => {
            let (ip_address, mask_prefix) = address_and_prefix(sub)?;
            Invocation::Single(Request::Details {
                ip_address,
                mask_prefix,
            })
        }
        Some(("subnets", sub)) => Invocation::Single(Request::Subnets {
            network_ip_address: string_arg(sub, "network")?,
            mask_prefix: copy_arg(sub, "prefix")?,
            hosts_per_subnet: copy_arg(sub, "hosts")?,
        }),
        Some(("batch", sub)) => Invocation::Batch(
            sub.get_one::<PathBuf>("file")
                .cloned()
                .ok_or("missing argument <file>")?,
        ),
        _ => return Err("no command given".into()),
    };

    Ok(Cli {
        invocation,
        format,
        limit,
    })
}

/// Execute the command line and write the result to `out`.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    let format = cli.format.unwrap_or(config.output);
    let limit = cli.limit.unwrap_or(config.subnet_limit);
    log::debug!("run {:?} format={format} limit={limit}", cli.invocation);

    match &cli.invocation {
        Invocation::Single(request) => {
            let response = execute(request, limit)?;
            out.write_all(output::render(request, &response, format)?.as_bytes())?;
        }
        Invocation::Batch(path) => {
            let requests = read_requests(path)?;
            let outcomes = run_batch(&requests, limit);
            out.write_all(output::render_batch(&outcomes, format)?.as_bytes())?;

            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            if failed > 0 {
                return Err(format!("{failed} of {} requests failed", outcomes.len()).into());
            }
        }
    }
    Ok(())
}
