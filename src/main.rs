// src/main.rs

use std::process;
use std::str::FromStr;

use env_logger::Env;
use log::{debug, warn};
use serde_json::{json, Value};

use ntkit::config::{NtkitConfig, OutputFormat};
use ntkit::{compute_partial_sums, convolution_coeff, enumerate_divisors, factor, gcd, prime_sieve, smallest_prime_divisor};

const USAGE: &str = "usage: ntkit <command> [args]

commands:
  gcd A B              greatest common divisor
  spd N [BOUND]        smallest prime divisor of N, searching up to BOUND
  sieve [LIMIT]        primes below LIMIT
  factor N             prime-power factorization
  divisors N           all positive divisors
  sigma N              sum of divisors
  partial-sums X...    running sums of the given integers";

/// A command result in both output formats.
struct Report {
    text: String,
    json: Value,
}

fn main() {
    let config = NtkitConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        NtkitConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("NTKIT_LOG", config.log_level.as_str())
        .write_style_or("NTKIT_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = std::env::args().collect();
    debug!("Arguments: {:?}", args.iter().skip(1).collect::<Vec<_>>());

    match run(&args, &config) {
        Ok(report) => match config.output.format {
            OutputFormat::Text => println!("{}", report.text),
            OutputFormat::Json => println!("{}", report.json),
        },
        Err(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            process::exit(1);
        }
    }
}

fn run(args: &[String], config: &NtkitConfig) -> Result<Report, String> {
    let command = args.get(1).ok_or_else(|| "missing command".to_string())?;

    match command.as_str() {
        "gcd" => {
            let a: i64 = parse_arg(args, 2, "A")?;
            let b: i64 = parse_arg(args, 3, "B")?;
            let result = gcd(a, b);
            Ok(Report {
                text: result.to_string(),
                json: json!({ "a": a, "b": b, "gcd": result }),
            })
        }
        "spd" => {
            let n: i64 = parse_arg(args, 2, "N")?;
            let bound = match args.get(3) {
                Some(_) => Some(parse_arg::<u64>(args, 3, "BOUND")?),
                None => config.trial_division.bound,
            };
            let divisor = smallest_prime_divisor(n, bound).map_err(|e| e.to_string())?;
            let cut_short = bound.map_or(false, |b| u128::from(b) * u128::from(b) < n as u128);
            if cut_short && divisor == n as u64 && n > 1 {
                warn!("No divisor of {} found up to the bound; {} may be composite", n, n);
            }
            Ok(Report {
                text: divisor.to_string(),
                json: json!({ "n": n, "bound": bound, "divisor": divisor }),
            })
        }
        "sieve" => {
            let limit = match args.get(2) {
                Some(_) => parse_arg::<u64>(args, 2, "LIMIT")?,
                None => config.sieve.default_limit,
            };
            let primes = prime_sieve(limit);
            Ok(Report {
                text: join(&primes),
                json: json!({ "limit": limit, "primes": primes }),
            })
        }
        "factor" => {
            let n: i64 = parse_arg(args, 2, "N")?;
            let factorization = factor(n);
            Ok(Report {
                text: factorization.to_string(),
                json: json!({ "n": n, "factorization": factorization }),
            })
        }
        "divisors" => {
            let n: i64 = parse_arg(args, 2, "N")?;
            let divisors = enumerate_divisors(n);
            Ok(Report {
                text: join(&divisors),
                json: json!({ "n": n, "divisors": divisors }),
            })
        }
        "sigma" => {
            let n: u64 = parse_arg(args, 2, "N")?;
            let sigma = convolution_coeff(n, |d| u128::from(d), |_| 1u128).map_err(|e| e.to_string())?;
            Ok(Report {
                text: sigma.to_string(),
                json: json!({ "n": n, "sigma": sigma.to_string() }),
            })
        }
        "partial-sums" => {
            let values = args[2..]
                .iter()
                .map(|s| s.parse::<i64>().map_err(|e| format!("invalid value '{}': {}", s, e)))
                .collect::<Result<Vec<i64>, String>>()?;
            let sums = compute_partial_sums(&values);
            Ok(Report {
                text: join(&sums),
                json: json!({ "values": values, "partial_sums": sums }),
            })
        }
        other => Err(format!("unknown command '{}'", other)),
    }
}

fn parse_arg<T>(args: &[String], index: usize, name: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = args.get(index).ok_or_else(|| format!("missing argument {}", name))?;
    raw.parse::<T>().map_err(|e| format!("invalid {} '{}': {}", name, raw, e))
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("ntkit").chain(list.iter().copied()).map(String::from).collect()
    }

    #[test]
    fn test_factor_command() {
        let report = run(&args(&["factor", "-7007"]), &NtkitConfig::default()).unwrap();
        assert_eq!(report.text, "7^2 * 11^1 * 13^1");
        assert_eq!(report.json["factorization"][0]["prime"], 7);
    }

    #[test]
    fn test_sieve_uses_configured_default() {
        let mut config = NtkitConfig::default();
        config.sieve.default_limit = 10;
        let report = run(&args(&["sieve"]), &config).unwrap();
        assert_eq!(report.text, "2 3 5 7");
    }

    #[test]
    fn test_sigma_and_partial_sums() {
        let config = NtkitConfig::default();
        assert_eq!(run(&args(&["sigma", "12"]), &config).unwrap().text, "28");
        assert_eq!(run(&args(&["partial-sums", "1", "1", "1"]), &config).unwrap().text, "1 2 3");
    }

    #[test]
    fn test_errors_are_reported() {
        let config = NtkitConfig::default();
        assert!(run(&args(&["spd", "0"]), &config).is_err());
        assert!(run(&args(&["gcd", "4"]), &config).is_err());
        assert!(run(&args(&["frobnicate"]), &config).is_err());
        assert!(run(&args(&[]), &config).is_err());
    }
}
