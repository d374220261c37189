use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use envwalk::JsonMap;
use envwalk::getters::{self, parse_arr, parse_bool, parse_map};
use envwalk::loader::{load_env_from, locate_env_file, parse_env_file};
use envwalk::store::ProcessEnv;

#[derive(Parser)]
#[command(name = "envwalk")]
#[command(
	author,
	version,
	about = "Locate .env files by walking up parent directories and read typed values"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Directory to start the upward search from (defaults to the current directory)
	#[arg(long, global = true, value_name = "DIR")]
	dir: Option<PathBuf>,

	/// Log discovery and coercion details to stderr
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the path of the nearest .env file
	Locate,
	/// Parse the nearest .env file and report errors without loading it
	Check,
	/// Print the entries of the nearest .env file in file order
	Show {
		/// Print entries as a JSON array
		#[arg(long)]
		json: bool,
	},
	/// Load the nearest .env file, then print one variable as a typed value
	Get {
		/// Variable name
		key: String,

		/// Type to coerce the value to
		#[arg(long = "type", value_enum, default_value_t = ValueType::Str)]
		value_type: ValueType,

		/// Value printed when the variable is absent or cannot be coerced
		#[arg(long, value_name = "VALUE")]
		default: Option<String>,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum ValueType {
	Str,
	Int,
	Float,
	Bool,
	Arr,
	Map,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let start_dir = match cli.dir {
		// Relative paths would stop the upward walk at the working directory
		Some(dir) => std::path::absolute(&dir)
			.with_context(|| format!("Failed to resolve {}", dir.display()))?,
		None => std::env::current_dir().context("Failed to get current directory")?,
	};

	match cli.command {
		Commands::Locate => handle_locate(&start_dir),
		Commands::Check => handle_check(&start_dir),
		Commands::Show { json } => handle_show(&start_dir, json),
		Commands::Get {
			key,
			value_type,
			default,
		} => handle_get(&start_dir, &key, value_type, default.as_deref()),
	}
}

fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn handle_locate(start_dir: &Path) -> Result<ExitCode> {
	match locate_env_file(start_dir) {
		Some(path) => println!("{}", path.display()),
		None => println!("No .env file found."),
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_check(start_dir: &Path) -> Result<ExitCode> {
	let Some(path) = locate_env_file(start_dir) else {
		println!("No .env file found.");
		return Ok(ExitCode::SUCCESS);
	};

	match parse_env_file(&path) {
		Ok(env_file) => {
			println!("{}: {} entries", path.display(), env_file.entries.len());
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Env file error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_show(start_dir: &Path, json: bool) -> Result<ExitCode> {
	let Some(path) = locate_env_file(start_dir) else {
		println!("No .env file found.");
		return Ok(ExitCode::SUCCESS);
	};

	let env_file = parse_env_file(&path)
		.with_context(|| format!("Failed to parse {}", path.display()))?;

	if json {
		let rendered = serde_json::to_string_pretty(&env_file.entries)
			.context("Failed to serialize entries")?;
		println!("{}", rendered);
		return Ok(ExitCode::SUCCESS);
	}

	println!("# Source: {}", path.display());
	for entry in &env_file.entries {
		println!("{}={}", entry.key, entry.value);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_get(
	start_dir: &Path,
	key: &str,
	value_type: ValueType,
	default: Option<&str>,
) -> Result<ExitCode> {
	load_env_from(start_dir, &ProcessEnv).context("Failed to load .env file")?;

	let output = match value_type {
		ValueType::Str => getters::str_or(&ProcessEnv, key, default.unwrap_or_default()),
		ValueType::Int => {
			let default = match default {
				Some(raw) => raw
					.parse()
					.with_context(|| format!("Invalid integer default: {}", raw))?,
				None => 0,
			};
			getters::int_or(&ProcessEnv, key, default).to_string()
		}
		ValueType::Float => {
			let default = match default {
				Some(raw) => raw
					.parse()
					.with_context(|| format!("Invalid float default: {}", raw))?,
				None => 0.0,
			};
			getters::float_or(&ProcessEnv, key, default).to_string()
		}
		ValueType::Bool => {
			let default = match default {
				Some(raw) => parse_bool(raw)
					.ok_or_else(|| anyhow::anyhow!("Invalid boolean default: {}", raw))?,
				None => false,
			};
			getters::bool_or(&ProcessEnv, key, default).to_string()
		}
		ValueType::Arr => {
			let default = match default {
				Some(raw) => parse_arr(raw)
					.ok_or_else(|| anyhow::anyhow!("Invalid array default: {}", raw))?,
				None => Vec::new(),
			};
			serde_json::to_string(&getters::arr_or(&ProcessEnv, key, default))?
		}
		ValueType::Map => {
			let default = match default {
				Some(raw) => parse_map(raw)
					.ok_or_else(|| anyhow::anyhow!("Invalid map default: {}", raw))?,
				None => JsonMap::new(),
			};
			serde_json::to_string(&getters::map_or(&ProcessEnv, key, default))?
		}
	};

	println!("{}", output);
	Ok(ExitCode::SUCCESS)
}
