use std::process::ExitCode;

fn main() -> ExitCode {
	let opts = command_options();

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { eprintln!("Unable to parse options: {}", e); return ExitCode::FAILURE }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: dynvars-terminal [options] <definitions.json>"));
			return ExitCode::SUCCESS;
		}

		parsed_options
	};

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
		if parsed_options.opt_present("v") { "debug" } else { "warn" }
	)).init();

	match run(&parsed_options) {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			ExitCode::FAILURE
		}
	}
}

fn command_options() -> getopts::Options {
	let mut opts = getopts::Options::new();
	opts.optflag( "h", "help",       "Show help");
	opts.optflag( "v", "verbose",    "Increased vebosity");
	opts.optopt(  "c", "config",     "Read options from a JSON file", "FILE");
	opts.optopt(  "o", "output",     "Write the ordered variables resource to FILE", "FILE");
	opts.optflag( "r", "resource",   "Write the ordered variables resource to the configured resource name");
	opts.optopt(  "f", "format",     "Resource encoding", "bincode|json");
	opts.optflag( "",  "strict",     "Fail on references to undeclared variables");
	opts.parsing_style(getopts::ParsingStyle::FloatingFrees);
	opts
}

/// Where the resource goes, `-o` wins over `-r`.
fn output_path(parsed_options: &getopts::Matches, options: &dynvars::DynvarsOptions) -> Option<String> {
	parsed_options.opt_str("o").or_else(|| {
		parsed_options.opt_present("r").then(|| options.resource_name().to_string())
	})
}

fn run(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let mut options = match parsed_options.opt_str("c") {
		Some(path) => dynvars::DynvarsOptions::load_from_file(&path).unwrap_or_else(|e| {
			log::warn!("Failed to read config file {}: {}", path, e);
			log::warn!("Using default config.");
			dynvars::DynvarsOptions::default()
		}),
		None => dynvars::DynvarsOptions::default(),
	};

	if let Some(format) = parsed_options.opt_str("f") {
		options.set_resource_format(format.parse()?);
	}
	if parsed_options.opt_present("strict") {
		options.set_strict_references(true);
	}

	let definitions_path = parsed_options.free.get(0).ok_or(Error::MissingArgument)?;
	let definitions = dynvars::definitions::read_definitions_from_path(definitions_path, &options)?;

	let finalized = dynvars::resolver::ResolverBuilder::new(&definitions)
		.options(options.clone())
		.build()?
		.resolve()
		.map_err(|e| {
			for name in e.offending_variables() {
				log::debug!("Unordered variable: {}", name);
			}
			e
		})?;

	for warning in finalized.unknown_references() {
		log::info!("Left for install time: {}", warning);
	}
	for node in finalized.get_order().iter() {
		log::debug!("{} (declared #{})", node.name, node.source_order);
	}

	let ordered = finalized.get_ordered_variables();

	/* The order is only printed once the resource is on disk */
	if let Some(output) = output_path(parsed_options, &options) {
		ordered.write_resource(&output, options.resource_format())?;
	}

	for name in ordered.names() {
		println!("{}", name);
	}

	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("dynvars error: {0}")]
	Dynvars(#[from] dynvars::Error),
	#[error("Missing argument: definitions file")]
	MissingArgument,
}
