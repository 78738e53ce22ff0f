use dynvars::expression::ProviderKind;
use dynvars::resolver::ResolverBuilder;
use dynvars::DynvarsOptions;
use dynvars_test_utils::*;

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn complex_value_dependency() {
	init_logging();
	let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data/complex-value-dependency.json");
	let defs = dynvars::definitions::read_definitions_from_path(path, &DynvarsOptions::default()).expect("failed to read definitions");

	let finalized = ResolverBuilder::new(&defs).build().expect("failed to build graph").resolve().expect("failed to resolve");
	/* `file` mentions ${INSTALL_PATH} which is only known at install time */
	assert_eq!(finalized.unknown_references().len(), 1);
	assert_eq!(finalized.unknown_references()[0].reference, "INSTALL_PATH");

	let ordered = finalized.get_ordered_variables();
	let order = ordered.names();
	assert_permutation(&order, &defs);

	assert_order(&order, &["file", "ini"]); assert_order(&order, &["key", "ini"]); assert_order(&order, &["section", "ini"]);
	assert_order(&order, &["file", "opt"]); assert_order(&order, &["key", "opt"]);
	assert_order(&order, &["file", "xml"]); assert_order(&order, &["key", "xml"]);

	for archive in ["jar", "zip"] {
		for format in ["ini", "opt", "xml"] {
			let consumer = format!("{}_{}", archive, format);
			for input in ["file", "entry", "key"] {
				assert_order(&order, &[input, consumer.as_str()]);
			}
			if format == "ini" {
				assert_order(&order, &["section", consumer.as_str()]);
			}
		}
	}

	assert_order(&order, &["regkey", "reg"]); assert_order(&order, &["regvalue", "reg"]);
	assert_order(&order, &["executable", "exec"]); assert_order(&order, &["dir", "exec"]); assert_order(&order, &["arg", "exec"]);
}

#[test]
fn chained_provider_inputs() {
	init_logging();
	/* each input of the lookup is itself derived from the one before it */
	let lookup = provider(ProviderKind::Ini, &[("section", "${section}"), ("key", "${key}")])
		.param("source", provider(ProviderKind::ZipEntry, &[("entry", "${entry}")])
			.param("file", provider(ProviderKind::File, &[("path", "${file}")])));
	let defs = vec![
		provider_var("lookup", lookup),
		dyn_var("key", "${section}.home"),
		dyn_var("section", "[${entry}]"),
		dyn_var("entry", "${file}!/setup.ini"),
		static_var("file", "bundle.zip"),
	];

	let ordered = dynvars::resolve_order(&defs).expect("failed to resolve");
	assert_eq!(ordered.names(), vec!["file", "entry", "section", "key", "lookup"]);
}

#[test]
fn graph_has_an_edge_per_provider_input() {
	init_logging();
	let defs = vec![
		provider_var("reg", provider(ProviderKind::Registry, &[("key", "${regkey}"), ("value", "${regvalue}")])),
		static_var("regkey", "Software\\Vendor"),
		static_var("regvalue", "Path"),
	];
	let resolver = ResolverBuilder::new(&defs).build().expect("failed to build graph");
	assert_eq!(resolver.get_graph().edges(), vec![("regkey", "reg"), ("regvalue", "reg")]);
}

#[test]
fn definitions_survive_a_file_round_trip() {
	init_logging();
	let defs = vec![
		provider_var("exec", provider(ProviderKind::Exec, &[("executable", "$java"), ("args", "-version")])),
		static_var("java", "/usr/bin/java"),
	];
	let file = write_definitions_file(&defs).expect("failed to write definitions");
	let read = dynvars::definitions::read_definitions_from_path(file.path(), &DynvarsOptions::default()).expect("failed to read definitions");
	assert_eq!(read, defs);
	assert_eq!(dynvars::resolve_order(&read).unwrap().names(), vec!["java", "exec"]);
}
