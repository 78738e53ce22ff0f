use dynvars::resolve_order;
use dynvars_test_utils::*;

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn simple_dependency() {
	init_logging();
	let defs = vec![
		dyn_var("dyn1", "${static1}/bin"),
		dyn_var("dyn2", "standalone"),
		static_var("static1", "/opt/app"),
	];
	let ordered = resolve_order(&defs).expect("failed to resolve");
	let order = ordered.names();

	assert_order(&order, &["static1", "dyn1"]);
	assert_contains(&order, "dyn2");
	assert_permutation(&order, &defs);
}

#[test]
fn deeper_dependency_ignores_declaration_order() {
	init_logging();
	let defs = vec![
		dyn_var("dyn5", "${dyn4}"),
		dyn_var("dyn2", "${dyn1}"),
		dyn_var("dyn8", "${dyn7}"),
		static_var("static1", "base"),
		dyn_var("dyn1", "${static1}"),
		dyn_var("dyn7", "${dyn6}"),
		dyn_var("dyn3", "${dyn2}"),
		dyn_var("dyn6", "${dyn5}"),
		dyn_var("dyn4", "${dyn3}"),
	];
	let ordered = resolve_order(&defs).expect("failed to resolve");
	assert_eq!(ordered.names(), vec!["static1", "dyn1", "dyn2", "dyn3", "dyn4", "dyn5", "dyn6", "dyn7", "dyn8"]);
}

#[test]
fn forward_dependency() {
	init_logging();
	/* every variable is declared before the one it references */
	let mut defs: Vec<_> = (1..8).map(|n| dyn_var(&format!("dyn{}", n), &format!("${{dyn{}}}", n + 1))).collect();
	defs.push(dyn_var("dyn8", "${static1}"));
	defs.push(static_var("static1", "base"));

	let ordered = resolve_order(&defs).expect("failed to resolve");
	assert_eq!(ordered.names(), vec!["static1", "dyn8", "dyn7", "dyn6", "dyn5", "dyn4", "dyn3", "dyn2", "dyn1"]);
}

#[test]
fn mixed_dependency() {
	init_logging();
	let defs = vec![
		dyn_var("dyn1", "${static1}"),
		dyn_var("dyn2", "${dyn7}"),
		dyn_var("dyn3", "${dyn6}"),
		dyn_var("dyn4", "${dyn5}"),
		dyn_var("dyn5", "${dyn1}"),
		dyn_var("dyn6", "${dyn4}"),
		dyn_var("dyn7", "${dyn3}"),
		dyn_var("dyn8", "${dyn2}"),
		static_var("static1", "base"),
	];
	let ordered = resolve_order(&defs).expect("failed to resolve");
	assert_eq!(ordered.names(), vec!["static1", "dyn1", "dyn5", "dyn4", "dyn6", "dyn3", "dyn7", "dyn2", "dyn8"]);
}

fn separate_chains() -> Vec<dynvars::VariableDefinition> {
	vec![
		dyn_var("dyn1", "${dyn3}"),
		dyn_var("dyn2", "two"),
		dyn_var("dyn3", "${dyn5}"),
		dyn_var("dyn4", "${dyn2}"),
		dyn_var("dyn5", "${dyn7}"),
		dyn_var("dyn6", "${dyn4}"),
		dyn_var("dyn7", "seven"),
		dyn_var("dyn8", "${dyn6}"),
	]
}

#[test]
fn separate_dependency() {
	init_logging();
	let defs = separate_chains();
	let ordered = resolve_order(&defs).expect("failed to resolve");
	let order = ordered.names();

	assert_order(&order, &["dyn7", "dyn5", "dyn3", "dyn1"]);
	assert_order(&order, &["dyn2", "dyn4", "dyn6", "dyn8"]);
	assert_permutation(&order, &defs);
	/* the lowest declared ready variable goes first each step */
	assert_eq!(order, vec!["dyn2", "dyn4", "dyn6", "dyn7", "dyn5", "dyn3", "dyn1", "dyn8"]);
}

#[test]
fn parallel_dependency() {
	init_logging();
	let mut defs = vec![dyn_var("dyn10", "${dyn1}:${dyn8}")];
	defs.extend(separate_chains());

	let ordered = resolve_order(&defs).expect("failed to resolve");
	let order = ordered.names();

	assert_order(&order, &["dyn7", "dyn5", "dyn3", "dyn1", "dyn10"]);
	assert_order(&order, &["dyn2", "dyn4", "dyn6", "dyn8", "dyn10"]);
	assert_eq!(order.last(), Some(&"dyn10"));
}

#[test]
fn unconstrained_variables_keep_declaration_order() {
	init_logging();
	let defs = vec![
		static_var("static1", "1"),
		static_var("static2", "2"),
		dyn_var("dyn1", "a"),
		static_var("static3", "3"),
		dyn_var("dyn2", "b"),
	];
	let ordered = resolve_order(&defs).expect("failed to resolve");
	assert_eq!(ordered.names(), vec!["static1", "static2", "dyn1", "static3", "dyn2"]);
}

#[test]
fn repeated_resolves_are_identical() {
	init_logging();
	let mut defs = vec![dyn_var("dyn10", "${dyn1}:${dyn8}")];
	defs.extend(separate_chains());

	let first = resolve_order(&defs).expect("failed to resolve").to_resource(dynvars::ResourceFormat::Bincode).unwrap();
	for _ in 0..20 {
		let again = resolve_order(&defs).expect("failed to resolve").to_resource(dynvars::ResourceFormat::Bincode).unwrap();
		assert_eq!(again, first);
	}
}
