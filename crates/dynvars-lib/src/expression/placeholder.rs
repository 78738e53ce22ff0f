//! Scanning of `${name}` and `$name` placeholders in expression text.

use std::sync::OnceLock;
use regex::Regex;

use super::Term;

fn placeholder_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		/* Bare names may contain '.' and '-' but never end with them so "$INSTALL_PATH." reads as a sentence */
		Regex::new(r"\$(?:\{([^{}]*)\}|([A-Za-z0-9_]+(?:[.\-][A-Za-z0-9_]+)*))").expect("placeholder pattern should compile")
	})
}

/// Splits `text` into literal runs and placeholders.
///
/// - `${NS[key]}` forms are [`Term::External`].
/// - `${}`, an unterminated `${` or a lone `$` stay literal text.
pub fn parse_template(text: &str) -> Vec<Term> {
	let mut terms = Vec::<Term>::new();
	let mut literal = String::new();
	let mut last = 0;

	for caps in placeholder_regex().captures_iter(text) {
		let whole = caps.get(0).expect("capture group 0 always exists");
		let term = if let Some(braced) = caps.get(1) {
			let inner = braced.as_str().trim();
			if inner.is_empty() {
				None
			} else if is_external(inner) {
				Some(Term::External(inner.to_string()))
			} else {
				Some(Term::Reference(inner.to_string()))
			}
		} else {
			caps.get(2).map(|bare| Term::Reference(bare.as_str().to_string()))
		};

		literal.push_str(&text[last..whole.start()]);
		last = whole.end();
		match term {
			Some(term) => {
				if !literal.is_empty() {
					terms.push(Term::Literal(std::mem::take(&mut literal)));
				}
				terms.push(term);
			},
			None => literal.push_str(whole.as_str()),
		}
	}

	literal.push_str(&text[last..]);
	if !literal.is_empty() {
		terms.push(Term::Literal(literal));
	}
	terms
}

/// `NS[key]` lookups go to the environment or system properties at install time.
fn is_external(inner: &str) -> bool {
	match inner.find('[') {
		Some(open) => open > 0 && inner.ends_with(']'),
		None => false,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn refs(text: &str) -> Vec<String> {
		parse_template(text).into_iter().filter_map(|t| if let Term::Reference(n) = t { Some(n) } else { None }).collect()
	}

	#[test] fn braced_reference() { assert_eq!(refs("${INSTALL_PATH}/bin"), vec!["INSTALL_PATH"]) }
	#[test] fn bare_reference() { assert_eq!(refs("$dir/file.ini"), vec!["dir"]) }
	#[test] fn bare_reference_keeps_inner_dots() { assert_eq!(refs("$app.version"), vec!["app.version"]) }
	#[test] fn bare_reference_drops_trailing_dot() { assert_eq!(refs("see $INSTALL_PATH."), vec!["INSTALL_PATH"]) }
	#[test] fn bare_reference_drops_trailing_dash() { assert_eq!(refs("$app-"), vec!["app"]) }
	#[test] fn braced_keeps_trailing_dot() { assert_eq!(refs("${app.}/x"), vec!["app."]) }
	#[test] fn braced_allows_any_name() { assert_eq!(refs("${my var}"), vec!["my var"]) }
	#[test] fn lone_dollar_is_literal() { assert_eq!(parse_template("costs 5 $"), vec![Term::Literal("costs 5 $".into())]) }
	#[test] fn empty_braces_are_literal() { assert_eq!(parse_template("a${}b"), vec![Term::Literal("a${}b".into())]) }
	#[test] fn unterminated_brace_is_literal() { assert!(refs("${oops").is_empty()) }
	#[test] fn no_placeholders() { assert_eq!(parse_template("plain"), vec![Term::Literal("plain".into())]) }
	#[test] fn empty_text() { assert!(parse_template("").is_empty()) }

	#[test]
	fn environment_lookup_is_external() {
		assert_eq!(
			parse_template("${ENV[HOME]}/${dir}"),
			vec![Term::External("ENV[HOME]".into()), Term::Literal("/".into()), Term::Reference("dir".into())]
		);
	}

	#[test]
	fn adjacent_placeholders() {
		assert_eq!(refs("${a}${b}$c"), vec!["a", "b", "c"]);
	}
}
