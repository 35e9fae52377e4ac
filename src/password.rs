//! Password strength rules.
//!
//! The rule set is fixed and ordered; the order determines the order in
//! which hint rows are displayed next to the password input. Each rule is
//! reported individually so the host can render a per-rule checklist.

use regex::Regex;
use std::sync::LazyLock;

static MIN_LENGTH_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r".{8,}").expect("MIN_LENGTH_REGEX: invalid regex pattern"));
static UPPERCASE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[A-Z]").expect("UPPERCASE_REGEX: invalid regex pattern"));
static LOWERCASE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[a-z]").expect("LOWERCASE_REGEX: invalid regex pattern"));
static DIGIT_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\d").expect("DIGIT_REGEX: invalid regex pattern"));
static SPECIAL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("SPECIAL_REGEX: invalid regex pattern"));

/// One strength rule with its display label.
#[derive(Debug)]
pub struct PasswordRequirement {
	pub label: &'static str,
	regex: &'static LazyLock<Regex>,
}

impl PasswordRequirement {
	/// Whether the password satisfies this single rule.
	pub fn is_met(&self, password: &str) -> bool {
		self.regex.is_match(password)
	}
}

/// The fixed, ordered strength rule set.
///
/// Index positions are stable: hint rows and
/// [`PasswordStrength::per_rule_results`] entries line up by index.
pub static PASSWORD_REQUIREMENTS: [PasswordRequirement; 5] = [
	PasswordRequirement {
		label: "At least 8 characters",
		regex: &MIN_LENGTH_REGEX,
	},
	PasswordRequirement {
		label: "At least one uppercase letter",
		regex: &UPPERCASE_REGEX,
	},
	PasswordRequirement {
		label: "At least one lowercase letter",
		regex: &LOWERCASE_REGEX,
	},
	PasswordRequirement {
		label: "At least one number",
		regex: &DIGIT_REGEX,
	},
	PasswordRequirement {
		label: "At least one special character (!@#$%^&*)",
		regex: &SPECIAL_REGEX,
	},
];

/// Per-rule evaluation result for a password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordStrength {
	pub all_rules_satisfied: bool,
	/// One entry per [`PASSWORD_REQUIREMENTS`] rule, in rule order.
	pub per_rule_results: Vec<bool>,
}

/// Evaluate every strength rule against the password.
///
/// `per_rule_results` always has exactly five entries, one per rule in
/// [`PASSWORD_REQUIREMENTS`] order; `all_rules_satisfied` is true iff
/// every entry is true.
///
/// # Examples
///
/// ```
/// use formflow::password::validate_password;
///
/// let strength = validate_password("Str0ng!pass");
/// assert!(strength.all_rules_satisfied);
///
/// let weak = validate_password("short");
/// assert!(!weak.all_rules_satisfied);
/// assert_eq!(weak.per_rule_results.len(), 5);
/// ```
pub fn validate_password(password: &str) -> PasswordStrength {
	let per_rule_results: Vec<bool> = PASSWORD_REQUIREMENTS
		.iter()
		.map(|requirement| requirement.is_met(password))
		.collect();
	let all_rules_satisfied = per_rule_results.iter().all(|met| *met);

	PasswordStrength {
		all_rules_satisfied,
		per_rule_results,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Abcdef1!")]
	#[case("Str0ng!pass")]
	#[case("P@ssw0rdP@ssw0rd")]
	fn test_validate_password_all_rules_met(#[case] password: &str) {
		// Arrange & Act
		let strength = validate_password(password);

		// Assert
		assert!(strength.all_rules_satisfied, "Expected '{password}' to satisfy all rules");
		assert_eq!(strength.per_rule_results, vec![true; 5]);
	}

	#[rstest]
	// index 0: length
	#[case("Ab1!", 0)]
	// index 1: uppercase
	#[case("abcdef1!", 1)]
	// index 2: lowercase
	#[case("ABCDEF1!", 2)]
	// index 3: digit
	#[case("Abcdefg!", 3)]
	// index 4: special character
	#[case("Abcdefg1", 4)]
	fn test_validate_password_single_rule_failure(
		#[case] password: &str,
		#[case] failing_index: usize,
	) {
		// Arrange & Act
		let strength = validate_password(password);

		// Assert
		assert!(!strength.all_rules_satisfied);
		assert!(!strength.per_rule_results[failing_index]);
	}

	#[test]
	fn test_rule_order_is_fixed() {
		let labels: Vec<&str> = PASSWORD_REQUIREMENTS.iter().map(|r| r.label).collect();
		assert_eq!(
			labels,
			vec![
				"At least 8 characters",
				"At least one uppercase letter",
				"At least one lowercase letter",
				"At least one number",
				"At least one special character (!@#$%^&*)",
			]
		);
	}

	#[test]
	fn test_empty_password_fails_every_rule() {
		let strength = validate_password("");
		assert_eq!(strength.per_rule_results, vec![false; 5]);
		assert!(!strength.all_rules_satisfied);
	}

	#[test]
	fn test_special_character_set_is_closed() {
		// '?' is not in the fixed special set
		let strength = validate_password("Abcdefg1?");
		assert!(!strength.per_rule_results[4]);
	}
}
