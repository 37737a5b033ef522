//! End-to-end colon alignment over realistic Objective-C snippets.

use kwalign_indent::{
	AlignError, AlignmentResult, CharScanner, ColonAligner, ColonAlignmentResolver, KeyScanner, RegexScanner,
	align_colon,
};
use kwalign_primitives::{Position, Range, Rope, ScanControl, TextBuffer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn rope(lines: &[&str]) -> Rope {
	Rope::from(lines.join("\n"))
}

/// Types `:` at `pos` and applies the resulting edit, returning the new cursor.
fn type_colon(text: &mut Rope, pos: Position) -> Position {
	let idx = text.line_to_char(pos.row) + pos.column;
	text.insert_char(idx, ':');
	align_colon(&*text, pos).expect("colon was just inserted").apply(text)
}

#[test]
fn test_already_aligned_message() {
	let text = rope(&["[obj foo:1", "     bar:2]"]);
	let ins = align_colon(&text, Position::new(1, 8)).expect("colon present");
	let replacement = ins.line_replacement.expect("multi-line send rewrites");
	assert_eq!(replacement.text, "     bar:2]");
	assert_eq!(ins.cursor, Position::new(1, 9));
}

#[test]
fn test_short_keyword_is_pushed_right() {
	let text = rope(&["[ob a:1", "     bar:2]"]);
	let resolver = ColonAlignmentResolver::new();
	assert_eq!(resolver.resolve(&text, Position::new(1, 8)), Ok(AlignmentResult::Aligned(5)));

	let ins = align_colon(&text, Position::new(1, 8)).expect("colon present");
	let replacement = ins.line_replacement.expect("multi-line send rewrites");
	assert_eq!(replacement.range, Range::new(Position::new(1, 0), Position::new(1, 11)));
	assert_eq!(replacement.text, "  bar:2]");
	assert_eq!(ins.cursor, Position::new(1, 6));
}

#[test]
fn test_typing_a_method_call() {
	let mut text = rope(&["- (void)viewDidLoad {", "  [self.view addSubview"]);
	let cursor = type_colon(&mut text, Position::new(1, 23));
	assert_eq!(cursor, Position::new(1, 24));
	assert_eq!(text.line_text(1).as_deref(), Some("  [self.view addSubview:"));

	let end = text.len_chars();
	text.insert(end, "button\n   withAnimation");
	let cursor = type_colon(&mut text, Position::new(2, 16));
	assert_eq!(text.line_text(2).as_deref(), Some("          withAnimation:"));
	assert_eq!(cursor, Position::new(2, 24));
}

#[test]
fn test_typing_continuation_lines() {
	let mut text = rope(&[
		"- (void)setup {",
		"  [manager registerClass:cls",
		"    forCellReuseIdentifier",
	]);
	let cursor = type_colon(&mut text, Position::new(2, 26));
	assert_eq!(text.line_text(2).as_deref(), Some("  forCellReuseIdentifier:"));
	assert_eq!(cursor, Position::new(2, 25));

	let mut text = rope(&[
		"- (void)setup {",
		"  [manager registerClass:cls",
		"  forCellReuseIdentifier:@\"cell\"",
		"   bundle",
	]);
	let cursor = type_colon(&mut text, Position::new(3, 9));
	let expected = format!("{}bundle:", " ".repeat(18));
	assert_eq!(text.line_text(3).as_deref(), Some(expected.as_str()));
	assert_eq!(cursor, Position::new(3, 25));
}

#[test]
fn test_single_line_send_is_untouched() {
	let mut text = rope(&["[obj foo:1 bar"]);
	let before = text.to_string();
	let cursor = type_colon(&mut text, Position::new(0, 14));
	assert_eq!(text.to_string(), format!("{before}:"));
	assert_eq!(cursor, Position::new(0, 15));
}

#[test]
fn test_declaration_backstop_leaves_line_alone() {
	let text = rope(&["- (void)run {", "  foo bar", "      baz:"]);
	let ins = align_colon(&text, Position::new(2, 9)).expect("colon present");
	assert!(ins.is_noop());
	assert_eq!(ins.cursor, Position::new(2, 10));
}

#[test]
fn test_invalid_input() {
	let text = rope(&["[obj foo:1"]);
	let err = align_colon(&text, Position::new(0, 3)).expect_err("'j' is not a colon");
	assert_eq!(
		err,
		AlignError::InvalidInput {
			position: Position::new(0, 3),
			found: Some('j'),
		}
	);
	assert_eq!(err.to_string(), "expected ':' at 0:3, found 'j'");
}

#[test]
fn test_configured_window() {
	let text = rope(&["[obj foo:1", "", "", "", "     bar:"]);
	let narrow = ColonAligner::with_window(3).align_colon(&text, Position::new(4, 8)).expect("colon present");
	assert!(narrow.is_noop());
	let wide = ColonAligner::new().align_colon(&text, Position::new(4, 8)).expect("colon present");
	assert!(!wide.is_noop());
}

fn keyword() -> impl Strategy<Value = String> {
	"[a-z]{1,8}"
}

fn argument() -> impl Strategy<Value = String> {
	"[a-z0-9]{1,4}"
}

fn message() -> impl Strategy<Value = (String, String, Vec<(usize, String, String)>)> {
	(
		keyword(),
		argument(),
		prop::collection::vec((0usize..10, keyword(), argument()), 1..6),
	)
}

fn scan_all<S: KeyScanner>(scanner: &S, text: &Rope, range: Range) -> Vec<(char, Position)> {
	let mut seen = Vec::new();
	scanner.scan_backward(text, range, |m| {
		seen.push((m.character.as_char(), m.position));
		ScanControl::Continue
	});
	seen
}

proptest! {
	/// Every continuation colon ends up on the first colon's column, and
	/// re-running alignment on the result changes nothing.
	#[test]
	fn prop_alignment_is_idempotent((kw0, arg0, rest) in message()) {
		let first = format!("[obj {kw0}:{arg0}");
		let target = first.find(':').unwrap_or_default();

		let mut lines = vec![first];
		for (indent, kw, arg) in &rest {
			lines.push(format!("{}{kw}:{arg}", " ".repeat(*indent)));
		}
		if let Some(last) = lines.last_mut() {
			last.push(']');
		}
		let mut text = Rope::from(lines.join("\n"));

		for (i, (_, kw, _)) in rest.iter().enumerate() {
			let row = i + 1;
			let line = text.line_text(row).map(|l| l.into_owned()).unwrap_or_default();
			let column = line.chars().position(|c| c == ':').unwrap_or_default();
			let cursor = align_colon(&text, Position::new(row, column)).expect("colon present").apply(&mut text);

			let expected = target.max(kw.len());
			prop_assert_eq!(cursor, Position::new(row, expected + 1));
			prop_assert_eq!(text.char_at(Position::new(row, expected)), Some(':'));
		}

		let settled = text.to_string();
		for (i, (_, kw, _)) in rest.iter().enumerate() {
			let row = i + 1;
			let column = target.max(kw.len());
			let again = align_colon(&text, Position::new(row, column)).expect("colon present");
			prop_assert_eq!(again.cursor, Position::new(row, column + 1));
			again.apply(&mut text);
			prop_assert_eq!(text.to_string(), settled.clone());
		}
	}

	/// Both scanning strategies report identical match sequences.
	#[test]
	fn prop_scanners_agree(
		source in "[a-cé :\\[\\]+\\-\n]{0,80}",
		start in (0usize..6, 0usize..20),
		end in (0usize..6, 0usize..20),
	) {
		let text = Rope::from(source);
		let regex = RegexScanner::new().expect("static pattern compiles");
		let range = Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1));
		prop_assert_eq!(scan_all(&regex, &text, range), scan_all(&CharScanner, &text, range));
	}
}
