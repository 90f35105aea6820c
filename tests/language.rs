use std::{fs, io::Cursor, path::Path};

use pretty_assertions::assert_eq;
use stackto::{
    error::{Error, ErrorKind, SemanticError, StructuralError},
    interpreter::{
        evaluator::{core::Context, environment::Environment},
        value::core::Value,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "st"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_sibling(path, "out").unwrap_or_else(|| panic!("{path:?} has no .out file"));
        let input = read_sibling(path, "in").unwrap_or_default();

        count += 1;
        match capture(&source, &input) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn read_sibling(path: &Path, extension: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(extension)).ok()
}

fn capture(source: &str, input: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    run_source(source, Cursor::new(input), &mut output)?;
    Ok(String::from_utf8(output).expect("output is UTF-8"))
}

fn assert_output(source: &str, expected: &str) {
    match capture(source, "") {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn eval(text: &str) -> Result<Value, Error> {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    Context::new(&mut input, &mut output).eval_text(text, &Environment::new())
}

#[test]
fn counting_loop() {
    assert_output("mark top; set $x [ 0 ]; if [ $x 5 < ] then set $x [ $x 1 + ]; if [ $x 5 < ] \
                   then goto top; output $x;",
                  "<number : 5.0>\n");
}

#[test]
fn output_rendering() {
    assert_output("output [ 1 2 + ];", "<number : 3.0>\n");
    assert_output(r#"output [ "a" "b" + ];"#, "ab\n");
    assert_output("output [ t ];", "<bool : True>\n");
    assert_output(r#"output [ 1 "x" 2 \ ];"#, "<list : [1.0, x]>\n");
    assert_output("output [ 0 \\ ];", "<list : []>\n");
    assert_output("output [ 1 3 / ];", "<number : 0.3333333333333333>\n");
}

#[test]
fn division_by_zero_emits_nothing() {
    let mut output = Vec::new();
    let err = run_source("output [ 5 0 / ];", Cursor::new(""), &mut output).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert!(matches!(err, Error::Semantic(SemanticError::DivisionByZero { .. })));
    assert!(output.is_empty());
}

#[test]
fn duplicate_marks_fail_before_running() {
    let mut output = Vec::new();
    let err = run_source("output [ 1 ]; mark loop; output [ 2 ]; mark loop;",
                         Cursor::new(""),
                         &mut output).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(matches!(err, Error::Structural(StructuralError::DuplicateMark { first: 1, second: 3, .. })));
    assert!(output.is_empty());
}

#[test]
fn unknown_marks_fail_only_when_jumped_to() {
    assert_output("if [ f ] then goto nowhere; output [ 1 ];", "<number : 1.0>\n");

    let mut output = Vec::new();
    let err = run_source("output [ 1 ]; goto nowhere;", Cursor::new(""), &mut output).unwrap_err();
    assert!(matches!(err, Error::Semantic(SemanticError::UnknownMark { .. })));
    assert_eq!(output, b"<number : 1.0>\n");
}

#[test]
fn equality_follows_kinds() {
    let cases = [("[ 1 1 = ]", true),
                 ("[ 1 1 == ]", true),
                 (r#"[ 1 "1" = ]"#, false),
                 (r#"[ 1 "1" <> ]"#, true),
                 ("[ t t != ]", false),
                 ("[ 1 2 2 \\ 1 2 2 \\ == ]", true),
                 ("[ 1 1 \\ 1 \"1\" 1 \\ == ]", false)];

    for (text, expected) in cases {
        assert_eq!(eval(text).unwrap(), Value::Bool(expected), "{text}");
    }
}

#[test]
fn dup_matches_writing_the_literal_twice() {
    for op in ["+", "*", "-", "<", "==", "min"] {
        assert_eq!(eval(&format!("[ 5 dup {op} ]")).unwrap(),
                   eval(&format!("[ 5 5 {op} ]")).unwrap());
    }
    assert_eq!(eval(r#"[ "ab" dup + ]"#).unwrap(), Value::from("abab"));
}

#[test]
fn str_is_identity_on_strings() {
    assert_eq!(eval(r#"[ "abc" str ]"#).unwrap(), Value::from("abc"));
}

#[test]
fn pack_needs_enough_entries() {
    assert!(matches!(eval("[ 1 2 3 \\ ]"),
                     Err(Error::Semantic(SemanticError::CountExceedsStack { count: 3, height: 2, .. }))));
    assert_eq!(eval("[ 0 1 2 3 3 \\ swap drop ]").unwrap().to_string(), "[1.0, 2.0, 3.0]");
    assert_eq!(eval("[ 0 1 2 3 3 \\ drop ]").unwrap(), Value::Number(0.0));
}

#[test]
fn stack_height_must_end_at_one() {
    assert!(matches!(eval("[ 1 2 ]"),
                     Err(Error::Semantic(SemanticError::BadStackHeight { height: 2 }))));
    assert!(matches!(eval("[ 1 drop ]"),
                     Err(Error::Semantic(SemanticError::BadStackHeight { height: 0 }))));
}

#[test]
fn unknown_variables_are_semantic() {
    let err = capture("output $missing;", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);

    let err = capture("output [ $missing ];", "").unwrap_err();
    assert!(matches!(err, Error::Semantic(SemanticError::UnknownVariable { .. })));
}

#[test]
fn input_reads_one_line_per_evaluation() {
    let source = "mark again; set $line input; if [ $line \"stop\" == ] then goto done; output $line; \
                  goto again; mark done; output [ \"bye\" ];";

    assert_eq!(capture(source, "a\r\nb\nstop\nignored\n").unwrap(), "a\nb\nbye\n");
    assert_eq!(capture("if input then output [ 1 ];", "x").map_err(|e| e.kind()),
               Err(ErrorKind::Semantic));
    assert!(matches!(capture("output input;", ""), Err(Error::InputExhausted)));
}

#[test]
fn loading_errors_are_reported_by_kind() {
    let cases = [("output [ 1 2 + ;", ErrorKind::Structural),
                 ("output [ ];", ErrorKind::Structural),
                 ("if [ t ] then if [ t ] then goto a;", ErrorKind::Structural),
                 ("jump a;", ErrorKind::Structural),
                 ("set $x [ 1 .5 + ];", ErrorKind::Lexical),
                 (r#"output [ 1"a" ];"#, ErrorKind::Lexical),
                 (r#"output [ "open ];"#, ErrorKind::Lexical)];

    for (source, kind) in cases {
        let err = capture(source, "").unwrap_err();
        assert_eq!(err.kind(), kind, "{source}");
    }
}

#[test]
fn comments_do_not_run() {
    let source = "# output [ 1 ]; output [ 2 ];\noutput [ 3 ]; # trailing; output [ 4 ]";
    assert_output(source, "<number : 3.0>\n");
}

#[test]
fn operators_over_lists_and_strings() {
    assert_eq!(eval(r#"[ "a,b,c" "," split # ]"#).unwrap(), Value::Number(3.0));
    assert_eq!(eval("[ 1 2 3 3 \\ 1 nth ]").unwrap(), Value::Number(2.0));
    assert_eq!(eval("[ 1 2 3 3 \\ sum ]").unwrap(), Value::Number(6.0));
    assert_eq!(eval("[ 2 3 2 \\ 4 : prod ]").unwrap(), Value::Number(24.0));
    assert_eq!(eval("[ 1 1 \\ 2 1 \\ @ splat + ]").unwrap(), Value::Number(3.0));
    assert_eq!(eval(r#"[ "ab" 3 * ]"#).unwrap(), Value::from("ababab"));
    assert_eq!(eval(r#"[ "3.5" num 2 * str ]"#).unwrap(), Value::from("7.0"));
    assert_eq!(eval("[ 0 1 \\ type ]").unwrap(), Value::from("list"));
    assert_eq!(eval("[ 1 2 3 4 2 topn + ]").unwrap(), Value::Number(7.0));
    assert_eq!(eval("[ 1 2 3 4 2 dropn + ]").unwrap(), Value::Number(3.0));
    assert_eq!(eval("[ 1 2 3 top ]").unwrap(), Value::Number(3.0));
}

#[test]
fn rand_is_evaluated_each_time() {
    let source = "set $i [ 0 ]; mark loop; set $r [ rand ]; if [ $r 0 >= $r 1 < & ] then output [ t ]; \
                  set $i [ $i 1 + ]; if [ $i 20 < ] then goto loop;";
    assert_eq!(capture(source, "").unwrap(), "<bool : True>\n".repeat(20));
}
