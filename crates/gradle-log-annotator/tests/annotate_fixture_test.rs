use gradle_log_annotator::{annotate, parse_failures};

#[test]
fn test_annotate_fixture_file() {
    let content = std::fs::read_to_string("tests/fixtures/gradle-build.log").unwrap();

    let failures = parse_failures(&content);
    assert_eq!(failures.len(), 2);

    assert_eq!(
        failures[0].qualified_name,
        "com.github.hexomod.macro.PreprocessorTest"
    );
    assert_eq!(failures[0].simple_name, "PreprocessorTest");
    assert_eq!(failures[0].failure_kind, "parseKeywordTest");
    assert_eq!(
        failures[0].message,
        "org.junit.ComparisonFailure: expected:<[true]> but was:<[false]>"
    );
    assert_eq!(failures[0].line_number, "87");

    assert_eq!(
        failures[1].qualified_name,
        "com.github.hexomod.macro.PreprocessorInPlaceTest"
    );
    assert_eq!(failures[1].failure_kind, "inPlaceTest");
    assert_eq!(failures[1].message, "java.lang.NullPointerException");
    assert_eq!(failures[1].line_number, "31");

    let lines = annotate(&content);
    assert_eq!(
        lines,
        vec![
            "::error file=src/test/java/com/github/hexomod/macro/PreprocessorTest.java,line=87,title=Failed in parseKeywordTest::org.junit.ComparisonFailure: expected:<[true]> but was:<[false]>",
            "::error file=src/test/java/com/github/hexomod/macro/PreprocessorInPlaceTest.java,line=31,title=Failed in inPlaceTest::java.lang.NullPointerException",
        ]
    );
}

#[test]
fn test_annotate_fixture_is_idempotent() {
    let content = std::fs::read_to_string("tests/fixtures/gradle-build.log").unwrap();
    assert_eq!(annotate(&content), annotate(&content));
}
