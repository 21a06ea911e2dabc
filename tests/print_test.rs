mod common;
use common::*;
use tinybasic::mach::Runtime;

#[test]
fn test_print_separators() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "A", 1, "B""#);
    assert_eq!(exec(&mut r), "A 1 B\n");
    r.enter(r#"PRINT "A";:PRINT "B""#);
    assert_eq!(exec(&mut r), "AB\n");
}

#[test]
fn test_print_nothing() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT"#);
    assert_eq!(exec(&mut r), "\n");
    r.enter(r#"PRINT:PRINT 1"#);
    assert_eq!(exec(&mut r), "\n1\n");
}

#[test]
fn test_print_trailing_comma() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT 1,"#);
    assert_eq!(exec(&mut r), "1 \n");
}

#[test]
fn test_print_keeps_case_and_spacing() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "  Hello, World:  ""#);
    assert_eq!(exec(&mut r), "  Hello, World:  \n");
}

#[test]
fn test_doubled_quote() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "SAY ""HI""""#);
    assert_eq!(exec(&mut r), "SAY \"HI\"\n");
    r.enter(r#"PRINT """""#);
    assert_eq!(exec(&mut r), "\"\n");
}

#[test]
fn test_unterminated_string() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "abc"#);
    assert_eq!(exec(&mut r), "Error: Unterminated string\n");
    r.enter(r#"10 PRINT "X":PRINT "abc"#);
    r.enter(r#"RUN"#);
    assert_eq!(exec(&mut r), "X\nError in line 10: Unterminated string\n");
}

#[test]
fn test_semicolon_ends_print() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT 1;2"#);
    assert_eq!(exec(&mut r), "1\nError: End of statement expected\n");
    r.enter(r#"10 PRINT "A";"#);
    r.enter(r#"20 PRINT "B";:GOTO 99"#);
    r.enter(r#"RUN"#);
    assert_eq!(exec(&mut r), "AB\nError in line 20: Line not found\n");
}
